use std::fmt;
use std::str::FromStr;

/// QR symbol version (Model 2, versions 1-40)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version(u8);

/// The symbol version every matrix is built at (25x25 modules)
pub const SYMBOL_VERSION: Version = Version(2);

impl Version {
    /// Create a version, panicking outside the 1-40 Model 2 range
    pub const fn new(number: u8) -> Self {
        assert!(number >= 1 && number <= 40);
        Version(number)
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the grid dimension in modules (width = height)
    pub fn module_count(&self) -> usize {
        4 * self.0 as usize + 17
    }
}

/// Error correction level
///
/// Ordered by increasing error-correction strength and decreasing data
/// capacity: L < M < Q < H.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    #[default]
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Parse an error correction level from its standard letter
    ///
    /// Case-insensitive; anything else is `None`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'L' => Some(ECLevel::L),
            'M' => Some(ECLevel::M),
            'Q' => Some(ECLevel::Q),
            'H' => Some(ECLevel::H),
            _ => None,
        }
    }

    /// The standard letter for this level
    pub fn letter(&self) -> char {
        match self {
            ECLevel::L => 'L',
            ECLevel::M => 'M',
            ECLevel::Q => 'Q',
            ECLevel::H => 'H',
        }
    }

    /// Byte-mode data capacity at this level for small symbol versions
    ///
    /// Values from the ISO capacity tables for versions 1-4; `None` for
    /// versions this crate does not build.
    pub fn byte_capacity(&self, version: Version) -> Option<usize> {
        let row = match version.number() {
            1 => [17, 14, 11, 7],
            2 => [32, 26, 20, 14],
            3 => [53, 42, 32, 24],
            4 => [78, 62, 46, 34],
            _ => return None,
        };

        let idx = match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        };
        Some(row[idx])
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for ECLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                ECLevel::from_letter(letter).ok_or_else(|| format!("invalid EC level '{}'", s))
            }
            _ => Err(format!("invalid EC level '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_module_count() {
        assert_eq!(Version::new(1).module_count(), 21);
        assert_eq!(Version::new(2).module_count(), 25);
        assert_eq!(Version::new(40).module_count(), 177);
    }

    #[test]
    fn test_pinned_version() {
        assert_eq!(SYMBOL_VERSION.number(), 2);
        assert_eq!(SYMBOL_VERSION.module_count(), 25);
    }

    #[test]
    fn test_ec_level_letters() {
        assert_eq!(ECLevel::from_letter('L'), Some(ECLevel::L));
        assert_eq!(ECLevel::from_letter('m'), Some(ECLevel::M));
        assert_eq!(ECLevel::from_letter('Q'), Some(ECLevel::Q));
        assert_eq!(ECLevel::from_letter('h'), Some(ECLevel::H));
        assert_eq!(ECLevel::from_letter('X'), None);
    }

    #[test]
    fn test_ec_level_parse() {
        assert_eq!("L".parse::<ECLevel>(), Ok(ECLevel::L));
        assert_eq!(" q ".parse::<ECLevel>(), Ok(ECLevel::Q));
        assert!("".parse::<ECLevel>().is_err());
        assert!("LM".parse::<ECLevel>().is_err());
    }

    #[test]
    fn test_default_is_low() {
        assert_eq!(ECLevel::default(), ECLevel::L);
    }

    #[test]
    fn test_capacity_ordering() {
        // Stricter levels always trade capacity away
        for version in [Version::new(1), SYMBOL_VERSION, Version::new(4)] {
            let l = ECLevel::L.byte_capacity(version).unwrap();
            let m = ECLevel::M.byte_capacity(version).unwrap();
            let q = ECLevel::Q.byte_capacity(version).unwrap();
            let h = ECLevel::H.byte_capacity(version).unwrap();
            assert!(l >= m && m >= q && q >= h);
        }
    }

    #[test]
    fn test_capacity_unknown_version() {
        assert_eq!(ECLevel::L.byte_capacity(Version::new(5)), None);
    }
}
