use super::{EncodeError, SymbolEncoder};
use crate::models::{ECLevel, SYMBOL_VERSION, Version};

/// Production symbol encoder backed by the `qrcodegen` crate
///
/// Pinned to [`SYMBOL_VERSION`]; payloads that do not fit surface as
/// [`EncodeError::CapacityExceeded`].
pub struct QrEncoder {
    ec_level: ECLevel,
    version: Version,
    data: String,
    symbol: Option<qrcodegen::QrCode>,
}

impl QrEncoder {
    /// Create an encoder for the pinned symbol version at the given level
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            version: SYMBOL_VERSION,
            data: String::new(),
            symbol: None,
        }
    }
}

impl SymbolEncoder for QrEncoder {
    fn add_data(&mut self, text: &str) {
        self.data.push_str(text);
    }

    fn make(&mut self) -> Result<(), EncodeError> {
        let segments = qrcodegen::QrSegment::make_segments(&self.data);
        let version = qrcodegen::Version::new(self.version.number());

        // Both ends of the version range pinned and EC boosting off, so an
        // oversized payload fails instead of the symbol growing a version.
        let symbol = qrcodegen::QrCode::encode_segments_advanced(
            &segments,
            to_ecc(self.ec_level),
            version,
            version,
            None,
            false,
        )
        .map_err(|_| EncodeError::CapacityExceeded {
            len: self.data.len(),
            version: self.version.number(),
            ec_level: self.ec_level,
        })?;

        self.symbol = Some(symbol);
        Ok(())
    }

    fn module_count(&self) -> usize {
        match &self.symbol {
            Some(symbol) => symbol.size() as usize,
            None => 0,
        }
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        match &self.symbol {
            // qrcodegen addresses modules as (x, y) = (col, row)
            Some(symbol) => symbol.get_module(col as i32, row as i32),
            None => false,
        }
    }
}

fn to_ecc(level: ECLevel) -> qrcodegen::QrCodeEcc {
    match level {
        ECLevel::L => qrcodegen::QrCodeEcc::Low,
        ECLevel::M => qrcodegen::QrCodeEcc::Medium,
        ECLevel::Q => qrcodegen::QrCodeEcc::Quartile,
        ECLevel::H => qrcodegen::QrCodeEcc::High,
    }
}
