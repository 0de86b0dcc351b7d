/// Bit-packed square grid of QR modules
///
/// Rows and columns are indexed from the top-left corner; `true` means the
/// module is dark. Built once by the matrix builder and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QRMatrix {
    module_count: usize,
    data: Vec<u8>,
}

impl QRMatrix {
    /// Create an all-light matrix with the given module count
    pub(crate) fn new(module_count: usize) -> Self {
        let bytes_needed = (module_count * module_count + 7) / 8;
        Self {
            module_count,
            data: vec![0; bytes_needed],
        }
    }

    /// Grid dimension in modules (width = height)
    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// Whether the module at (row, col) is dark
    ///
    /// Out-of-range coordinates read as light.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        if row >= self.module_count || col >= self.module_count {
            return false;
        }
        let index = row * self.module_count + col;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set the module at (row, col)
    pub(crate) fn set_dark(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.module_count || col >= self.module_count {
            return;
        }
        let index = row * self.module_count + col;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if dark {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Materialize the grid as row-major boolean rows
    ///
    /// Always `module_count` rows of `module_count` cells each.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.module_count)
            .map(|row| {
                (0..self.module_count)
                    .map(|col| self.is_dark(row, col))
                    .collect()
            })
            .collect()
    }

    /// Count of dark modules in the grid
    pub fn dark_module_count(&self) -> usize {
        (0..self.module_count)
            .map(|row| {
                (0..self.module_count)
                    .filter(|&col| self.is_dark(row, col))
                    .count()
            })
            .sum()
    }

    /// Raw packed bits, row-major, LSB first within each byte
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut matrix = QRMatrix::new(8);
        assert_eq!(matrix.module_count(), 8);

        matrix.set_dark(3, 4, true);
        assert!(matrix.is_dark(3, 4));
        assert!(!matrix.is_dark(4, 3));

        matrix.set_dark(3, 4, false);
        assert!(!matrix.is_dark(3, 4));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = QRMatrix::new(8);
        matrix.set_dark(10, 10, true); // Should not panic
        assert!(!matrix.is_dark(10, 10));
    }

    #[test]
    fn test_to_rows_shape() {
        let mut matrix = QRMatrix::new(5);
        matrix.set_dark(0, 4, true);
        matrix.set_dark(4, 0, true);

        let rows = matrix.to_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert!(rows[0][4]);
        assert!(rows[4][0]);
        assert!(!rows[4][4]);
    }

    #[test]
    fn test_dark_module_count() {
        let mut matrix = QRMatrix::new(4);
        assert_eq!(matrix.dark_module_count(), 0);

        matrix.set_dark(0, 0, true);
        matrix.set_dark(1, 2, true);
        matrix.set_dark(3, 3, true);
        assert_eq!(matrix.dark_module_count(), 3);
    }
}
