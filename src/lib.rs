//! qr_matrix - QR module matrix construction
//!
//! Builds the dark/light module grid of a QR symbol at a fixed symbol
//! version (version 2, 25x25 modules) from input text and an error
//! correction level. The QR standard itself is consumed as a black box
//! through the [`SymbolEncoder`] seam; this crate owns the build contract
//! and the materialized grid.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod config;
mod debug;
/// QR symbol encoding seam (trait, production encoder, error type)
pub mod encoder;
/// Core data structures (QRMatrix, ECLevel, Version)
pub mod models;

pub use encoder::{EncodeError, QrEncoder, SymbolEncoder};
pub use models::{ECLevel, QRMatrix, SYMBOL_VERSION, Version};

use debug::debug_enabled;

/// Build the module matrix for a text payload
///
/// # Arguments
/// * `data` - Arbitrary text payload to encode
/// * `ec_level` - Error correction level (L/M/Q/H)
///
/// # Returns
/// A 25x25 [`QRMatrix`], or [`EncodeError::CapacityExceeded`] when the
/// payload does not fit the pinned symbol version at the requested level.
///
/// # Example
/// ```
/// use qr_matrix::{ECLevel, build_matrix};
///
/// let matrix = build_matrix("HELLO", ECLevel::L).unwrap();
/// assert_eq!(matrix.module_count(), 25);
/// ```
pub fn build_matrix(data: &str, ec_level: ECLevel) -> Result<QRMatrix, EncodeError> {
    build_matrix_with(QrEncoder::new(ec_level), data)
}

/// Build a module matrix through any symbol encoder
///
/// Feeds the payload, finalizes the symbol, then materializes a row-major
/// grid by querying darkness for every (row, col) pair in range. The
/// returned matrix always has exactly `module_count` rows and columns.
pub fn build_matrix_with<E: SymbolEncoder>(
    mut symbol_encoder: E,
    data: &str,
) -> Result<QRMatrix, EncodeError> {
    symbol_encoder.add_data(data);
    symbol_encoder.make()?;

    let module_count = symbol_encoder.module_count();
    let mut matrix = QRMatrix::new(module_count);
    for row in 0..module_count {
        for col in 0..module_count {
            matrix.set_dark(row, col, symbol_encoder.is_dark(row, col));
        }
    }

    if debug_enabled() {
        eprintln!(
            "BUILD: {} bytes -> {}x{} modules, {} dark",
            data.len(),
            module_count,
            module_count,
            matrix.dark_module_count()
        );
    }

    Ok(matrix)
}

// ============== Parallel Batch Construction with Rayon ==============

use rayon::prelude::*;

/// Build one matrix per payload in parallel
///
/// Every build is independent and stateless, so payloads are distributed
/// across the rayon thread pool. Results come back in input order.
pub fn build_matrices_parallel(
    payloads: &[&str],
    ec_level: ECLevel,
) -> Vec<Result<QRMatrix, EncodeError>> {
    payloads
        .par_iter()
        .map(|data| build_matrix(data, ec_level))
        .collect()
}

/// Matrix builder with a configured error correction level
pub struct MatrixBuilder {
    /// Level applied to every build
    ec_level: ECLevel,
}

impl MatrixBuilder {
    /// Create a builder with the default level
    ///
    /// Reads `QR_DEFAULT_EC` from the environment, falling back to `L`.
    pub fn new() -> Self {
        Self {
            ec_level: config::default_ec_level(),
        }
    }

    /// Create a builder with a specific error correction level
    pub fn with_ec_level(ec_level: ECLevel) -> Self {
        Self { ec_level }
    }

    /// The level this builder applies
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Build the module matrix for a single payload
    pub fn build(&self, data: &str) -> Result<QRMatrix, EncodeError> {
        build_matrix(data, self.ec_level)
    }

    /// Build matrices for a batch of payloads in parallel
    pub fn build_all(&self, payloads: &[&str]) -> Vec<Result<QRMatrix, EncodeError>> {
        build_matrices_parallel(payloads, self.ec_level)
    }
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}
