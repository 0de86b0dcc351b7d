//! QR symbol encoding seam
//!
//! The QR standard (data segmentation, Reed-Solomon codewords, mask
//! selection, module placement) is consumed through the narrow
//! [`SymbolEncoder`] interface rather than implemented here. The production
//! implementation wraps a conformant encoding crate; tests substitute
//! hand-rolled doubles.

pub mod qr_encoder;

pub use qr_encoder::QrEncoder;

use crate::models::ECLevel;
use thiserror::Error;

/// Failure to encode a payload into the fixed symbol configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The payload does not fit the pinned symbol version at the requested
    /// error correction level
    #[error("input of {len} bytes exceeds version {version} capacity at EC level {ec_level}")]
    CapacityExceeded {
        /// Payload length in bytes
        len: usize,
        /// Pinned symbol version number
        version: u8,
        /// Requested error correction level
        ec_level: ECLevel,
    },
}

/// A QR symbol encoder consumed as a black box
///
/// The contract is four operations: feed payload text, finalize the symbol,
/// then query its dimension and per-module darkness. `module_count` and
/// `is_dark` report an empty symbol (0 / light) until `make` has succeeded.
pub trait SymbolEncoder {
    /// Append payload text to the pending symbol
    fn add_data(&mut self, text: &str);

    /// Finalize the symbol from the accumulated payload
    fn make(&mut self) -> Result<(), EncodeError>;

    /// Grid dimension of the finalized symbol in modules
    fn module_count(&self) -> usize;

    /// Whether the finalized symbol's module at (row, col) is dark
    fn is_dark(&self, row: usize, col: usize) -> bool;
}
