pub mod matrix;
pub mod symbol;

pub use matrix::QRMatrix;
pub use symbol::{ECLevel, SYMBOL_VERSION, Version};
