//! Domain layer: the numeric-format family and bit-pattern decoding.

pub mod decode;
pub mod errors;
pub mod format;

pub use decode::{DecodedValue, FloatClass};
pub use errors::DecodeError;
pub use format::FloatFormat;
