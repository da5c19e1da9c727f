pub mod color;
pub mod extract;

#[cfg(test)]
pub mod tests;

pub use crate::color::Color;
pub use crate::extract::{dominant_colors, quantize, try_dominant_colors, ExtractorConfig};
