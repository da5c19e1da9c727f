use std::fmt;

/// A palette color and how many pixels of the resized image it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub rgb: [u8; 3],
    pub count: u32,
}

impl Color {
    pub fn new(rgb: [u8; 3], count: u32) -> Self {
        Color { rgb, count }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Most prevalent first. Ties keep their original order.
pub fn sort_by_prevalence(colors: &mut [Color]) {
    colors.sort_by(|a, b| b.count.cmp(&a.count));
}
