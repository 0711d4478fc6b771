//! Fixed colour palette for chart slices

/// Swatches assigned to categories in first-seen order
pub const PALETTE: [&str; 6] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#a4de6c", "#d0ed57",
];

/// Colour at `index`, cycling through the palette
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), "#8884d8");
        assert_eq!(palette_color(5), "#d0ed57");
        assert_eq!(palette_color(6), "#8884d8");
        assert_eq!(palette_color(13), "#82ca9d");
    }
}
