//! Series colours.

/// The `tab10` categorical palette.
pub const TAB10: [(u8, u8, u8); 10] = [
    (31, 119, 180),  // Blue
    (255, 127, 14),  // Orange
    (44, 160, 44),   // Green
    (214, 39, 40),   // Red
    (148, 103, 189), // Purple
    (140, 86, 75),   // Brown
    (227, 119, 194), // Pink
    (127, 127, 127), // Gray
    (188, 189, 34),  // Olive
    (23, 190, 207),  // Cyan
];

/// Colour of the series at `index`, cycling through the palette.
pub fn series_color(index: usize) -> (u8, u8, u8) {
    TAB10[index % TAB10.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(series_color(0), (31, 119, 180));
        assert_eq!(series_color(10), series_color(0));
        assert_eq!(series_color(13), (214, 39, 40));
    }
}
