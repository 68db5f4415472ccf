/// LevelPalette policy for coloring nodes by generation distance
///
/// Colors get darker the further a generation is from the focal person and
/// repeat after six generations. Ancestors and descendants at the same
/// distance share a color.
pub struct LevelPalette;

impl LevelPalette {
    const COLORS: [&'static str; 6] = [
        "#e1bee7", "#ce93d8", "#ba68c8", "#9c27b0", "#7b1fa2", "#4a148c",
    ];

    /// Background color for a node on `level`
    pub fn color_for(level: i32) -> &'static str {
        let distance = level.unsigned_abs() as usize;
        Self::COLORS[distance % Self::COLORS.len()]
    }
}
