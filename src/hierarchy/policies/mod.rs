mod generation_naming;
mod level_palette;

pub use generation_naming::GenerationNaming;
pub use level_palette::LevelPalette;
