/// GenerationNaming policy for human-readable generation labels
///
/// Level 0 is the focal person; -1 parents, -2 grandparents, and every
/// further step adds one "great-". The same applies downwards with children.
pub struct GenerationNaming;

impl GenerationNaming {
    pub fn label(level: i32) -> String {
        match level {
            0 => "Focal person".to_string(),
            -1 => "Parents".to_string(),
            1 => "Children".to_string(),
            l if l < 0 => Self::with_greats(l.unsigned_abs(), "grandparents"),
            l => Self::with_greats(l.unsigned_abs(), "grandchildren"),
        }
    }

    fn with_greats(distance: u32, base: &str) -> String {
        let greats = distance.saturating_sub(2) as usize;
        let label = format!("{}{}", "great-".repeat(greats), base);
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_generations() {
        assert_eq!(GenerationNaming::label(0), "Focal person");
        assert_eq!(GenerationNaming::label(-1), "Parents");
        assert_eq!(GenerationNaming::label(1), "Children");
        assert_eq!(GenerationNaming::label(-2), "Grandparents");
        assert_eq!(GenerationNaming::label(2), "Grandchildren");
    }

    #[test]
    fn test_great_prefixes() {
        assert_eq!(GenerationNaming::label(-3), "Great-grandparents");
        assert_eq!(GenerationNaming::label(4), "Great-great-grandchildren");
    }
}
