use crate::hierarchy::domain::PersonName;
use crate::shared::error::HierarchyError;
use crate::shared::Result;

/// Number of generations shown in each direction when nothing else is asked
pub const DEFAULT_LEVELS: i64 = 2;

/// ReportRequest - validated request for the hierarchy report use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// The person placed at level 0
    pub focal: PersonName,
    /// How many generations of ancestors to include
    pub up_levels: u32,
    /// How many generations of descendants to include
    pub down_levels: u32,
}

impl ReportRequest {
    pub fn new(focal: PersonName, up_levels: u32, down_levels: u32) -> Self {
        Self {
            focal,
            up_levels,
            down_levels,
        }
    }

    /// Starts a builder taking raw user input
    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }
}

/// Builder validating raw user input into a [`ReportRequest`]
///
/// Checks run in a fixed order and the first failure is returned:
/// blank name, then upward levels, then downward levels.
#[derive(Debug, Clone)]
pub struct ReportRequestBuilder {
    person_name: String,
    up_levels: i64,
    down_levels: i64,
}

impl Default for ReportRequestBuilder {
    fn default() -> Self {
        Self {
            person_name: String::new(),
            up_levels: DEFAULT_LEVELS,
            down_levels: DEFAULT_LEVELS,
        }
    }
}

impl ReportRequestBuilder {
    pub fn person_name(mut self, name: impl Into<String>) -> Self {
        self.person_name = name.into();
        self
    }

    pub fn up_levels(mut self, levels: i64) -> Self {
        self.up_levels = levels;
        self
    }

    pub fn down_levels(mut self, levels: i64) -> Self {
        self.down_levels = levels;
        self
    }

    pub fn build(self) -> Result<ReportRequest> {
        if self.person_name.trim().is_empty() {
            return Err(HierarchyError::validation("Please enter your name.").into());
        }
        let up_levels = Self::level_count(self.up_levels, "Upward")?;
        let down_levels = Self::level_count(self.down_levels, "Downward")?;
        let focal = PersonName::new(self.person_name)?;

        Ok(ReportRequest::new(focal, up_levels, down_levels))
    }

    fn level_count(value: i64, direction: &str) -> Result<u32> {
        if value < 0 {
            return Err(HierarchyError::validation(format!(
                "{} Levels must be a non-negative number.",
                direction
            ))
            .into());
        }
        u32::try_from(value).map_err(|_| {
            HierarchyError::validation(format!(
                "{} Levels is too large (maximum {}).",
                direction,
                u32::MAX
            ))
            .into()
        })
    }
}
