use crate::shared::error::HierarchyError;
use crate::shared::Result;
use serde::Serialize;

/// Maximum length for person names (security limit)
const MAX_PERSON_NAME_LENGTH: usize = 255;

/// NewType wrapper for a person identifier with validation
///
/// Names are trimmed on construction, so `" Meet "` and `"Meet"` are the
/// same person. No other normalization happens: matching is case sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(HierarchyError::validation("Person name cannot be empty").into());
        }

        // Security: Length limit to prevent DoS
        if trimmed.len() > MAX_PERSON_NAME_LENGTH {
            return Err(HierarchyError::validation(format!(
                "Person name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_PERSON_NAME_LENGTH
            ))
            .into());
        }

        if trimmed.chars().any(char::is_control) {
            return Err(HierarchyError::validation(
                "Person name contains control characters",
            )
            .into());
        }

        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
