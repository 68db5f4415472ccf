use crate::hierarchy::domain::Relation;
use crate::shared::Result;

/// RelationParser port decoding tabular family data into a [`Relation`]
pub trait RelationParser {
    /// Parses the raw table text
    ///
    /// # Errors
    /// Returns an error if the header is not the expected one or a row
    /// cannot be decoded. Implementations must not return a partial relation.
    fn parse_relation(&self, content: &str) -> Result<Relation>;
}
