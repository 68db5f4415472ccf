use crate::hierarchy::domain::{PersonName, Relation};
use crate::ports::outbound::RelationParser;
use crate::shared::error::HierarchyError;
use crate::shared::Result;

const EXPECTED_HEADER: [&str; 2] = ["Parent", "Children"];

/// CsvRelationParser adapter reading `Parent,Children` tables
///
/// The first field of each row is the parent. Every later field is split
/// on commas, so both `A,"B, C"` and `A,B,C` list the children B and C.
/// Rows with a blank parent are skipped, and a repeated parent replaces
/// the children given by its earlier row.
pub struct CsvRelationParser;

impl CsvRelationParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_error(details: impl Into<String>) -> anyhow::Error {
        HierarchyError::RelationParseError {
            details: details.into(),
        }
        .into()
    }

    fn check_header(header: &csv::StringRecord) -> Result<()> {
        let fields: Vec<&str> = header.iter().collect();
        if fields != EXPECTED_HEADER {
            return Err(Self::parse_error(format!(
                "Invalid CSV header. Expected \"Parent,Children\", found \"{}\"",
                fields.join(",")
            )));
        }
        Ok(())
    }

    fn children_of_row(record: &csv::StringRecord, line: u64) -> Result<Vec<PersonName>> {
        record
            .iter()
            .skip(1)
            .flat_map(|field| field.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                PersonName::new(token)
                    .map_err(|e| Self::parse_error(format!("line {}: {}", line, e)))
            })
            .collect()
    }
}

impl Default for CsvRelationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationParser for CsvRelationParser {
    fn parse_relation(&self, content: &str) -> Result<Relation> {
        let mut relation = Relation::new();
        if content.trim().is_empty() {
            return Ok(relation);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let header = reader
            .headers()
            .map_err(|e| Self::parse_error(e.to_string()))?
            .clone();
        Self::check_header(&header)?;

        for result in reader.records() {
            let record = result.map_err(|e| Self::parse_error(e.to_string()))?;
            let line = record.position().map_or(0, |p| p.line());

            let parent = match record.get(0) {
                Some(parent) if !parent.is_empty() => parent,
                _ => continue,
            };
            let parent = PersonName::new(parent)
                .map_err(|e| Self::parse_error(format!("line {}: {}", line, e)))?;
            let children = Self::children_of_row(&record, line)?;

            relation.insert(parent, children);
        }

        Ok(relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Relation {
        CsvRelationParser::new().parse_relation(content).unwrap()
    }

    fn children(relation: &Relation, parent: &str) -> Vec<String> {
        relation
            .children_of(&PersonName::new(parent).unwrap())
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_quoted_children_field() {
        let relation = parse("Parent,Children\nA,\"B, C\"\nB,D\n");

        assert_eq!(relation.len(), 2);
        assert_eq!(children(&relation, "A"), vec!["B", "C"]);
        assert_eq!(children(&relation, "B"), vec!["D"]);
    }

    #[test]
    fn test_unquoted_trailing_fields() {
        let relation = parse("Parent,Children\nA,B,C,D\n");
        assert_eq!(children(&relation, "A"), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_whitespace_and_empty_tokens_dropped() {
        let relation = parse("Parent,Children\n  A  ,\" B ,, C , \"\n");
        assert_eq!(children(&relation, "A"), vec!["B", "C"]);
    }

    #[test]
    fn test_blank_parent_rows_are_dropped() {
        let relation = parse("Parent,Children\n,X\n   ,Y\nA,B\n\n");
        assert_eq!(relation.len(), 1);
        assert!(relation.contains_parent(&PersonName::new("A").unwrap()));
    }

    #[test]
    fn test_parent_without_children() {
        let relation = parse("Parent,Children\nA,\nB\n");
        assert!(children(&relation, "A").is_empty());
        assert!(children(&relation, "B").is_empty());
    }

    #[test]
    fn test_later_duplicate_row_replaces_children() {
        let relation = parse("Parent,Children\nA,B\nC,D\nA,E\n");

        assert_eq!(children(&relation, "A"), vec!["E"]);
        let order: Vec<String> = relation
            .entries()
            .iter()
            .map(|e| e.parent().to_string())
            .collect();
        assert_eq!(order, vec!["A", "C"]);
    }

    #[test]
    fn test_header_is_trimmed() {
        let relation = parse(" Parent , Children \nA,B\n");
        assert_eq!(relation.len(), 1);
    }

    #[test]
    fn test_wrong_header_is_rejected() {
        let err = CsvRelationParser::new()
            .parse_relation("Name,Kids\nA,B\n")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<HierarchyError>(),
            Some(HierarchyError::RelationParseError { .. })
        ));
        assert!(err.to_string().contains("Expected \"Parent,Children\""));
    }

    #[test]
    fn test_header_with_extra_column_is_rejected() {
        assert!(CsvRelationParser::new()
            .parse_relation("Parent,Children,Notes\nA,B,x\n")
            .is_err());
    }

    #[test]
    fn test_header_only_yields_empty_relation() {
        assert!(parse("Parent,Children\n").is_empty());
    }

    #[test]
    fn test_blank_content_yields_empty_relation() {
        assert!(parse("  \n\n").is_empty());
    }
}
