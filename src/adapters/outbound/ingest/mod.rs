/// Ingest adapters turning uploaded text into a relation
mod csv_relation_parser;

pub use csv_relation_parser::CsvRelationParser;
