/// Formatter adapters for the supported report output formats
mod flow_json_formatter;
mod markdown_formatter;

pub use flow_json_formatter::FlowJsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
