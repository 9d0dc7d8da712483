pub mod report_formatter;
