pub mod csv;
pub mod json;
pub mod terminal;

pub use csv::CsvWriter;
pub use json::JsonWriter;
pub use terminal::TerminalWriter;
