pub mod errors;
pub mod token;

pub use errors::{LintError, Result};
pub use token::{PosTag, Token, PARTIAL_PROPER_NAME_MARKER, PROPER_NAME_MARKER};
