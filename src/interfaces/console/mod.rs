//! Interactive console front end.

pub mod parse;
pub mod prompt;
pub mod report;

pub use prompt::Console;
