pub mod parse;
pub mod types;

pub use parse::{parse_configuration, parse_output, ParseError};
pub use types::{Configuration, Output, Params, Value};
