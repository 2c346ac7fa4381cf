//! Line-oriented text format for configuration and output files.
//!
//! A configuration file starts with a `p vs ds` header followed by one
//! proposal line per instance. An output file is one decided-set line per
//! completed instance. Values on a line are separated by whitespace and a
//! line may be empty. Only the shape of the text is checked here.

use crate::types::{Configuration, Output, Params, Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Config file `{file}` is missing a header")]
    MissingHeader { file: String },

    #[error("Config file `{file}`: header `{header}` is not three non-negative integers `p vs ds`")]
    MalformedHeader { file: String, header: String },

    #[error("File `{file}`, line {line}: `{token}` is not a valid value")]
    MalformedLine {
        file: String,
        line: usize,
        token: String,
    },
}

impl ParseError {
    /// Identifier of the file the error was found in.
    pub fn file(&self) -> &str {
        match self {
            ParseError::MissingHeader { file }
            | ParseError::MalformedHeader { file, .. }
            | ParseError::MalformedLine { file, .. } => file,
        }
    }
}

/// Parse a configuration file's text. `source` names the file in errors.
pub fn parse_configuration(source: &str, text: &str) -> Result<Configuration, ParseError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| ParseError::MissingHeader {
        file: source.to_string(),
    })?;
    let params = parse_header(source, header)?;

    let proposals = lines
        .enumerate()
        // Header is line 1.
        .map(|(i, line)| parse_values(source, i + 2, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Configuration::new(source, params, proposals))
}

/// Parse an output file's text. `source` names the file in errors.
pub fn parse_output(source: &str, text: &str) -> Result<Output, ParseError> {
    let decide_sets = text
        .lines()
        .enumerate()
        .map(|(i, line)| parse_values(source, i + 1, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Output::new(source, decide_sets))
}

/// Parse one record line. `line` is the 1-based line number within the file.
pub fn parse_values(source: &str, line: usize, text: &str) -> Result<Vec<Value>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<Value>().map_err(|_| ParseError::MalformedLine {
                file: source.to_string(),
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_header(source: &str, header: &str) -> Result<Params, ParseError> {
    let malformed = || ParseError::MalformedHeader {
        file: source.to_string(),
        header: header.to_string(),
    };

    let fields = header
        .split_whitespace()
        .map(|token| token.parse::<usize>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;

    match fields.as_slice() {
        &[p, vs, ds] => Ok(Params::new(p, vs, ds)),
        _ => Err(malformed()),
    }
}
