use thiserror::Error;

/// Terminal outcome of a failed parse. The caller gets either a complete
/// collection or one of these, never a partial result.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("upload contains no parseable text")]
    EmptyInput,
    #[error("malformed upload at line {line}: {reason}")]
    MalformedInput { line: u64, reason: MalformedKind },
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MalformedKind {
    #[error("missing header row")]
    MissingHeader,
    #[error("header declares {found} columns, need a prompt, a correct answer and at least 2 options")]
    TooFewColumns { found: usize },
    #[error("no question rows after the header")]
    NoQuestions,
    #[error("row has {found} fields, header declares {expected}")]
    FieldCountMismatch { expected: usize, found: usize },
    #[error("correct-answer cell {value:?} is not a non-negative integer")]
    CorrectIndexNotANumber { value: String },
    #[error("correct-answer index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },
    #[error("{0}")]
    Csv(String),
}

impl ParseError {
    pub(crate) fn at(line: u64, reason: MalformedKind) -> ParseError {
        ParseError::MalformedInput { line, reason }
    }
}
