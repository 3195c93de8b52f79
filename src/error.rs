use thiserror::Error;

/// Errors from polynomial arithmetic and root search.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("the zero polynomial has no degree")]
    InvalidDegree,

    #[error("cannot search roots of a polynomial of degree {degree}")]
    DegreeTooLow { degree: u32 },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors from reading a polynomial out of text.
///
/// Positions index the input after whitespace has been removed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty polynomial")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("term at position {pos} must start with '+' or '-'")]
    MissingSign { pos: usize },

    #[error("term at position {pos} has neither a coefficient nor x")]
    EmptyTerm { pos: usize },

    #[error("exponent at position {pos} is not preceded by x")]
    DanglingExponent { pos: usize },

    #[error("invalid number '{literal}' at position {pos}")]
    InvalidNumber { literal: String, pos: usize },
}
