use std::ffi::OsString;
use std::fmt;

use thiserror::Error;

/// The name of an option the way it was written on the command line.
///
/// Diagnostics always refer to an option by the form it was invoked with,
/// so `-o5x` reports `-o` while `--output=5x` reports `--output`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionName {
    /// Invoked as a single character option (`-o`).
    Short(char),
    /// Invoked as a long option (`--output`), holding the full registered name.
    Long(String),
}

impl OptionName {
    /// Is this a specific short option?
    pub fn is_short(&self, c: char) -> bool {
        matches!(self, OptionName::Short(x) if *x == c)
    }

    /// Is this a specific long option?
    pub fn is_long(&self, name: &str) -> bool {
        matches!(self, OptionName::Long(x) if x == name)
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionName::Short(c) => write!(f, "-{}", c),
            OptionName::Long(name) => write!(f, "--{}", name),
        }
    }
}

/// What went wrong with the argument of a resolved option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgError {
    /// A long option was followed by something other than `=`.
    #[error("'=' expected")]
    MissingSeparator,
    /// An option without argument was given one.
    #[error("no argument expected")]
    UnexpectedArgument,
    #[error("integer value expected")]
    Integer,
    #[error("unsigned integer value expected")]
    UnsignedInteger,
    #[error("floating point value expected")]
    Float,
    /// String arguments may never be empty.
    #[error("string argument expected")]
    EmptyString,
    #[error("boolean argument expected (yes, no, true, false, 0, 1)")]
    Bool,
    #[error("character argument expected")]
    Char,
    /// A message raised by an option handler itself.
    #[error("{0}")]
    Custom(String),
}

impl ArgError {
    /// Returns the taxonomy kind of this argument error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArgError::MissingSeparator => ErrorKind::MissingSeparator,
            ArgError::UnexpectedArgument => ErrorKind::UnexpectedArgument,
            ArgError::EmptyString => ErrorKind::EmptyStringArgument,
            ArgError::Integer
            | ArgError::UnsignedInteger
            | ArgError::Float
            | ArgError::Bool
            | ArgError::Char => ErrorKind::TypeMismatch,
            ArgError::Custom(_) => ErrorKind::Custom,
        }
    }
}

impl<'s> From<&'s str> for ArgError {
    fn from(message: &'s str) -> ArgError {
        ArgError::Custom(message.to_string())
    }
}

impl From<String> for ArgError {
    fn from(message: String) -> ArgError {
        ArgError::Custom(message)
    }
}

/// A single problem found while parsing a command line.
///
/// The [`Display`](fmt::Display) implementation renders the diagnostic
/// line that is written to the sink when error printing is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unknown option --{0}")]
    UnknownLong(String),
    #[error("unknown option -{0}")]
    UnknownShort(char),
    /// A long option abbreviation matched more than one registered name.
    #[error("option --{name} is ambiguous ({})", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<&'static str>,
    },
    /// An argument taking short option appeared inside a cluster.
    #[error("option -{0} must be given separately")]
    MustBeSeparate(char),
    #[error("option {option}: {error}")]
    Argument { option: OptionName, error: ArgError },
    #[error("argument {0:?} is invalid unicode")]
    InvalidUnicode(OsString),
}

impl ParseError {
    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnknownLong(_) | ParseError::UnknownShort(_) => ErrorKind::UnknownOption,
            ParseError::Ambiguous { .. } => ErrorKind::AmbiguousOption,
            ParseError::MustBeSeparate(_) => ErrorKind::MustBeSeparate,
            ParseError::Argument { error, .. } => error.kind(),
            ParseError::InvalidUnicode(_) => ErrorKind::InvalidUnicode,
        }
    }

    /// Returns the option this error is about, if it was resolved.
    pub fn option(&self) -> Option<&OptionName> {
        match self {
            ParseError::Argument { option, .. } => Some(option),
            _ => None,
        }
    }
}

/// The kind of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    UnknownOption,
    AmbiguousOption,
    MustBeSeparate,
    MissingSeparator,
    /// The argument did not parse as the option's value type.
    TypeMismatch,
    EmptyStringArgument,
    UnexpectedArgument,
    InvalidUnicode,
    Custom,
}
