//! Stable error codes for lexical diagnostics.

use std::fmt;

use crate::Severity;

/// Error codes for all lexer diagnostics.
///
/// Codes are stable: a code keeps its meaning across releases and new
/// problems get new codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorCode {
    /// Integer literal does not fit in `i32` (read as a real instead)
    E0001,
    /// Real literal is not a finite `f64`
    E0002,
    /// String literal has no closing parenthesis
    E0003,
    /// Unrecognized escape in a string literal
    E0004,
    /// Bad byte in, or missing end of, a hexadecimal string
    E0005,
    /// Malformed `#` escape or embedded NUL in a name
    E0006,
    /// Decoded name longer than the configured limit
    E0007,
    /// Letter run that is not a keyword
    E0008,
    /// Byte that cannot start any token
    E0009,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
        }
    }

    /// Descriptive name of the problem.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "IntegerOverflow",
            ErrorCode::E0002 => "RealOverflow",
            ErrorCode::E0003 => "UnbalancedStringLiteral",
            ErrorCode::E0004 => "InvalidEscapeSequence",
            ErrorCode::E0005 => "InvalidHexStringLiteral",
            ErrorCode::E0006 => "InvalidNameLiteral",
            ErrorCode::E0007 => "NameTooLong",
            ErrorCode::E0008 => "UnknownKeyword",
            ErrorCode::E0009 => "UnexpectedCharacter",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ErrorCode::E0001 | ErrorCode::E0004 | ErrorCode::E0007 => Severity::Warning,
            ErrorCode::E0002
            | ErrorCode::E0003
            | ErrorCode::E0005
            | ErrorCode::E0006
            | ErrorCode::E0008
            | ErrorCode::E0009 => Severity::Error,
        }
    }

    /// Message template; `{0}`, `{1}`, ... are filled from the arguments.
    pub fn template(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "integer `{0}` does not fit in 32 bits and was read as a real",
            ErrorCode::E0002 => "real number `{0}` is out of range",
            ErrorCode::E0003 => "string literal is missing its closing parenthesis",
            ErrorCode::E0004 => "unrecognized escape sequence `\\{0}`",
            ErrorCode::E0005 => "invalid hexadecimal string: {0}",
            ErrorCode::E0006 => "invalid name: {0}",
            ErrorCode::E0007 => "name is {0} bytes long, more than the limit of {1}",
            ErrorCode::E0008 => "unknown keyword `{0}`",
            ErrorCode::E0009 => "unexpected character {0}",
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0003"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
