//! Diagnostic values.
//!
//! A [`DiagnosticInfo`] is a code plus message arguments. A
//! [`SyntaxDiagnosticInfo`] places one inside a syntax node: `offset` is
//! relative to the start of the node the diagnostic is attached to (including
//! that node's leading trivia), never an absolute source position. Nodes are
//! position-independent, so an absolute position only exists once a node is
//! viewed from its root.

use std::fmt;

use smallvec::SmallVec;

use crate::ErrorCode;

/// Diagnostic severity level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A value substituted into a message template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticArg {
    Text(Box<str>),
    /// A raw source byte, rendered as a quoted character when printable.
    Byte(u8),
    Integer(i64),
}

impl fmt::Display for DiagnosticArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticArg::Text(text) => f.write_str(text),
            DiagnosticArg::Byte(b) if b.is_ascii_graphic() => write!(f, "'{}'", char::from(*b)),
            DiagnosticArg::Byte(b) => write!(f, "0x{b:02X}"),
            DiagnosticArg::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for DiagnosticArg {
    fn from(text: &str) -> Self {
        DiagnosticArg::Text(text.into())
    }
}

impl From<String> for DiagnosticArg {
    fn from(text: String) -> Self {
        DiagnosticArg::Text(text.into_boxed_str())
    }
}

impl From<u8> for DiagnosticArg {
    fn from(b: u8) -> Self {
        DiagnosticArg::Byte(b)
    }
}

impl From<i64> for DiagnosticArg {
    fn from(n: i64) -> Self {
        DiagnosticArg::Integer(n)
    }
}

impl From<usize> for DiagnosticArg {
    fn from(n: usize) -> Self {
        DiagnosticArg::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

/// An error code with its message arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiagnosticInfo {
    code: ErrorCode,
    args: SmallVec<[DiagnosticArg; 2]>,
}

impl DiagnosticInfo {
    pub fn new(code: ErrorCode) -> Self {
        DiagnosticInfo {
            code,
            args: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<DiagnosticArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn args(&self) -> &[DiagnosticArg] {
        &self.args
    }

    /// Render the code's template with the arguments filled in.
    ///
    /// A placeholder with no matching argument is left as written.
    pub fn message(&self) -> String {
        Message(self).to_string()
    }

    fn write_message(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let mut rest = self.code.template();
        while let Some(open) = rest.find('{') {
            out.write_str(&rest[..open])?;
            let after = &rest[open + 1..];
            let placeholder = after.find('}').and_then(|close| {
                after[..close]
                    .parse::<usize>()
                    .ok()
                    .map(|index| (index, close))
            });
            match placeholder {
                Some((index, close)) => {
                    match self.args.get(index) {
                        Some(arg) => write!(out, "{arg}")?,
                        None => out.write_str(&rest[open..open + close + 2])?,
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.write_char('{')?;
                    rest = after;
                }
            }
        }
        out.write_str(rest)
    }
}

/// The rendered template of a [`DiagnosticInfo`].
struct Message<'a>(&'a DiagnosticInfo);

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_message(f)
    }
}

impl fmt::Display for DiagnosticInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: ", self.severity(), self.code)?;
        self.write_message(f)
    }
}

/// A diagnostic placed inside a syntax node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyntaxDiagnosticInfo {
    info: DiagnosticInfo,
    /// Relative to the start of the owning node.
    offset: u32,
    width: u32,
}

impl SyntaxDiagnosticInfo {
    pub fn new(code: ErrorCode, offset: u32, width: u32) -> Self {
        SyntaxDiagnosticInfo {
            info: DiagnosticInfo::new(code),
            offset,
            width,
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<DiagnosticArg>) -> Self {
        self.info = self.info.with_arg(arg);
        self
    }

    /// The same diagnostic at a different offset.
    #[must_use]
    pub fn with_offset(&self, offset: u32) -> Self {
        SyntaxDiagnosticInfo {
            info: self.info.clone(),
            offset,
            width: self.width,
        }
    }

    pub fn info(&self) -> &DiagnosticInfo {
        &self.info
    }

    pub fn code(&self) -> ErrorCode {
        self.info.code
    }

    pub fn severity(&self) -> Severity {
        self.info.severity()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn message(&self) -> String {
        self.info.message()
    }
}

impl fmt::Display for SyntaxDiagnosticInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{}, width {})", self.info, self.offset, self.width)
    }
}
