//! Diagnostics for the PDF lexer.
//!
//! Lexical problems never abort lexing. Each one becomes a
//! [`SyntaxDiagnosticInfo`] attached to the token it was found in, with a
//! stable [`ErrorCode`] and a severity derived from that code.

mod diagnostic;
mod error_code;

pub use diagnostic::{DiagnosticArg, DiagnosticInfo, Severity, SyntaxDiagnosticInfo};
pub use error_code::ErrorCode;
