//! Decoded token values.

use std::sync::Arc;

/// The decoded value of a token.
///
/// Byte payloads are interned, so equal strings and names usually share one
/// allocation. Compare them by content.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenValue {
    #[default]
    None,
    Integer(i32),
    Real(f64),
    Bool(bool),
    /// Decoded bytes of a literal or hexadecimal string.
    Bytes(Arc<[u8]>),
    /// Decoded bytes of a name, without the leading `/`.
    Name(Arc<[u8]>),
}

impl TokenValue {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TokenValue::Bytes(b) | TokenValue::Name(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TokenValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
