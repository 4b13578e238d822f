//! Literal and keyword scanners.
//!
//! Every scanner is entered with the cursor on the token's first byte, in
//! lexeme mode, and leaves the cursor just past the token. Scanners never
//! fail: malformed input is recorded as a diagnostic and scanning carries on.

use pdf_cache::{global_byte_pool, global_string_pool, StringBuffer};
use pdf_diagnostic::{DiagnosticArg, ErrorCode, SyntaxDiagnosticInfo};
use pdf_lexer_core::char_class;
use pdf_syntax::{SyntaxKind, TokenValue};

use super::{to_u32, Lexer};

impl Lexer<'_> {
    // === Numbers ===

    /// `[+-]? digits* (. digits*)?`
    ///
    /// A missing integer or fraction part reads as `0`, so `.5`, `5.` and a
    /// lone `-` are all numbers.
    pub(super) fn scan_number(&mut self) -> (SyntaxKind, TokenValue) {
        let mut normalized = global_string_pool().rent();
        if let Some(sign @ (b'+' | b'-')) = self.window.peek(0) {
            normalized.push(char::from(sign));
            self.window.advance(1);
        }
        if self.take_digits(&mut normalized) == 0 {
            normalized.push('0');
        }
        let is_real = self.window.try_advance(b'.');
        if is_real {
            normalized.push('.');
            if self.take_digits(&mut normalized) == 0 {
                normalized.push('0');
            }
        }

        let text = normalized.as_str();
        if !is_real {
            if let Ok(value) = text.parse::<i32>() {
                return (SyntaxKind::NumericLiteral, TokenValue::Integer(value));
            }
            if self.options.report_integer_overflow {
                let literal = self.window.lexeme_text_lossy();
                let diagnostic = self.lexeme_diagnostic(ErrorCode::E0001).with_arg(literal);
                self.report(diagnostic);
            }
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => (SyntaxKind::NumericLiteral, TokenValue::Real(value)),
            _ => {
                let literal = self.window.lexeme_text_lossy();
                let diagnostic = self.lexeme_diagnostic(ErrorCode::E0002).with_arg(literal);
                self.report(diagnostic);
                (SyntaxKind::NumericLiteral, TokenValue::Real(0.0))
            }
        }
    }

    fn take_digits(&mut self, out: &mut StringBuffer) -> usize {
        let mut taken = 0;
        while let Some(b) = self.window.peek(0) {
            if !char_class::is_digit(b) {
                break;
            }
            out.push(char::from(b));
            self.window.advance(1);
            taken += 1;
        }
        taken
    }

    // === Strings ===

    /// `( ... )` with balanced nesting and backslash escapes.
    pub(super) fn scan_string(&mut self) -> (SyntaxKind, TokenValue) {
        let mut value = global_byte_pool().rent();
        self.window.advance(1);
        let mut depth = 1_u32;
        loop {
            let Some(b) = self.window.peek(0) else {
                let diagnostic = self.lexeme_diagnostic(ErrorCode::E0003);
                self.report(diagnostic);
                break;
            };
            match b {
                b'(' => {
                    depth += 1;
                    value.push(b);
                    self.window.advance(1);
                }
                b')' => {
                    self.window.advance(1);
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    value.push(b);
                }
                b'\\' => self.scan_escape(&mut value),
                b'\r' => {
                    self.window.advance(1);
                    self.window.try_advance(b'\n');
                    value.push(b'\n');
                }
                _ => {
                    value.push(b);
                    self.window.advance(1);
                }
            }
        }
        let value = self.cache.interner.intern(&value);
        (SyntaxKind::StringLiteral, TokenValue::Bytes(value))
    }

    fn scan_escape(&mut self, value: &mut Vec<u8>) {
        let escape_offset = self.lexeme_offset();
        self.window.advance(1);
        // A backslash at the end of input; the unclosed string is reported
        // by the caller.
        let Some(b) = self.window.peek(0) else {
            return;
        };
        self.window.advance(1);
        match b {
            b'n' => value.push(b'\n'),
            b'r' => value.push(b'\r'),
            b't' => value.push(b'\t'),
            b'b' => value.push(0x08),
            b'f' => value.push(0x0C),
            b'(' | b')' | b'\\' => value.push(b),
            // Line continuation.
            b'\r' => {
                self.window.try_advance(b'\n');
            }
            b'\n' => {}
            b if char_class::is_octal_digit(b) => {
                let code = self.scan_octal(b);
                value.push(code);
            }
            _ => {
                value.push(b);
                let diagnostic =
                    SyntaxDiagnosticInfo::new(ErrorCode::E0004, to_u32(escape_offset), 2)
                        .with_arg(b.escape_ascii().to_string());
                self.report(diagnostic);
            }
        }
    }

    /// Up to three octal digits, stopping before one that would push the
    /// code past 255.
    fn scan_octal(&mut self, first: u8) -> u8 {
        let mut code = first - b'0';
        for _ in 0..2 {
            let Some(digit) = self.window.peek(0).filter(|&b| char_class::is_octal_digit(b)) else {
                break;
            };
            let Some(next) = code
                .checked_mul(8)
                .and_then(|c| c.checked_add(digit - b'0'))
            else {
                break;
            };
            code = next;
            self.window.advance(1);
        }
        code
    }

    // === Hex strings ===

    /// `< hex digits >`, white-space ignored, odd length padded with `0`.
    pub(super) fn scan_hex_string(&mut self) -> (SyntaxKind, TokenValue) {
        let mut value = global_byte_pool().rent();
        let mut high: Option<u8> = None;
        self.window.advance(1);
        loop {
            let Some(b) = self.window.peek(0) else {
                let diagnostic = self
                    .lexeme_diagnostic(ErrorCode::E0005)
                    .with_arg("missing closing `>`");
                self.report(diagnostic);
                break;
            };
            if b == b'>' {
                self.window.advance(1);
                break;
            }
            if let Some(nibble) = char_class::hex_value(b) {
                match high.take() {
                    Some(high) => value.push((high << 4) | nibble),
                    None => high = Some(nibble),
                }
            } else if !char_class::is_pdf_whitespace(b) {
                let diagnostic = self
                    .cursor_diagnostic(ErrorCode::E0005, 1)
                    .with_arg(format!("unexpected character {}", DiagnosticArg::from(b)));
                self.report(diagnostic);
            }
            self.window.advance(1);
        }
        if let Some(high) = high {
            value.push(high << 4);
        }
        let value = self.cache.interner.intern(&value);
        (SyntaxKind::HexStringLiteral, TokenValue::Bytes(value))
    }

    // === Names ===

    /// `/` followed by regular bytes, with `#xx` escapes decoded.
    pub(super) fn scan_name(&mut self) -> (SyntaxKind, TokenValue) {
        let mut value = global_byte_pool().rent();
        self.window.advance(1);
        while let Some(b) = self.window.peek(0) {
            match b {
                // NUL is white-space everywhere else.
                0 => {
                    let diagnostic = self
                        .cursor_diagnostic(ErrorCode::E0006, 1)
                        .with_arg("embedded NUL byte");
                    self.report(diagnostic);
                    value.push(0);
                    self.window.advance(1);
                }
                b'#' => {
                    let high = self.window.peek(1).and_then(char_class::hex_value);
                    let low = self.window.peek(2).and_then(char_class::hex_value);
                    if let Some((high, low)) = high.zip(low) {
                        value.push((high << 4) | low);
                        self.window.advance(3);
                    } else {
                        let diagnostic = self
                            .cursor_diagnostic(ErrorCode::E0006, 1)
                            .with_arg("`#` must be followed by two hexadecimal digits");
                        self.report(diagnostic);
                        value.push(b'#');
                        self.window.advance(1);
                    }
                }
                b if char_class::is_pdf_whitespace(b) || char_class::is_delimiter(b) => break,
                _ => {
                    value.push(b);
                    self.window.advance(1);
                }
            }
        }

        if value.len() > self.options.max_name_length {
            let diagnostic = self
                .lexeme_diagnostic(ErrorCode::E0007)
                .with_arg(value.len())
                .with_arg(self.options.max_name_length);
            self.report(diagnostic);
        }
        let name = self.cache.interner.intern(&value);
        (SyntaxKind::NameLiteral, TokenValue::Name(name))
    }

    // === Keywords ===

    /// The longest run of ASCII letters, classified through the keyword
    /// cache.
    pub(super) fn scan_keyword(&mut self) -> (SyntaxKind, TokenValue) {
        self.window.advance_while(char_class::is_letter);
        let kind = self.cache.keyword(self.window.lexeme_bytes());
        match kind {
            SyntaxKind::TrueKeyword => (kind, TokenValue::Bool(true)),
            SyntaxKind::FalseKeyword => (kind, TokenValue::Bool(false)),
            SyntaxKind::UnknownKeyword => {
                let text = self.window.lexeme_text_lossy();
                let diagnostic = self.lexeme_diagnostic(ErrorCode::E0008).with_arg(text);
                self.report(diagnostic);
                (kind, TokenValue::None)
            }
            _ => (kind, TokenValue::None),
        }
    }
}
