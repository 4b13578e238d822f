//! PDF byte classes.
//!
//! PDF splits bytes into three groups: white-space (NUL, TAB, LF, FF, CR,
//! SPACE), delimiters (`( ) < > [ ] { } / %`) and regular characters
//! (everything else). The lexer treats NUL, TAB, FF and SPACE as whitespace
//! trivia and LF / CR as end-of-line trivia.

const WHITESPACE: u8 = 1 << 0;
const END_OF_LINE: u8 = 1 << 1;
const DELIMITER: u8 = 1 << 2;
const DIGIT: u8 = 1 << 3;
const HEX_DIGIT: u8 = 1 << 4;
const LETTER: u8 = 1 << 5;

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static BYTE_CLASS: [u8; 256] = {
    let mut table = [0_u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let mut class = 0;
        if matches!(b, 0 | b'\t' | 0x0C | b' ') {
            class |= WHITESPACE;
        }
        if matches!(b, b'\n' | b'\r') {
            class |= END_OF_LINE;
        }
        if matches!(
            b,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
        ) {
            class |= DELIMITER;
        }
        if b.is_ascii_digit() {
            class |= DIGIT;
        }
        if b.is_ascii_hexdigit() {
            class |= HEX_DIGIT;
        }
        if b.is_ascii_alphabetic() {
            class |= LETTER;
        }
        table[i as usize] = class;
        i += 1;
    }
    table
};

#[inline]
fn class(b: u8) -> u8 {
    BYTE_CLASS[b as usize]
}

/// Whitespace trivia: NUL, TAB, FF, SPACE.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    class(b) & WHITESPACE != 0
}

/// LF or CR.
#[inline]
pub fn is_end_of_line(b: u8) -> bool {
    class(b) & END_OF_LINE != 0
}

/// Any PDF white-space byte, end-of-line bytes included.
#[inline]
pub fn is_pdf_whitespace(b: u8) -> bool {
    class(b) & (WHITESPACE | END_OF_LINE) != 0
}

#[inline]
pub fn is_delimiter(b: u8) -> bool {
    class(b) & DELIMITER != 0
}

/// Neither white-space nor a delimiter.
#[inline]
pub fn is_regular(b: u8) -> bool {
    class(b) & (WHITESPACE | END_OF_LINE | DELIMITER) == 0
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    class(b) & DIGIT != 0
}

#[inline]
pub fn is_letter(b: u8) -> bool {
    class(b) & LETTER != 0
}

#[inline]
pub fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// Value of a hexadecimal digit.
#[inline]
pub fn hex_value(b: u8) -> Option<u8> {
    if class(b) & HEX_DIGIT == 0 {
        return None;
    }
    Some(match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    })
}
