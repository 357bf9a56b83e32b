//! Character classes used by the scanner.

#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Java whitespace: space, tab, form feed and line terminators.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{000C}' | '\n' | '\r' | '\u{FEFF}')
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

#[inline]
pub fn is_binary_digit(ch: char) -> bool {
    ch == '0' || ch == '1'
}

pub fn is_identifier_start(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

pub fn is_identifier_part(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}
