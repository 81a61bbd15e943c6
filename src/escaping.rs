//! String literal escaping for emitted manifests
//!
//! Names are written as double-quoted literals that must mean the same string
//! in Go, JavaScript and Python. The escapes used here are the subset all three
//! agree on, plus `\a` where the language has it.

use crate::domain::value_objects::Dialect;

/// Quote a string as a double-quoted literal for the given dialect
pub fn quote(s: &str, dialect: Dialect) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            '\u{7}' if dialect != Dialect::JavaScript => out.push_str("\\a"),
            // \x is a byte in Go but a code point in JS/Python, so it is
            // only safe below 0x80.
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if ('\u{80}'..='\u{9f}').contains(&c) => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Parse a double-quoted literal at the start of `s`
///
/// Returns the unescaped value and the remainder after the closing quote.
/// Accepts every escape that [`quote`] produces for any dialect.
pub fn unquote(s: &str) -> Result<(String, &str), String> {
    let body = s
        .strip_prefix('"')
        .ok_or_else(|| "expected opening '\"'".to_string())?;

    let mut value = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((value, &body[i + 1..])),
            '\\' => {
                let (_, esc) = chars
                    .next()
                    .ok_or_else(|| "unterminated escape sequence".to_string())?;
                let decoded = match esc {
                    '\\' => '\\',
                    '"' => '"',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'a' => '\u{7}',
                    'b' => '\u{8}',
                    'v' => '\u{b}',
                    'f' => '\u{c}',
                    'x' => take_hex(&mut chars, 2)?,
                    'u' => take_hex(&mut chars, 4)?,
                    other => return Err(format!("unsupported escape '\\{}'", other)),
                };
                value.push(decoded);
            }
            c => value.push(c),
        }
    }

    Err("unterminated string literal".to_string())
}

fn take_hex(chars: &mut std::str::CharIndices<'_>, digits: usize) -> Result<char, String> {
    let mut code = 0u32;
    for _ in 0..digits {
        let (_, c) = chars
            .next()
            .ok_or_else(|| "truncated hex escape".to_string())?;
        let d = c
            .to_digit(16)
            .ok_or_else(|| format!("invalid hex digit '{}'", c))?;
        code = code * 16 + d;
    }
    char::from_u32(code).ok_or_else(|| format!("invalid code point {:#x}", code))
}
