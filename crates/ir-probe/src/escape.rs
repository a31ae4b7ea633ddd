use std::fmt::Write;

/// Renders token bytes on a single printable line.
///
/// `\n`, `\t` and `\r` get their usual escapes, printable ASCII (32..=126)
/// passes through, every other byte becomes `\xHH`.
pub fn escape_token(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            32..=126 => out.push(b as char),
            _ => {
                // Writing into a String cannot fail.
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_passthrough() {
        assert_eq!(escape_token(b"Hello, world!"), "Hello, world!");
        assert_eq!(escape_token(b" ~"), " ~");
    }

    #[test]
    fn test_control_escapes() {
        let escaped = escape_token(&[b'a', b'\n', b'\t', 200, b'\r']);
        assert_eq!(escaped, "a\\n\\t\\xc8\\r");
        assert!(escaped.bytes().all(|b| (32..=126).contains(&b)));
    }

    #[test]
    fn test_other_bytes_hex() {
        assert_eq!(escape_token(&[0x00, 0x1b, 0x7f, 0xff]), "\\x00\\x1b\\x7f\\xff");
        // Multi-byte UTF-8 is escaped byte by byte.
        assert_eq!(escape_token("é".as_bytes()), "\\xc3\\xa9");
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape_token(b""), "");
    }
}
