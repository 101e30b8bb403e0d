use std::fmt;

pub const FLAG_LABEL: &str = "[*] Flag:";

/// Renders bytes as ASCII text. Bytes outside the printable range are shown
/// as escape sequences instead.
pub struct Printable<'a>(pub &'a [u8]);

impl<'a> fmt::Display for Printable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.0 {
            match byte {
                b' '..=b'~' => write!(f, "{}", byte as char)?,
                _ => write!(f, "{}", byte.escape_ascii())?,
            }
        }
        Ok(())
    }
}

pub fn flag_line(bytes: &[u8]) -> String {
    format!("{} {}", FLAG_LABEL, Printable(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_printable() {
        assert_eq!(Printable(b"crypto{hex}").to_string(), "crypto{hex}");
        assert_eq!(Printable(b"a'b\"c\\d").to_string(), "a'b\"c\\d");
        assert_eq!(Printable(b"").to_string(), "");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(Printable(b"\x00\xa7\x42").to_string(), "\\x00\\xa7B");
        assert_eq!(Printable(b"a\nb\tc\r").to_string(), "a\\nb\\tc\\r");
        assert_eq!(Printable(b"\x7f").to_string(), "\\x7f");
    }

    #[test]
    fn test_flag_line() {
        assert_eq!(
            flag_line(b"crypto{You_will_be_working_with_hex_strings_a_lot}"),
            "[*] Flag: crypto{You_will_be_working_with_hex_strings_a_lot}",
        );
        assert_eq!(flag_line(b""), "[*] Flag: ");
    }
}
