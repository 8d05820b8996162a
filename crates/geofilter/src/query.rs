//! Minimal percent-codec for URL query components.
//!
//! Covers exactly what the filter parameters need: unreserved bytes pass
//! through, everything else is `%XX`-escaped. Decoding also maps `+` to a
//! space so queries written by `URLSearchParams` parse identically.

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

/// Decode a query component. Malformed escapes pass through verbatim
/// rather than failing.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unreserved_bytes_pass_through() {
        assert_eq!(encode_component("Falls-Church_2.0~x"), "Falls-Church_2.0~x");
    }

    #[test]
    fn spaces_and_reserved_bytes_are_escaped() {
        assert_eq!(encode_component("Falls Church"), "Falls%20Church");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn decode_reverses_encode() {
        for s in ["Falls Church", "a&b=c", "100%", "König"] {
            assert_eq!(decode_component(&encode_component(s)), s);
        }
    }

    #[test]
    fn decode_maps_plus_to_space() {
        assert_eq!(decode_component("Falls+Church"), "Falls Church");
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(decode_component("50%"), "50%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%2"), "%2");
    }

    #[test]
    fn non_utf8_sequences_are_lossy() {
        assert_eq!(decode_component("%FF"), "\u{fffd}");
    }
}
