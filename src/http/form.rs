//! Form body decoding module
//!
//! Decodes `application/x-www-form-urlencoded` request bodies into a
//! key/value map. Malformed input never fails: unparseable escapes are
//! kept verbatim and missing values decode to empty strings.

use std::collections::HashMap;

/// Decode a form-encoded body into field/value pairs.
///
/// Duplicate keys keep the last value, matching what browsers submit for
/// repeated inputs. A key without `=` maps to an empty value.
pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    let raw = String::from_utf8_lossy(body);
    let mut fields = HashMap::new();

    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        fields.insert(decode_component(key), decode_component(value));
    }

    fields
}

/// Decode one form component: `+` means space, then percent-decoding
fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // Invalid UTF-8 after unescaping: keep the raw text
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fields() {
        let fields = parse_form(b"name=Maria&email=m%40x.com");
        assert_eq!(fields.get("name").map(String::as_str), Some("Maria"));
        assert_eq!(fields.get("email").map(String::as_str), Some("m@x.com"));
    }

    #[test]
    fn test_plus_and_percent_decoding() {
        let fields = parse_form(b"message=Ol%C3%A1+mundo");
        assert_eq!(fields.get("message").map(String::as_str), Some("Olá mundo"));
    }

    #[test]
    fn test_missing_value_decodes_to_empty() {
        let fields = parse_form(b"phone=&name");
        assert_eq!(fields.get("phone").map(String::as_str), Some(""));
        assert_eq!(fields.get("name").map(String::as_str), Some(""));
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let fields = parse_form(b"name=a&name=b");
        assert_eq!(fields.get("name").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_empty_body() {
        assert!(parse_form(b"").is_empty());
        assert!(parse_form(b"&&").is_empty());
    }

    #[test]
    fn test_invalid_escape_kept_verbatim() {
        let fields = parse_form(b"name=%FF%FE");
        // Not valid UTF-8 once unescaped, so the raw text survives
        assert_eq!(fields.get("name").map(String::as_str), Some("%FF%FE"));
    }
}
