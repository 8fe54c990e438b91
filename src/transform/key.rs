//! Identifier-level case conversion.
//!
//! A run of leading underscores is a prefix, not a word boundary; it is
//! stripped before conversion and re-prepended afterwards.

/// Convert one `snake_case` identifier to `camelCase`.
///
/// The first segment is lowercased; every later segment is title-cased.
pub fn snake_to_camel(ident: &str) -> String {
    let (prefix, rest) = split_underscore_prefix(ident);
    let mut out = String::with_capacity(ident.len());
    out.push_str(prefix);

    for (i, segment) in rest.split('_').enumerate() {
        if i == 0 {
            out.push_str(&segment.to_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

/// Convert one `camelCase` (or `PascalCase`) identifier to `snake_case`.
///
/// An underscore is inserted before an uppercase letter following a
/// lowercase letter or digit, and between an uppercase run and the word
/// that follows it, so acronyms split correctly ("XMLParser" becomes
/// "xml_parser").
pub fn camel_to_snake(ident: &str) -> String {
    let (prefix, rest) = split_underscore_prefix(ident);
    let chars: Vec<char> = rest.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    out.push_str(prefix);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let after_lower_or_digit = i > 0 && {
                let prev = chars[i - 1];
                prev.is_lowercase() || prev.is_ascii_digit()
            };
            let acronym_boundary = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if after_lower_or_digit || acronym_boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn split_underscore_prefix(ident: &str) -> (&str, &str) {
    let rest = ident.trim_start_matches('_');
    ident.split_at(ident.len() - rest.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("user_id"), "userId");
        assert_eq!(snake_to_camel("created_at"), "createdAt");
        assert_eq!(snake_to_camel("rag_generation_config"), "ragGenerationConfig");
        assert_eq!(snake_to_camel("query"), "query");
    }

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("userId"), "user_id");
        assert_eq!(camel_to_snake("createdAt"), "created_at");
        assert_eq!(camel_to_snake("ragGenerationConfig"), "rag_generation_config");
        assert_eq!(camel_to_snake("query"), "query");
    }

    #[test]
    fn test_acronym_boundaries() {
        assert_eq!(camel_to_snake("XMLParser"), "xml_parser");
        assert_eq!(camel_to_snake("HTMLContent"), "html_content");
        assert_eq!(camel_to_snake("parseJSONBody"), "parse_json_body");
    }

    #[test]
    fn test_digit_boundary() {
        assert_eq!(camel_to_snake("top2Results"), "top2_results");
        assert_eq!(snake_to_camel("top2_results"), "top2Results");
    }

    #[test]
    fn test_leading_underscores_preserved() {
        assert_eq!(snake_to_camel("_private_field"), "_privateField");
        assert_eq!(snake_to_camel("__meta"), "__meta");
        assert_eq!(camel_to_snake("_privateField"), "_private_field");
        assert_eq!(camel_to_snake("__meta"), "__meta");
    }

    #[test]
    fn test_round_trip() {
        for ident in ["user_id", "search_limit", "_hidden_flag", "score"] {
            assert_eq!(camel_to_snake(&snake_to_camel(ident)), ident);
        }
        for ident in ["userId", "searchLimit", "_hiddenFlag", "score"] {
            assert_eq!(snake_to_camel(&camel_to_snake(ident)), ident);
        }
    }
}
