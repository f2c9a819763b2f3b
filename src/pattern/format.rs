use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::pattern::params::PathParams;
use crate::pattern::token::Token;

/// Characters left untouched by `encodeURIComponent`; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Wildcard values keep their `/` separators; each piece is encoded on its own.
pub(crate) fn encode_wildcard(value: &str) -> String {
    value
        .split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Render `tokens` into `out`.
///
/// Returns the names of parameters at this nesting level that had no value.
/// Groups render only when none of their direct parameters are missing.
pub(crate) fn render(tokens: &[Token], params: &PathParams, out: &mut String) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            Token::Static(text) => out.push_str(text),
            Token::Param { name } => match params.get(name) {
                Some(value) => out.push_str(&encode_component(value)),
                None => note_missing(&mut missing, name),
            },
            // a wildcard must match at least one character
            Token::Wildcard { name } => match params.get(name).filter(|v| !v.is_empty()) {
                Some(value) => out.push_str(&encode_wildcard(value)),
                None => note_missing(&mut missing, name),
            },
            Token::Group(inner) => {
                let mut segment = String::new();
                if render(inner, params, &mut segment).is_empty() {
                    out.push_str(&segment);
                }
            }
        }
    }

    missing
}

fn note_missing(missing: &mut Vec<String>, name: &str) {
    if !missing.iter().any(|m| m == name) {
        missing.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
        assert_eq!(encode_component("it's-(ok)_~*!."), "it's-(ok)_~*!.");
        assert_eq!(encode_component("ü"), "%C3%BC");
    }

    #[test]
    fn wildcard_keeps_separators() {
        assert_eq!(encode_wildcard("path/to/my file.txt"), "path/to/my%20file.txt");
        assert_eq!(encode_wildcard("a?b/c"), "a%3Fb/c");
    }

    #[test]
    fn empty_wildcard_counts_as_missing() {
        let tokens = vec![
            Token::Static("/files/".into()),
            Token::Wildcard {
                name: "path".into(),
            },
        ];
        let mut out = String::new();
        let missing = render(&tokens, &PathParams::from([("path", "")]), &mut out);
        assert_eq!(missing, vec!["path".to_string()]);

        let grouped = vec![
            Token::Static("/files".into()),
            Token::Group(vec![
                Token::Static("/".into()),
                Token::Wildcard {
                    name: "path".into(),
                },
            ]),
        ];
        let mut out = String::new();
        assert!(render(&grouped, &PathParams::from([("path", "")]), &mut out).is_empty());
        assert_eq!(out, "/files");
    }
}
