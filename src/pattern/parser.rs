use crate::pattern::token::Token;
use crate::pattern::{PatternError, PatternResult};
use unicode_ident::{is_xid_continue, is_xid_start};

const RESERVED: &[char] = &['(', ')', '[', ']', '?', '+', '!'];

/// Tokenize a path template.
///
/// Static text (including `/`) is merged into the longest possible runs so
/// that `/users/:id` yields exactly two tokens.
pub fn tokenize(template: &str) -> PatternResult<Vec<Token>> {
    let mut parser = TemplateParser::new(template);
    parser.parse_sequence(None)
}

struct TemplateParser {
    chars: Vec<(usize, char)>,
    len: usize,
    index: usize,
}

impl TemplateParser {
    fn new(template: &str) -> Self {
        Self {
            chars: template.char_indices().collect(),
            len: template.len(),
            index: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.len)
    }

    /// `group_start` is the byte index of the opening `{` when parsing inside a group.
    fn parse_sequence(&mut self, group_start: Option<usize>) -> PatternResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '}' => {
                    if group_start.is_some() {
                        self.next();
                        flush_static(&mut tokens, &mut text);
                        return Ok(tokens);
                    }
                    return Err(PatternError::UnbalancedGroupClose {
                        index: self.byte_index(),
                    });
                }
                '{' => {
                    flush_static(&mut tokens, &mut text);
                    let start = self.byte_index();
                    self.next();
                    let inner = self.parse_sequence(Some(start))?;
                    tokens.push(Token::Group(inner));
                }
                ':' => {
                    flush_static(&mut tokens, &mut text);
                    let name = self.parse_name()?;
                    tokens.push(Token::Param { name });
                }
                '*' => {
                    flush_static(&mut tokens, &mut text);
                    let name = self.parse_name()?;
                    tokens.push(Token::Wildcard { name });
                }
                '\\' => {
                    let index = self.byte_index();
                    self.next();
                    match self.next() {
                        Some(escaped) => text.push(escaped),
                        None => return Err(PatternError::DanglingEscape { index }),
                    }
                }
                c if RESERVED.contains(&c) => {
                    return Err(PatternError::UnexpectedCharacter {
                        found: c,
                        index: self.byte_index(),
                    });
                }
                c => {
                    text.push(c);
                    self.next();
                }
            }
        }

        if let Some(start) = group_start {
            return Err(PatternError::UnterminatedGroup { start });
        }

        flush_static(&mut tokens, &mut text);
        Ok(tokens)
    }

    /// Consume the `:`/`*` sigil and the identifier that follows it.
    ///
    /// Identifiers follow Unicode XID rules plus `$`; any other name can be
    /// written in double quotes (`:"user id"`).
    fn parse_name(&mut self) -> PatternResult<String> {
        let index = self.byte_index();
        self.next();

        if self.peek() == Some('"') {
            return self.parse_quoted_name(index);
        }

        let mut name = String::new();
        while let Some(ch) = self.peek() {
            let accepted = if name.is_empty() {
                is_xid_start(ch) || ch == '_' || ch == '$'
            } else {
                is_xid_continue(ch) || ch == '$' || ch == '\u{200c}' || ch == '\u{200d}'
            };
            if !accepted {
                break;
            }
            name.push(ch);
            self.next();
        }

        if name.is_empty() {
            return Err(PatternError::MissingParameterName { index });
        }
        Ok(name)
    }

    fn parse_quoted_name(&mut self, index: usize) -> PatternResult<String> {
        let quote = self.byte_index();
        self.next();

        let mut name = String::new();
        loop {
            match self.next() {
                Some('"') => break,
                Some('\\') => match self.next() {
                    Some(escaped) => name.push(escaped),
                    None => return Err(PatternError::UnterminatedQuote { index: quote }),
                },
                Some(ch) => name.push(ch),
                None => return Err(PatternError::UnterminatedQuote { index: quote }),
            }
        }

        if name.is_empty() {
            return Err(PatternError::MissingParameterName { index });
        }
        Ok(name)
    }
}

fn flush_static(tokens: &mut Vec<Token>, text: &mut String) {
    if !text.is_empty() {
        tokens.push(Token::Static(std::mem::take(text)));
    }
}
