/// A parsed unit of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, copied into the generated path unchanged.
    Static(String),
    /// `:name`, a single encoded segment.
    Param { name: String },
    /// `*name`, a multi-segment remainder; interior `/` survive formatting.
    Wildcard { name: String },
    /// `{...}`, everything inside is optional.
    Group(Vec<Token>),
}

impl Token {
    /// Parameter name for `Param` and `Wildcard` tokens.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Token::Param { name } | Token::Wildcard { name } => Some(name),
            Token::Static(_) | Token::Group(_) => None,
        }
    }
}
