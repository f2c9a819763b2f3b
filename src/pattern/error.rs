use thiserror::Error;

/// Tokenizer failures for a path template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Missing parameter name at index {index}")]
    MissingParameterName { index: usize },

    #[error("Unexpected '{found}' at index {index}")]
    UnexpectedCharacter { found: char, index: usize },

    #[error("Unbalanced '}}' at index {index}")]
    UnbalancedGroupClose { index: usize },

    #[error("Unterminated group starting at index {start}")]
    UnterminatedGroup { start: usize },

    #[error("Unterminated quote at index {index}")]
    UnterminatedQuote { index: usize },

    #[error("Dangling escape at index {index}")]
    DanglingEscape { index: usize },
}

pub type PatternResult<T> = std::result::Result<T, PatternError>;
