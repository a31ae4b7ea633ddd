use crate::decoder::TokenDecoder;
use crate::error::{Result, TokenizerError};

/// Token vocabulary, indexed by token ID.
#[derive(Debug, Clone)]
pub struct Vocab {
    tokens: Vec<String>,
}

impl Vocab {
    /// Build a vocabulary from token strings; a token's ID is its index.
    pub fn new(tokens: Vec<String>) -> Vocab {
        Vocab { tokens }
    }

    /// Number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token string for `id`.
    pub fn token(&self, id: u32) -> Result<&str> {
        self.tokens
            .get(id as usize)
            .map(String::as_str)
            .ok_or(TokenizerError::UnknownToken {
                id,
                vocab_size: self.tokens.len(),
            })
    }
}

/// Parses byte-fallback tokens of the form `<0xHH>`.
fn byte_fallback(tok: &str) -> Option<u8> {
    if tok.len() == 6 && tok.starts_with("<0x") && tok.ends_with('>') {
        u8::from_str_radix(&tok[3..5], 16).ok()
    } else {
        None
    }
}

impl TokenDecoder for Vocab {
    fn token_bytes(&self, id: u32) -> Result<Vec<u8>> {
        let tok = self.token(id)?;
        Ok(match byte_fallback(tok) {
            Some(b) => vec![b],
            None => tok.as_bytes().to_vec(),
        })
    }
}
