use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("unknown token id {id} (vocab size {vocab_size})")]
    UnknownToken { id: u32, vocab_size: usize },
}

pub type Result<T> = std::result::Result<T, TokenizerError>;
