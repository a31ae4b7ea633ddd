pub mod decoder;
pub mod error;
pub mod vocab;

pub use decoder::TokenDecoder;
pub use error::{Result, TokenizerError};
pub use vocab::Vocab;
