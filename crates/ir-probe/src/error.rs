use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("logits must be rank 2 (batch, vocab), got shape {0}")]
    InvalidRank(ir_tensor::Shape),
    #[error("tensor error: {0}")]
    Tensor(#[from] ir_tensor::TensorError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("panicked while rendering: {0}")]
    Panicked(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
