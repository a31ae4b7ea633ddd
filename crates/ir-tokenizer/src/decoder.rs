use crate::error::Result;

/// Maps token ids back to the bytes they stand for.
///
/// Returns raw bytes rather than `String`: byte-fallback tokens decode to a
/// single byte that is usually not valid UTF-8 on its own.
pub trait TokenDecoder: Send + Sync {
    /// Returns the bytes for `id`.
    ///
    /// # Errors
    /// Fails if `id` is not part of the vocabulary.
    fn token_bytes(&self, id: u32) -> Result<Vec<u8>>;
}
