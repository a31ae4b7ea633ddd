//! Process-wide slot for the token decoder used by diagnostics.
//!
//! Set once at startup, read on every enabled report. Callers that already
//! own a decoder should pass it through a [`DiagnosticContext`] instead.

use std::fmt;
use std::sync::Arc;

use ir_tokenizer::TokenDecoder;
use parking_lot::RwLock;

static DECODER: RwLock<Option<Arc<dyn TokenDecoder>>> = parking_lot::const_rwlock(None);

/// Install `decoder` as the process-wide diagnostic decoder, replacing any
/// previous one.
pub fn register(decoder: Arc<dyn TokenDecoder>) {
    *DECODER.write() = Some(decoder);
    tracing::debug!("registered diagnostic token decoder");
}

/// Returns the registered decoder, if any.
pub fn current() -> Option<Arc<dyn TokenDecoder>> {
    DECODER.read().clone()
}

/// Diagnostic state handed to the reporter for a single call.
#[derive(Clone, Default)]
pub struct DiagnosticContext {
    pub decoder: Option<Arc<dyn TokenDecoder>>,
}

impl DiagnosticContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decoder(decoder: Arc<dyn TokenDecoder>) -> Self {
        Self {
            decoder: Some(decoder),
        }
    }

    /// Snapshot of the process-wide registry.
    pub fn from_registry() -> Self {
        Self { decoder: current() }
    }

    pub fn decoder(&self) -> Option<&dyn TokenDecoder> {
        self.decoder.as_deref()
    }
}

impl fmt::Debug for DiagnosticContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticContext")
            .field("has_decoder", &self.decoder.is_some())
            .finish()
    }
}
