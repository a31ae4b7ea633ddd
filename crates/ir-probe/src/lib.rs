//! `ir-probe` - Opt-in logit diagnostics for inference-runtime.
//!
//! After a prefill or decode step the engine hands the batch logits to a
//! [`LogitReporter`] (or to [`debug_print_logits`]), which prints the top-k
//! tokens of every sequence to stderr. The probe never changes the logits and
//! never fails the caller.
//!
//! - `gate`: `IR_DEBUG_LOGITS` activation and [`ProbeLevel`]
//! - `registry`: process-wide token decoder and [`DiagnosticContext`]
//! - `reporter`: extraction and formatting

pub mod config;
pub mod error;
pub mod escape;
pub mod gate;
pub mod registry;
pub mod reporter;
pub mod select;
pub mod stats;

pub use config::{ReporterConfig, DEFAULT_TOP_K};
pub use error::{ProbeError, Result};
pub use escape::escape_token;
pub use gate::ProbeLevel;
pub use registry::DiagnosticContext;
pub use reporter::{debug_print_logits, LogitReporter};
pub use select::{select_top_k, TokenLogit};
pub use stats::RowStats;
