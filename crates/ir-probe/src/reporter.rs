use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use ir_tensor::DeviceTensor;
use ir_tokenizer::TokenDecoder;

use crate::config::ReporterConfig;
use crate::error::{ProbeError, Result};
use crate::escape::escape_token;
use crate::gate::{self, ProbeLevel};
use crate::registry::DiagnosticContext;
use crate::select::select_top_k;
use crate::stats::RowStats;

/// Label used for batch rows that have no matching sequence id.
pub const UNKNOWN_SEQUENCE: &str = "unknown";

/// Prints the top-k logits of each sequence in a batch.
///
/// The reporter only reads: it copies the logits to host memory and writes
/// text. When its level is [`ProbeLevel::Off`] every call returns before the
/// tensor is touched.
#[derive(Debug, Clone, Default)]
pub struct LogitReporter {
    config: ReporterConfig,
}

impl LogitReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    /// Reporter configured from `IR_DEBUG_LOGITS`.
    pub fn from_env() -> Self {
        Self::new(ReporterConfig::from_env())
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.level.is_enabled()
    }

    /// Write a report for `logits` to standard error.
    ///
    /// Never fails: copy, shape and I/O errors as well as panics in the
    /// tensor or decoder are logged and dropped so the surrounding inference
    /// step is unaffected. Stderr is locked only for the final write.
    pub fn report<T, S>(&self, ctx: &DiagnosticContext, logits: &T, phase: &str, seq_ids: &[S])
    where
        T: DeviceTensor + ?Sized,
        S: AsRef<str>,
    {
        if !self.is_enabled() {
            return;
        }
        let result = self
            .render_guarded(ctx, logits, phase, seq_ids)
            .and_then(|buf| write_all(&mut io::stderr().lock(), &buf));
        if let Err(e) = result {
            tracing::warn!(phase, error = %e, "logit report dropped");
        }
    }

    /// Write a report for `logits` to `out`.
    ///
    /// `logits` must have shape `(batch, vocab)`. Row `i` is labelled with
    /// `seq_ids[i]`, or [`UNKNOWN_SEQUENCE`] past the end of the list. The
    /// whole report is rendered first and handed to `out` in one write. A
    /// panic while rendering comes back as [`ProbeError::Panicked`].
    pub fn report_to<W, T, S>(
        &self,
        out: &mut W,
        ctx: &DiagnosticContext,
        logits: &T,
        phase: &str,
        seq_ids: &[S],
    ) -> Result<()>
    where
        W: Write + ?Sized,
        T: DeviceTensor + ?Sized,
        S: AsRef<str>,
    {
        if !self.is_enabled() {
            return Ok(());
        }
        let buf = self.render_guarded(ctx, logits, phase, seq_ids)?;
        write_all(out, &buf)
    }

    fn render_guarded<T, S>(
        &self,
        ctx: &DiagnosticContext,
        logits: &T,
        phase: &str,
        seq_ids: &[S],
    ) -> Result<Vec<u8>>
    where
        T: DeviceTensor + ?Sized,
        S: AsRef<str>,
    {
        panic::catch_unwind(AssertUnwindSafe(|| self.render(ctx, logits, phase, seq_ids)))
            .unwrap_or_else(|payload| Err(ProbeError::Panicked(panic_message(&*payload))))
    }

    fn render<T, S>(
        &self,
        ctx: &DiagnosticContext,
        logits: &T,
        phase: &str,
        seq_ids: &[S],
    ) -> Result<Vec<u8>>
    where
        T: DeviceTensor + ?Sized,
        S: AsRef<str>,
    {
        if logits.shape().as_matrix().is_none() {
            return Err(ProbeError::InvalidRank(logits.shape().clone()));
        }

        let host = logits.copy_to_host()?;
        let (batch, vocab) = host
            .shape()
            .as_matrix()
            .ok_or_else(|| ProbeError::InvalidRank(host.shape().clone()))?;
        let data = host.data_f32()?;
        tracing::trace!(
            phase,
            batch,
            vocab,
            device = %logits.device(),
            "copied logits to host"
        );

        let verbose = self.config.level.is_verbose();
        let decoder = if verbose { ctx.decoder() } else { None };

        let mut buf = Vec::new();
        writeln!(buf)?;
        writeln!(buf, "=== IR DEBUG LOGITS [{}] ===", phase)?;

        for seq in 0..batch {
            let id = seq_ids
                .get(seq)
                .map(AsRef::as_ref)
                .unwrap_or(UNKNOWN_SEQUENCE);
            writeln!(buf, "Request ID: {} (seq {})", id, seq)?;

            let row = &data[seq * vocab..(seq + 1) * vocab];
            for (rank, entry) in select_top_k(row, self.config.top_k).iter().enumerate() {
                write!(
                    buf,
                    "  [{}] token_id={} logit={:.4}",
                    rank, entry.token_id, entry.logit
                )?;
                if let Some(text) = decoder.and_then(|d| render_token(d, entry.token_id)) {
                    write!(buf, " token=\"{}\"", text)?;
                }
                writeln!(buf)?;
            }

            if verbose {
                if let Some(stats) = RowStats::compute(row) {
                    writeln!(
                        buf,
                        "  Stats: max={:.4} min={:.4} mean={:.4}",
                        stats.max, stats.min, stats.mean
                    )?;
                }
            }

            if seq + 1 < batch {
                writeln!(buf)?;
            }
        }

        writeln!(buf, "=== END DEBUG LOGITS ===")?;
        writeln!(buf)?;
        Ok(buf)
    }
}

fn write_all<W: Write + ?Sized>(out: &mut W, buf: &[u8]) -> Result<()> {
    out.write_all(buf)?;
    out.flush()?;
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Decode and escape one token. Lookup failures just drop the text.
fn render_token(decoder: &dyn TokenDecoder, token_id: u32) -> Option<String> {
    match decoder.token_bytes(token_id) {
        Ok(bytes) => Some(escape_token(&bytes)),
        Err(e) => {
            tracing::trace!(token_id, error = %e, "token decode failed");
            None
        }
    }
}

/// Print the top `top_k` logits per sequence to standard error if
/// `IR_DEBUG_LOGITS` is set.
///
/// The environment is consulted on every call and the decoder comes from the
/// process-wide registry. Returns immediately, without touching `logits`,
/// when the variable is absent.
pub fn debug_print_logits<T, S>(logits: &T, phase: &str, seq_ids: &[S], top_k: usize)
where
    T: DeviceTensor + ?Sized,
    S: AsRef<str>,
{
    if !gate::is_enabled() {
        return;
    }
    let level = if gate::is_verbose() {
        ProbeLevel::Verbose
    } else {
        ProbeLevel::On
    };
    let reporter = LogitReporter::new(ReporterConfig { level, top_k });
    reporter.report(&DiagnosticContext::from_registry(), logits, phase, seq_ids);
}
