//! Environment-driven activation of the logit probe.
//!
//! `IR_DEBUG_LOGITS` set to anything turns the probe on; set to `verbose` it
//! also decodes token text and prints per-row statistics. The variable is
//! read on every call, never cached.

use std::ffi::OsStr;

/// Presence of this variable enables the probe.
pub const DEBUG_LOGITS_ENV: &str = "IR_DEBUG_LOGITS";

/// Value of [`DEBUG_LOGITS_ENV`] that selects verbose output.
pub const VERBOSE_MARKER: &str = "verbose";

/// How much the probe reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeLevel {
    #[default]
    Off,
    On,
    Verbose,
}

impl ProbeLevel {
    /// Maps a raw variable value to a level. Any value other than the exact
    /// verbose marker means plain `On`.
    pub fn from_value(value: Option<&str>) -> ProbeLevel {
        Self::from_os_value(value.map(OsStr::new))
    }

    fn from_os_value(value: Option<&OsStr>) -> ProbeLevel {
        match value {
            None => ProbeLevel::Off,
            Some(v) if v == VERBOSE_MARKER => ProbeLevel::Verbose,
            Some(_) => ProbeLevel::On,
        }
    }

    /// Reads the level from [`DEBUG_LOGITS_ENV`].
    pub fn from_env() -> ProbeLevel {
        level_of(DEBUG_LOGITS_ENV)
    }

    pub fn is_enabled(self) -> bool {
        self != ProbeLevel::Off
    }

    pub fn is_verbose(self) -> bool {
        self == ProbeLevel::Verbose
    }
}

fn level_of(var: &str) -> ProbeLevel {
    ProbeLevel::from_os_value(std::env::var_os(var).as_deref())
}

/// True iff [`DEBUG_LOGITS_ENV`] is present, whatever its value.
pub fn is_enabled() -> bool {
    std::env::var_os(DEBUG_LOGITS_ENV).is_some()
}

/// True iff [`DEBUG_LOGITS_ENV`] equals [`VERBOSE_MARKER`] exactly.
pub fn is_verbose() -> bool {
    level_of(DEBUG_LOGITS_ENV).is_verbose()
}
