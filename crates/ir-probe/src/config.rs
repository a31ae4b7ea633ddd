use crate::gate::ProbeLevel;

/// Number of ranked entries printed per sequence unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 10;

/// Settings for a [`LogitReporter`](crate::LogitReporter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterConfig {
    pub level: ProbeLevel,
    pub top_k: usize,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            level: ProbeLevel::Off,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ReporterConfig {
    /// Default settings with the level taken from the environment.
    pub fn from_env() -> Self {
        Self {
            level: ProbeLevel::from_env(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: ProbeLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = ReporterConfig::default();
        assert_eq!(c.level, ProbeLevel::Off);
        assert_eq!(c.top_k, 10);
    }

    #[test]
    fn test_builders() {
        let c = ReporterConfig::default()
            .with_level(ProbeLevel::Verbose)
            .with_top_k(3);
        assert_eq!(c.level, ProbeLevel::Verbose);
        assert_eq!(c.top_k, 3);
    }
}
