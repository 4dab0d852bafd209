//! `LifecycleRules` — a validated configuration snapshot plus the probability
//! tables derived from it.
//!
//! Tables and config are fused into one value on purpose: the tables cannot
//! be held beyond the config they were derived from, so "stale tables after a
//! reconfigure" is unrepresentable.  The whole value is read-only during
//! simulation and freely shared across parallel workers; reconfiguration
//! constructs a replacement through `&mut` access, which cannot overlap a
//! running tick.

use crate::config::LifecycleConfig;
use crate::error::ConfigError;
use crate::stage::AgeBands;
use crate::tables::ProbabilityTables;

/// Validated, immutable lifecycle rules.
#[derive(Clone, Debug)]
pub struct LifecycleRules {
    config: LifecycleConfig,
    tables: ProbabilityTables,
}

impl LifecycleRules {
    /// Validate `config` and derive its probability tables.
    ///
    /// On error the caller's previous rules remain in force — this
    /// constructor has no side effects.
    pub fn new(config: LifecycleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tables = ProbabilityTables::derive(&config);
        Ok(Self { config, tables })
    }

    #[inline]
    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    #[inline]
    pub fn tables(&self) -> &ProbabilityTables {
        &self.tables
    }

    #[inline]
    pub fn bands(&self) -> &AgeBands {
        &self.config.bands
    }
}

impl Default for LifecycleRules {
    /// Rules built from the default configuration (which always validates).
    fn default() -> Self {
        Self::new(LifecycleConfig::default()).expect("default config is valid")
    }
}
