//! Application state.

use std::sync::Arc;

use syndicate_core::SyndicateResult;
use syndicate_pricing::{PricingCalculator, ReferenceData};

use crate::config::ServerConfig;

/// Application state shared across handlers.
///
/// Read-only after startup; clones share the calculator and its tables.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Calculator over the loaded reference tables.
    pub calculator: Arc<PricingCalculator>,

    /// Where the reference tables came from (`built-in` or a file path).
    pub reference_source: Arc<str>,
}

impl AppState {
    /// Create state around an existing calculator.
    pub fn new(calculator: PricingCalculator, reference_source: impl Into<Arc<str>>) -> Self {
        Self {
            calculator: Arc::new(calculator),
            reference_source: reference_source.into(),
        }
    }

    /// Create state over the built-in desk tables.
    pub fn standard() -> Self {
        Self::new(PricingCalculator::standard(), "built-in")
    }

    /// Create state from configuration, loading the reference tables file if
    /// one is configured.
    pub fn from_config(config: &ServerConfig) -> SyndicateResult<Self> {
        match &config.reference_data {
            Some(path) => {
                let data = ReferenceData::from_file(path)?;
                Ok(Self::new(
                    PricingCalculator::new(Arc::new(data)),
                    path.display().to_string(),
                ))
            }
            None => Ok(Self::standard()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_state() {
        let state = AppState::standard();
        assert_eq!(&*state.reference_source, "built-in");
        assert_eq!(
            *state.calculator.reference(),
            *ReferenceData::standard()
        );
    }

    #[test]
    fn test_from_config_without_tables() {
        let state = AppState::from_config(&ServerConfig::default()).unwrap();
        assert_eq!(&*state.reference_source, "built-in");
    }

    #[test]
    fn test_from_config_with_missing_tables_file() {
        let config = ServerConfig {
            reference_data: Some("/nonexistent/tables.toml".into()),
            ..ServerConfig::default()
        };
        assert!(AppState::from_config(&config).is_err());
    }

    #[test]
    fn test_state_is_clone() {
        let state = AppState::standard();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.calculator, &cloned.calculator));
    }
}
