//! # Node Configuration
//!
//! Runtime parameters with sane defaults and environment overrides.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CHAINPAY_LOG` | `info` | Log level filter |
//! | `CHAINPAY_REPLAY_WINDOW` | `25` | Blocks replayed at bootstrap |
//! | `CHAINPAY_PERSIST_TIMEOUT_MS` | `5000` | Durable write bound |
//! | `CHAINPAY_DEMO` | `1` | Seed demo accounts and run a smoke flow |

use std::time::Duration;

use chainpay_ledger::LedgerConfig;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Blocks replayed into the in-memory window at bootstrap.
    pub replay_window: usize,
    /// Upper bound on a single durable block write.
    pub persist_timeout: Duration,
    /// Whether to seed demo accounts and run the smoke flow.
    pub demo: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        let ledger = LedgerConfig::default();
        Self {
            replay_window: ledger.replay_window,
            persist_timeout: ledger.persist_timeout,
            demo: true,
        }
    }
}

impl NodeConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            replay_window: env_parse("CHAINPAY_REPLAY_WINDOW")
                .unwrap_or(defaults.replay_window),
            persist_timeout: env_parse("CHAINPAY_PERSIST_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.persist_timeout),
            demo: env_parse::<u8>("CHAINPAY_DEMO")
                .map(|v| v != 0)
                .unwrap_or(defaults.demo),
        }
    }

    /// The ledger-service slice of this configuration.
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            replay_window: self.replay_window,
            persist_timeout: self.persist_timeout,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
