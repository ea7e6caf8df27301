//! Server configuration loaded from the process environment.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use duel_core::GameConfig;
use duel_runtime::RuntimeConfig;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory for the file log layer. Stderr only when unset.
    pub log_dir: Option<PathBuf>,
    pub recent_log_window: usize,
    /// Variables that were set but unusable, reported once logging is up.
    pub fallbacks: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_dir: None,
            recent_log_window: GameConfig::DEFAULT_RECENT_LOG_WINDOW,
            fallbacks: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DUEL_BIND_ADDR`
    /// - `DUEL_LOG_DIR`
    /// - `DUEL_RECENT_LOG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = read_var::<SocketAddr>(&lookup, "DUEL_BIND_ADDR", &mut config.fallbacks)
        {
            config.bind_addr = addr;
        }

        config.log_dir = lookup("DUEL_LOG_DIR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        if let Some(window) = read_var::<usize>(&lookup, "DUEL_RECENT_LOG", &mut config.fallbacks) {
            if window == 0 {
                config
                    .fallbacks
                    .push("DUEL_RECENT_LOG must be at least 1".to_string());
            } else {
                config.recent_log_window = window;
            }
        }

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig::with_recent_log_window(self.recent_log_window)
    }
}

fn read_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    fallbacks: &mut Vec<String>,
) -> Option<T>
where
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            fallbacks.push(format!("invalid {key} '{raw}', using default"));
            None
        }
    }
}
