// src/config.rs
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Which record store backs the property service.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendConfig {
    /// Bundled JSON dataset with favorites kept in a SQLite key-value table.
    /// `dataset_path` replaces the compiled-in dataset when set.
    Local {
        dataset_path: Option<String>,
        db_path: String,
        schema_path: String,
    },
    /// Remote tabular record service.
    Remote(RemoteConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub table: String,
    pub api_key: Option<String>,
    /// Records requested per page.
    pub page_size: usize,
    /// Upper bound on pages fetched for a single query.
    pub max_pages: usize,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:4000".to_string(),
            table: "property".to_string(),
            api_key: None,
            page_size: 100,
            max_pages: 50,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub backend: BackendConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            backend: BackendConfig::Local {
                dataset_path: None,
                db_path: "haven.sqlite3".to_string(),
                schema_path: "sql/schema.sql".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Build the configuration from `HAVEN_*` environment variables,
    /// falling back to defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parsed(&lookup, "HAVEN_BIND").unwrap_or(defaults.bind_addr);
        let max_workers = parsed(&lookup, "HAVEN_WORKERS")
            .filter(|n: &usize| *n > 0)
            .unwrap_or(defaults.max_workers);

        let backend = match lookup("HAVEN_BACKEND").as_deref().map(str::trim) {
            Some("remote") => {
                let remote_defaults = RemoteConfig::default();
                BackendConfig::Remote(RemoteConfig {
                    base_url: lookup("HAVEN_REMOTE_URL")
                        .map(|u| u.trim_end_matches('/').to_string())
                        .unwrap_or(remote_defaults.base_url),
                    table: lookup("HAVEN_REMOTE_TABLE").unwrap_or(remote_defaults.table),
                    api_key: lookup("HAVEN_REMOTE_API_KEY").filter(|k| !k.is_empty()),
                    page_size: parsed(&lookup, "HAVEN_PAGE_SIZE")
                        .filter(|n: &usize| *n > 0)
                        .unwrap_or(remote_defaults.page_size),
                    max_pages: parsed(&lookup, "HAVEN_MAX_PAGES")
                        .filter(|n: &usize| *n > 0)
                        .unwrap_or(remote_defaults.max_pages),
                    timeout: parsed(&lookup, "HAVEN_REMOTE_TIMEOUT_SECS")
                        .filter(|n: &u64| *n > 0)
                        .map(Duration::from_secs)
                        .unwrap_or(remote_defaults.timeout),
                })
            }
            Some("local") | None => match defaults.backend {
                BackendConfig::Local {
                    dataset_path,
                    db_path,
                    schema_path,
                } => BackendConfig::Local {
                    dataset_path: lookup("HAVEN_DATASET").or(dataset_path),
                    db_path: lookup("HAVEN_DB").unwrap_or(db_path),
                    schema_path: lookup("HAVEN_SCHEMA").unwrap_or(schema_path),
                },
                remote => remote,
            },
            Some(other) => {
                tracing::warn!(backend = other, "unknown HAVEN_BACKEND, using local store");
                defaults.backend
            }
        };

        Self {
            bind_addr,
            max_workers,
            backend,
        }
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable config value");
            None
        }
    }
}
