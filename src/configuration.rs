use std::{env, fmt, fs, ops::Deref, path::Path, str::FromStr, sync::Arc};

use crate::{adapter::DataAdapter, error::Error, provider::HttpSource};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

/// Owned by the running service; dropping it tears the adapter down.
#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub adapter: DataAdapter<HttpSource>,
}

impl State {
    pub fn new(config: Config) -> Result<State, Error> {
        let source = HttpSource::new(&config)?;
        let adapter = DataAdapter::new(config.clone(), source);
        Ok(Self { config, adapter })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub local_host: String,
    pub remote_host: String,
    pub payout_canister_id: String,
    pub wallet_canister_id: String,
    pub use_local_endpoint: bool,
    pub refresh_interval: u64,
    pub timeout: u64,
    pub log_limit: u64,
    pub history_window: usize,
    pub log_window: usize,
    pub memory_threshold_warning: u8,
    pub memory_threshold_critical: u8,
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            local_host: String::from("http://localhost:8000"),
            remote_host: String::from("https://ic0.app"),
            payout_canister_id: String::from("zeqfj-qyaaa-aaaaf-qanua-cai"),
            wallet_canister_id: String::from("rce3q-iaaaa-aaaap-qpyfa-cai"),
            use_local_endpoint: true,
            refresh_interval: 30,
            timeout: 30_000,
            log_limit: 10,
            history_window: 30,
            log_window: 50,
            memory_threshold_warning: 60,
            memory_threshold_critical: 85,
            server_host: String::from("127.0.0.1"),
            port: 8080,
            allowed_origins: vec![String::from(ANY_ORIGIN)],
            static_dir: String::from("public"),
        }
    }
}

/// `ALLOWED_ORIGINS` entry that admits every origin.
pub const ANY_ORIGIN: &str = "*";

impl Config {
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == ANY_ORIGIN || allowed == origin)
    }

    pub fn host(&self, use_local: bool) -> &str {
        if use_local {
            &self.local_host
        } else {
            &self.remote_host
        }
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let defaults = Config::default();

    let memory_threshold_warning = parse_env(
        "MEMORY_THRESHOLD_WARNING",
        defaults.memory_threshold_warning,
    )?;
    let memory_threshold_critical = parse_env(
        "MEMORY_THRESHOLD_CRITICAL",
        defaults.memory_threshold_critical,
    )?;

    if memory_threshold_warning > memory_threshold_critical
        || memory_threshold_critical > 100
    {
        return Err(Error::ConfigurationError(format!(
            "memory thresholds out of order: warning {}, critical {}",
            memory_threshold_warning, memory_threshold_critical
        )));
    }

    let allowed_origins = match env_value("ALLOWED_ORIGINS") {
        Some(value) => value
            .split(',')
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect::<Vec<String>>(),
        None => defaults.allowed_origins,
    };

    let static_dir = match env_value("STATIC_DIRECTORY") {
        Some(dir) => format!("{}/{}", env!("CARGO_MANIFEST_DIR"), dir),
        None => format!("{}/{}", env!("CARGO_MANIFEST_DIR"), defaults.static_dir),
    };

    Ok(Config {
        local_host: env_value("LOCAL_HOST").unwrap_or(defaults.local_host),
        remote_host: env_value("REMOTE_HOST").unwrap_or(defaults.remote_host),
        payout_canister_id: env_value("PAYOUT_CANISTER_ID")
            .unwrap_or(defaults.payout_canister_id),
        wallet_canister_id: env_value("WALLET_CANISTER_ID")
            .unwrap_or(defaults.wallet_canister_id),
        use_local_endpoint: parse_env(
            "USE_LOCAL_ENDPOINT",
            defaults.use_local_endpoint,
        )?,
        refresh_interval: parse_env(
            "REFRESH_INTERVAL_IN_SEC",
            defaults.refresh_interval,
        )?,
        timeout: parse_env("TIMEOUT", defaults.timeout)?,
        log_limit: parse_env("LOG_LIMIT", defaults.log_limit)?,
        history_window: parse_env("HISTORY_WINDOW", defaults.history_window)?,
        log_window: parse_env("LOG_WINDOW", defaults.log_window)?,
        memory_threshold_warning,
        memory_threshold_critical,
        server_host: env_value("SERVER_HOST").unwrap_or(defaults.server_host),
        port: parse_env("PORT", defaults.port)?,
        allowed_origins,
        static_dir,
    })
}

/// Loads `.env` from the manifest directory into the process environment.
/// A missing file is not an error.
pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    if !Path::new(&path).exists() {
        return Ok(());
    }

    let config_string = fs::read_to_string(path)?;

    for (key, value) in parse_config_string(&config_string) {
        env::set_var(key, value);
    }

    Ok(())
}

fn parse_config_string(config: &str) -> Vec<(String, String)> {
    config
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"');
            (key.trim().to_owned(), value.to_owned())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env_value(key) {
        Some(value) => value.parse().map_err(|e| {
            Error::ConfigurationError(format!("{}: {}", key, e))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_string() {
        let pairs = parse_config_string(
            "# local replica\nLOCAL_HOST=http://localhost:4943\n\nPORT = 9000\nINVALID LINE\nPAYOUT_CANISTER_ID=\"bd3sg-teaaa-aaaaa-qaaba-cai\"\n",
        );

        assert_eq!(
            pairs,
            vec![
                (
                    String::from("LOCAL_HOST"),
                    String::from("http://localhost:4943")
                ),
                (String::from("PORT"), String::from("9000")),
                (
                    String::from("PAYOUT_CANISTER_ID"),
                    String::from("bd3sg-teaaa-aaaaa-qaaba-cai")
                ),
            ]
        );
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        env::set_var("W8_TEST_PORT", "not-a-port");
        let result: Result<u16, Error> = parse_env("W8_TEST_PORT", 80);
        assert!(matches!(result, Err(Error::ConfigurationError(_))));

        let missing: u16 = parse_env("W8_TEST_MISSING_KEY", 80).unwrap();
        assert_eq!(missing, 80);
    }

    #[test]
    fn test_allowed_origins() {
        let open = Config::default();
        assert!(open.allows_origin("https://dashboard.world8.io"));

        let restricted = Config {
            allowed_origins: vec![String::from("http://localhost:3000")],
            ..Config::default()
        };
        assert!(restricted.allows_origin("http://localhost:3000"));
        assert!(!restricted.allows_origin("https://evil.example"));
    }

    #[test]
    fn test_host_selection() {
        let config = Config::default();
        assert_eq!(config.host(true), "http://localhost:8000");
        assert_eq!(config.host(false), "https://ic0.app");
    }
}
