// Runtime settings from the command line and environment

use clap::{Arg, ArgMatches};

pub const DEFAULT_DATABASE: &str = "promptvault.db";
pub const DEFAULT_PORT: u16 = 8000;

const DB_ENV: &str = "PROMPTVAULT_DB";
const PORT_ENV: &str = "PROMPTVAULT_PORT";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// SQLite file path, or `:memory:`
    pub database: String,
    pub port: u16,
    /// Alternative prompts YAML used to seed an empty store
    pub seed_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
        }
    }
}

impl Settings {
    /// In-memory store, embedded seed
    pub fn in_memory() -> Self {
        Self {
            database: ":memory:".to_string(),
            ..Self::default()
        }
    }

    pub fn from_args() -> anyhow::Result<Self> {
        let matches = command().get_matches();
        Self::from_matches(&matches, |key| std::env::var(key).ok())
    }

    /// Command-line values win over the environment, which wins over defaults
    fn from_matches(matches: &ArgMatches, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database = matches
            .get_one::<String>("database")
            .cloned()
            .or_else(|| env(DB_ENV))
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let port = match matches.get_one::<String>("port").cloned().or_else(|| env(PORT_ENV)) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid port '{}': {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let seed_file = matches.get_one::<String>("seed").cloned();

        Ok(Self {
            database,
            port,
            seed_file,
        })
    }
}

fn command() -> clap::Command {
    clap::Command::new("Prompt Vault")
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("DATABASE")
                .help("Path to SQLite database file"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to listen on"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Path to a YAML file of prompts used when the store is empty"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let matches = command().try_get_matches_from(args)?;
        Settings::from_matches(&matches, |key| {
            env.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&["promptvault"], &[]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let settings = parse(
            &["promptvault"],
            &[("PROMPTVAULT_DB", "/tmp/x.db"), ("PROMPTVAULT_PORT", "9001")],
        )
        .unwrap();
        assert_eq!(settings.database, "/tmp/x.db");
        assert_eq!(settings.port, 9001);
    }

    #[test]
    fn test_args_override_env() {
        let settings = parse(
            &["promptvault", "-d", "cli.db", "--port", "7000", "-s", "mine.yml"],
            &[("PROMPTVAULT_DB", "env.db"), ("PROMPTVAULT_PORT", "9001")],
        )
        .unwrap();
        assert_eq!(settings.database, "cli.db");
        assert_eq!(settings.port, 7000);
        assert_eq!(settings.seed_file.as_deref(), Some("mine.yml"));
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = parse(&["promptvault", "-p", "http"], &[]).unwrap_err();
        assert!(err.to_string().contains("Invalid port"));
    }
}
