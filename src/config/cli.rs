use crate::config::ClientConfig;
use crate::config::toml_config::FileConfig;
use crate::domain::model::Pace;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pocket-guide")]
#[command(about = "Command-line client for the Pocket Guide tour API")]
pub struct Cli {
    /// Base URL of the API; falls back to POCKET_GUIDE_API_URL /
    /// POCKET_GUIDE_ENV resolution
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token; falls back to POCKET_GUIDE_TOKEN
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Request timeout; overrides config file and the built-in default
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a new tour
    Generate {
        #[arg(long)]
        city: String,
        #[arg(long, default_value = "3")]
        days: u32,
        #[arg(long, value_delimiter = ',')]
        interests: Vec<String>,
        #[arg(long, value_enum)]
        pace: Option<Pace>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        start_location: Option<String>,
        #[arg(long)]
        end_location: Option<String>,
    },
    /// Fetch one tour by id
    Tour {
        tour_id: String,
    },
    /// List saved tours
    Tours {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Replace a single POI in a tour
    ReplacePoi {
        tour_id: String,
        #[arg(long)]
        original_poi: String,
        #[arg(long)]
        replacement_poi: String,
        #[arg(long)]
        language: Option<String>,
    },
    /// List the POIs of a city
    Pois {
        city: String,
    },
    /// Fetch one POI
    Poi {
        city: String,
        poi_id: String,
    },
    /// Fetch the audio-guide transcript of a POI
    Transcript {
        city: String,
        poi_id: String,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        tour_id: Option<String>,
    },
    /// List the combo tickets of a city
    ComboTickets {
        city: String,
    },
    /// Fetch one combo ticket
    ComboTicket {
        city: String,
        ticket_id: String,
    },
}

impl Command {
    /// Fill in language/limit from the config file's `[defaults]` section
    /// where the caller gave no flag. Subcommands without those options are
    /// untouched.
    pub fn apply_file_defaults(&mut self, file: &FileConfig) {
        let default_language = file.default_language().map(str::to_string);

        match self {
            Command::Generate { language, .. }
            | Command::ReplacePoi { language, .. }
            | Command::Transcript { language, .. } => {
                if language.is_none() {
                    *language = default_language;
                }
            }
            Command::Tours { limit, .. } => {
                if limit.is_none() {
                    *limit = file.default_limit();
                }
            }
            _ => {}
        }
    }
}

impl Cli {
    /// Parse the configuration file when one was given.
    pub fn file_config(&self) -> Result<Option<FileConfig>> {
        self.config.as_deref().map(FileConfig::from_file).transpose()
    }

    /// Build the effective client configuration: config file first, then
    /// environment, then explicit flags on top. Flags that were not passed
    /// leave the underlying value alone.
    pub fn client_config(&self, file: Option<&FileConfig>) -> ClientConfig {
        let mut config = match file {
            Some(file) => file.to_client_config(),
            None => ClientConfig::from_env(),
        };

        if let Some(url) = &self.api_url {
            config.base_url = url.clone();
        }
        if let Some(token) = &self.token {
            config.auth_token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[client]
base_url = "http://localhost:8000"
timeout_seconds = 10

[defaults]
language = "it"
limit = 5
"#,
        )
        .unwrap();
        file
    }

    #[test]
    fn test_file_timeout_survives_when_flag_absent() {
        let file = config_file();
        let cli = Cli::try_parse_from([
            "pocket-guide",
            "--config",
            file.path().to_str().unwrap(),
            "tours",
        ])
        .unwrap();

        let file_config = cli.file_config().unwrap();
        let config = cli.client_config(file_config.as_ref());

        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_timeout_flag_overrides_file() {
        let file = config_file();
        let cli = Cli::try_parse_from([
            "pocket-guide",
            "--config",
            file.path().to_str().unwrap(),
            "--timeout-seconds",
            "60",
            "tours",
        ])
        .unwrap();

        let file_config = cli.file_config().unwrap();
        let config = cli.client_config(file_config.as_ref());

        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_file_defaults_fill_missing_subcommand_options() {
        let file = config_file();
        let file_config = FileConfig::from_file(file.path()).unwrap();

        let mut cli = Cli::try_parse_from([
            "pocket-guide",
            "generate",
            "--city",
            "rome",
        ])
        .unwrap();
        cli.command.apply_file_defaults(&file_config);
        match &cli.command {
            Command::Generate { language, .. } => {
                assert_eq!(language.as_deref(), Some("it"));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let mut cli = Cli::try_parse_from(["pocket-guide", "tours"]).unwrap();
        cli.command.apply_file_defaults(&file_config);
        match &cli.command {
            Command::Tours { limit, .. } => assert_eq!(*limit, Some(5)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_explicit_flags_beat_file_defaults() {
        let file = config_file();
        let file_config = FileConfig::from_file(file.path()).unwrap();

        let mut cli = Cli::try_parse_from([
            "pocket-guide",
            "tours",
            "--limit",
            "50",
        ])
        .unwrap();
        cli.command.apply_file_defaults(&file_config);
        match &cli.command {
            Command::Tours { limit, .. } => assert_eq!(*limit, Some(50)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
