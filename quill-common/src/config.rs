//! Configuration loading
//!
//! Every setting resolves in this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error. A config file that exists but
//! cannot be parsed is.

use crate::{Error, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8081";
const DEFAULT_POST_SERVICE_URL: &str = "http://localhost:8082";
const DEFAULT_MODEL_BASE_URL: &str = "http://localhost:11434/v1";
const DEFAULT_MODEL_NAME: &str = "llama3.1";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "QUILL_CONFIG";

/// The four Quill services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Users,
    Posts,
    Comments,
    Ai,
}

impl Module {
    /// Name used for the TOML section and in logs
    pub fn name(self) -> &'static str {
        match self {
            Module::Users => "users",
            Module::Posts => "posts",
            Module::Comments => "comments",
            Module::Ai => "ai",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Module::Users => 8081,
            Module::Posts => 8082,
            Module::Comments => 8083,
            Module::Ai => 8084,
        }
    }

    fn env_var(self, setting: &str) -> String {
        format!("QUILL_{}_{}", self.name().to_uppercase(), setting)
    }
}

/// Command-line arguments shared by all service binaries
#[derive(Parser, Debug, Default, Clone)]
#[command(version)]
pub struct ServiceArgs {
    /// TOML config file (overrides QUILL_CONFIG and the per-user default)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database file (in-memory when omitted)
    #[arg(short, long)]
    pub database: Option<PathBuf>,
}

/// Listen settings for one service section (`[posts]`, ...)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListenSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
}

/// `[peers]` section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PeersSection {
    pub user_service: Option<String>,
    pub post_service: Option<String>,
}

/// `[model]` section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ModelSection {
    pub base_url: Option<String>,
    pub name: Option<String>,
    pub api_key: Option<String>,
}

/// Parsed TOML config file (all sections optional)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub users: ListenSection,
    #[serde(default)]
    pub posts: ListenSection,
    #[serde(default)]
    pub comments: ListenSection,
    #[serde(default)]
    pub ai: ListenSection,
    #[serde(default)]
    pub peers: PeersSection,
    #[serde(default)]
    pub model: ModelSection,
}

impl TomlConfig {
    pub fn section(&self, module: Module) -> &ListenSection {
        match module {
            Module::Users => &self.users,
            Module::Posts => &self.posts,
            Module::Comments => &self.comments,
            Module::Ai => &self.ai,
        }
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Base URLs of sibling services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerUrls {
    pub user_service: String,
    pub post_service: String,
}

/// Generative model endpoint (OpenAI-compatible)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub base_url: String,
    pub name: String,
    pub api_key: Option<String>,
}

/// Fully resolved configuration for one service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub module: Module,
    pub host: String,
    pub port: u16,
    /// SQLite file; `None` means in-memory
    pub database: Option<PathBuf>,
    pub peers: PeerUrls,
    pub model: ModelSettings,
}

impl ServiceConfig {
    /// Load configuration from CLI args, process environment and config file
    pub fn load(module: Module, args: &ServiceArgs) -> Result<Self> {
        let env = |key: &str| std::env::var(key).ok();

        let toml = match locate_config_file(args.config.as_deref(), env(CONFIG_PATH_ENV)) {
            Some(path) => {
                tracing::info!("Loading config file: {}", path.display());
                TomlConfig::from_file(&path)?
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                TomlConfig::default()
            }
        };

        Self::resolve(module, args, &toml, env)
    }

    /// Merge all sources; `env` abstracts environment lookup
    pub fn resolve<E>(module: Module, args: &ServiceArgs, toml: &TomlConfig, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let section = toml.section(module);

        let host = args
            .host
            .clone()
            .or_else(|| env(&module.env_var("HOST")))
            .or_else(|| section.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match args.port {
            Some(port) => port,
            None => match env(&module.env_var("PORT")) {
                Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                    Error::Config(format!("{} is not a valid port: {raw}", module.env_var("PORT")))
                })?,
                None => section.port.unwrap_or_else(|| module.default_port()),
            },
        };

        let database = args
            .database
            .clone()
            .or_else(|| env(&module.env_var("DATABASE")).map(PathBuf::from))
            .or_else(|| section.database.clone());

        let peers = PeerUrls {
            user_service: env("QUILL_USER_SERVICE_URL")
                .or_else(|| toml.peers.user_service.clone())
                .unwrap_or_else(|| DEFAULT_USER_SERVICE_URL.to_string()),
            post_service: env("QUILL_POST_SERVICE_URL")
                .or_else(|| toml.peers.post_service.clone())
                .unwrap_or_else(|| DEFAULT_POST_SERVICE_URL.to_string()),
        };

        let model = ModelSettings {
            base_url: env("QUILL_MODEL_BASE_URL")
                .or_else(|| toml.model.base_url.clone())
                .unwrap_or_else(|| DEFAULT_MODEL_BASE_URL.to_string()),
            name: env("QUILL_MODEL_NAME")
                .or_else(|| toml.model.name.clone())
                .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
            api_key: env("QUILL_MODEL_API_KEY").or_else(|| toml.model.api_key.clone()),
        };

        for (label, url) in [("user_service", &peers.user_service), ("post_service", &peers.post_service)] {
            if url.trim().is_empty() {
                return Err(Error::Config(format!("peers.{label} must not be empty")));
            }
        }

        Ok(Self {
            module,
            host,
            port,
            database,
            peers,
            model,
        })
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Pick the config file: explicit path, then `QUILL_CONFIG`, then the
/// per-user default if it exists
fn locate_config_file(cli_path: Option<&Path>, env_path: Option<String>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_path {
        return Some(PathBuf::from(path));
    }
    default_config_path().filter(|p| p.exists())
}

/// `~/.config/quill/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("quill").join("config.toml"))
}
