use std::path::PathBuf;

use serde::Deserialize;

const DEFAULTS: &str = include_str!("../config/default.toml");
const ENV_PREFIX: &str = "ICONFORGE";

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub source: PathBuf,
    pub output_root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub file_prefix: String,
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        match ::config::Config::builder()
            .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // Mirror defaults from config/default.toml
        Self { dir: PathBuf::from("logs"), file_prefix: "iconforge.log".to_string(), filter: "info".to_string() }
    }
}

/// Loads the configuration: embedded defaults -> iconforge.toml -> $ICONFORGE_CONFIG -> env.
pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();
    let custom_path = std::env::var(format!("{}_CONFIG", ENV_PREFIX)).ok();
    load_with(custom_path.as_deref(), ENV_PREFIX)
}

/// Same layering as [`load`], with an explicit override file and environment prefix.
pub fn load_with(custom_path: Option<&str>, env_prefix: &str) -> anyhow::Result<AppConfig> {
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        // Optional local file: iconforge.toml (in CWD)
        .add_source(::config::File::with_name("iconforge").required(false));

    if let Some(path) = custom_path {
        builder = builder.add_source(::config::File::with_name(path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix(env_prefix).separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.paths.source.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("paths.source must not be empty"));
    }
    if cfg.paths.output_root.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("paths.output_root must not be empty"));
    }

    if cfg.logging.dir.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("logging.dir must not be empty"));
    }
    if cfg.logging.file_prefix.trim().is_empty() {
        return Err(anyhow::anyhow!("logging.file_prefix must not be empty"));
    }

    Ok(())
}
