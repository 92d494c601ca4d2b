use std::process::ExitCode;

use tracing::error;

use iconforge::app;
use iconforge::config;

fn main() -> ExitCode {
    // Load configuration (embedded defaults -> iconforge.toml -> env/.env)
    let (app_cfg, cfg_err) = match config::load() {
        Ok(cfg) => (Some(cfg), None),
        Err(e) => (None, Some(e)),
    };
    let logging = app_cfg.as_ref().map(|c| c.logging.clone()).unwrap_or_default();
    // Guards am Leben halten, damit die Non-Blocking Writer beim Beenden flushen
    let _log_guards = match app::init_logging(&logging) {
        Ok(guards) => guards,
        Err(e) => {
            eprintln!("FATAL: failed to initialise logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(app_cfg) = app_cfg else {
        if let Some(e) = cfg_err {
            error!("Invalid configuration: {:#}", e);
        }
        return ExitCode::FAILURE;
    };

    app::run(&app_cfg)
}
