//! JobCrew host
//!
//! Boots the shell, restores the last login and reports which screen stack
//! gets mounted.

use anyhow::Context;
use jobcrew_core::{Config, RootView, Shell};

const CONFIG_ENV: &str = "JOBCREW_CONFIG";

fn load_config() -> anyhow::Result<Config> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("loading {} from {:?}", CONFIG_ENV, path)),
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jobcrew_core::init_logging();

    let config = load_config()?;
    let shell = Shell::new(config).context("opening session store")?;
    let follower = shell.follow_session();

    match shell.launch().await {
        RootView::Spinner => tracing::warn!("Session still restoring after launch"),
        RootView::Stack(stack) => {
            let session = shell.session();
            tracing::info!(
                stack = %stack,
                screen = shell.current_screen().map(|s| s.as_str()).unwrap_or("-"),
                user = session.user_name.as_deref().unwrap_or("-"),
                background = shell.palette().background,
                "JobCrew started"
            );
        }
    }

    follower.abort();
    Ok(())
}
