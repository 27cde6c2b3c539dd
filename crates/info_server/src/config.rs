use std::{
    fs,
    net::{SocketAddr, ToSocketAddrs},
    path::Path,
};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_APP_NAME: &str = "Chops Example Web Application";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub app_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:5000".into(),
            app_name: DEFAULT_APP_NAME.into(),
        }
    }
}

impl Settings {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server_bind
            .to_socket_addrs()
            .with_context(|| format!("invalid bind address '{}'", self.server_bind))?
            .next()
            .ok_or_else(|| anyhow!("bind address '{}' resolved to nothing", self.server_bind))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    app_name: Option<String>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new("server.toml"), |name| std::env::var(name).ok())
}

/// Defaults, then `server.toml`, then `API_SERVER_PORT`, then `APP__*` variables.
pub(crate) fn load_settings_from(
    config_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.bind_addr {
                    settings.server_bind = v;
                }
                if let Some(v) = file_cfg.app_name {
                    settings.app_name = v;
                }
            }
            Err(error) => {
                warn!(path = %config_path.display(), %error, "ignoring unreadable server config");
            }
        }
    }

    if let Some(v) = env("API_SERVER_PORT") {
        match v.trim().parse::<u16>() {
            Ok(port) => settings.server_bind = with_port(&settings.server_bind, port),
            Err(_) => warn!(value = %v, "ignoring invalid API_SERVER_PORT"),
        }
    }

    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__APP_NAME") {
        settings.app_name = v;
    }

    settings
}

fn with_port(bind: &str, port: u16) -> String {
    let host = match bind.rsplit_once(':') {
        Some((host, _)) if !host.is_empty() => host,
        _ => "0.0.0.0",
    };
    format!("{host}:{port}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
