use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr};

use crate::utils::cookies::{CookieOptions, SameSite};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub api_base_url: String,
    pub cookie_secure: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .context("Invalid BIND_ADDR value")?;

        let api_base_url = normalize_base_url(
            &env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        )?;

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|value| parse_bool(&value))
            .unwrap_or(false);

        Ok(Config {
            bind_addr,
            api_base_url,
            cookie_secure,
        })
    }

    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions {
            secure: self.cookie_secure,
            same_site: SameSite::Lax,
        }
    }
}

fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let parsed =
        url::Url::parse(raw.trim()).map_err(|e| anyhow!("Invalid API_BASE_URL {}: {}", raw, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow!("API_BASE_URL must be http or https: {}", raw));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
