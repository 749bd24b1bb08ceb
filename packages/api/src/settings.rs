//! Server start-up configuration.
//!
//! `.env` is read with `dotenvy`. `VILLAGE_CONFIG` names the TOML file (default
//! `village.toml` in the working directory); `VILLAGE_ADMIN_EMAIL` and
//! `VILLAGE_ADMIN_PASSWORD` together override the `[admin]` section.

use std::io::ErrorKind;

use store::SiteConfig;
use tracing::{info, warn};

pub const CONFIG_PATH_VAR: &str = "VILLAGE_CONFIG";
pub const ADMIN_EMAIL_VAR: &str = "VILLAGE_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_VAR: &str = "VILLAGE_ADMIN_PASSWORD";

pub fn load() -> SiteConfig {
    dotenvy::dotenv().ok();

    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| SiteConfig::filename().to_string());
    let config = match std::fs::read_to_string(&path) {
        Ok(text) => parse(&text, &path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(%path, "no site config file; using defaults");
            SiteConfig::default()
        }
        Err(e) => {
            warn!(%path, error = %e, "could not read site config; using defaults");
            SiteConfig::default()
        }
    };

    with_admin_override(
        config,
        std::env::var(ADMIN_EMAIL_VAR).ok(),
        std::env::var(ADMIN_PASSWORD_VAR).ok(),
    )
}

fn parse(text: &str, path: &str) -> SiteConfig {
    SiteConfig::from_toml(text).unwrap_or_else(|e| {
        warn!(%path, error = %e, "invalid site config; using defaults");
        SiteConfig::default()
    })
}

fn with_admin_override(
    config: SiteConfig,
    email: Option<String>,
    password: Option<String>,
) -> SiteConfig {
    match (email, password) {
        (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
            config.with_admin(email.trim(), &password)
        }
        _ => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        assert_eq!(parse("[routes\nlanding = 3", "village.toml"), SiteConfig::default());
    }

    #[test]
    fn test_admin_override_needs_both_values() {
        let config = with_admin_override(SiteConfig::default(), Some("admin@x.com".into()), None);
        assert!(config.admin.is_none());

        let config = with_admin_override(
            SiteConfig::default(),
            Some(" admin@x.com ".into()),
            Some("secret1".into()),
        );
        let admin = config.admin.unwrap();
        assert_eq!(admin.email, "admin@x.com");
        assert_eq!(admin.password, "secret1");
    }
}
