//! # Site configuration (`village.toml`)
//!
//! Read by the server at start-up (see `api::settings`). A missing file, or a file
//! with missing sections, is equivalent to [`SiteConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [site]
//! name = "Ramnagar"
//! tagline = "A village of traditions and progress"
//!
//! [routes]
//! landing = "/dashboard"   # where signed-in visitors are sent from guest-only pages
//! signed_out = "/"         # where anonymous visitors are sent from member pages
//!
//! [admin]                  # optional seed account with the admin role
//! email = "admin@ramnagar.example"
//! password = "change-me"
//!
//! [content]
//! seed_sample_events = true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminSeed>,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_site_name() -> String {
    "Ramnagar".to_string()
}

fn default_tagline() -> String {
    "A village of traditions and progress".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_landing")]
    pub landing: String,
    #[serde(default = "default_signed_out")]
    pub signed_out: String,
}

fn default_landing() -> String {
    "/dashboard".to_string()
}

fn default_signed_out() -> String {
    "/".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            landing: default_landing(),
            signed_out: default_signed_out(),
        }
    }
}

/// Account created with the admin role when the server starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    #[serde(default = "default_admin_name")]
    pub name: String,
}

fn default_admin_name() -> String {
    "Admin User".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_seed_events")]
    pub seed_sample_events: bool,
}

fn default_seed_events() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed_sample_events: default_seed_events(),
        }
    }
}

impl SiteConfig {
    /// Builder method to set the admin seed account.
    pub fn with_admin(mut self, email: &str, password: &str) -> Self {
        self.admin = Some(AdminSeed {
            email: email.to_string(),
            password: password.to_string(),
            name: default_admin_name(),
        });
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "village.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.routes.landing, "/dashboard");
        assert_eq!(config.routes.signed_out, "/");
        assert!(config.content.seed_sample_events);
        assert!(config.admin.is_none());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [site]
            name = "Shivpur"

            [admin]
            email = "admin@shivpur.example"
            password = "letmein1"
            "#,
        )
        .unwrap();
        assert_eq!(config.site.name, "Shivpur");
        assert_eq!(config.site.tagline, default_tagline());
        let admin = config.admin.unwrap();
        assert_eq!(admin.name, "Admin User");
        assert_eq!(admin.password, "letmein1");
    }

    #[test]
    fn test_to_toml_reads_back() {
        let config = SiteConfig::default().with_admin("admin@x.com", "secret1");
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }
}
