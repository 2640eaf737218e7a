//! Site settings.
//!
//! Handles loading, validating, and layering `site.toml`. These settings drive
//! the binary (which page variant to render, where to write it, how the contact
//! form paces its submission). They are separate from the portfolio *content*,
//! which lives in [`crate::store`].
//!
//! ## File Location
//!
//! ```text
//! content/
//! ├── site.toml        # Site settings (optional, overrides stock defaults)
//! └── portfolio.toml   # Content overlay (optional, see `store`)
//! ```
//!
//! ## Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! variant = "studio"         # "studio" or "classic"
//!
//! [form]
//! submit_delay_ms = 1500     # Pause between submit and delivery
//! reset_delay_ms = 4000      # How long the "sent" view stays before reset
//! # endpoint = "https://example.com/contact"   # HTTP gateway target
//!
//! [render]
//! output_dir = "dist"
//! featured_projects_only = true
//! ```
//!
//! Files are sparse: override just the keys you need. Unknown keys are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Name of the settings file inside the content directory.
pub const SETTINGS_FILENAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site settings loaded from `site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Presentation variant.
    pub site: SiteSection,
    /// Contact form pacing and delivery.
    pub form: FormConfig,
    /// Static page output.
    pub render: RenderConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bad_endpoint = self
            .form
            .endpoint
            .as_deref()
            .is_some_and(|url| !(url.starts_with("http://") || url.starts_with("https://")));
        if bad_endpoint {
            return Err(ConfigError::Validation(
                "form.endpoint must be an http(s) URL".into(),
            ));
        }
        if self.form.submit_delay_ms > MAX_DELAY_MS || self.form.reset_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "form delays must be at most {MAX_DELAY_MS} ms"
            )));
        }
        if self.render.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "render.output_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

const MAX_DELAY_MS: u64 = 60_000;

/// Page variant. Both variants render the same sections from the same data;
/// they differ only in markup hooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Dark "system" look with section ribbons.
    #[default]
    Studio,
    /// Light single-column layout.
    Classic,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::Classic => "classic",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub variant: Variant,
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Milliseconds between an accepted submit and delivery to the gateway.
    pub submit_delay_ms: u64,
    /// Milliseconds the confirmation stays up before the form resets.
    pub reset_delay_ms: u64,
    /// Target URL for the HTTP gateway. Unset means submissions are only logged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            reset_delay_ms: 4000,
            endpoint: None,
        }
    }
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// Static page output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory `index.html` is written to.
    pub output_dir: String,
    /// Show only featured projects in the projects section.
    pub featured_projects_only: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: "dist".to_string(),
            featured_projects_only: true,
        }
    }
}

// =============================================================================
// Loading, merging, and validation
// =============================================================================

/// Returns the stock default settings as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
///
/// Shared with [`crate::store`], which layers content the same way.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join(SETTINGS_FILENAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load settings from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(variant = config.site.variant.as_str(), "site settings loaded");
    Ok(config)
}

/// Returns a fully-commented stock `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Settings
# =============
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.
#
# Content (projects, skills, copy) is not configured here; put content
# overrides in portfolio.toml next to this file.

# ---------------------------------------------------------------------------
# Presentation
# ---------------------------------------------------------------------------
[site]
# Page variant: "studio" (dark, ribbons) or "classic" (light, single column).
variant = "studio"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[form]
# Pause between an accepted submit and handing the message to the gateway.
submit_delay_ms = 1500

# How long the confirmation view stays up before the form clears itself.
reset_delay_ms = 4000

# Where the HTTP gateway posts messages (requires the `http` feature).
# endpoint = "https://example.com/api/contact"

# ---------------------------------------------------------------------------
# Static output
# ---------------------------------------------------------------------------
[render]
# Directory index.html is written to.
output_dir = "dist"

# Show only featured projects in the projects section.
featured_projects_only = true
"##
}
