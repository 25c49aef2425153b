//! Site descriptor handed to the documentation generator.
//!
//! The descriptor is built in, see [`defaults`]. A `docsite.toml` next to
//! the site overrides any part of it; missing keys keep the built-in values.
//! Keys use the generator's own camelCase names, so the TOML file and the
//! emitted JSON have the same shape.
//!
//! # Sections
//!
//! | Key               | Purpose                                           |
//! |-------------------|---------------------------------------------------|
//! | root keys         | Title, tagline, url, baseUrl, deployment names    |
//! | `[future]`        | Generator feature flags                           |
//! | `[i18n]`          | Default locale and supported locales              |
//! | `presets`         | `[name, options]` preset bundles (`classic`)      |
//! | `plugins`         | Extra generator plugins                           |
//! | `[themeConfig]`   | Social card, color mode, navbar, footer, prism    |
//!
//! # Example
//!
//! ```toml
//! title = "Datathon MedIn"
//! url = "https://medin-inteli.github.io"
//! baseUrl = "/Datathon-MedIn/"
//! onBrokenLinks = "warn"
//!
//! [i18n]
//! defaultLocale = "pt"
//! locales = ["pt"]
//!
//! [themeConfig.prism]
//! theme = "github"
//! darkTheme = "dracula"
//! ```

pub mod defaults;
mod deploy;
mod error;
mod footer;
pub mod handle;
mod i18n;
mod navbar;
mod preset;
mod theme;

pub use deploy::DeployTarget;
pub use error::{ConfigDiagnostics, ConfigError};
pub use footer::{FooterColumn, FooterConfig, FooterItem, FooterStyle};
pub use i18n::I18nConfig;
pub use navbar::{ExternalNavItem, NavItem, NavPosition, NavbarConfig, SidebarNavItem};
pub use preset::{PluginConfig, PresetConfig};
pub use theme::{PrismTheme, ThemeConfig};

use crate::{
    cli::{Cli, EmitFormat},
    log,
    utils::{date, url},
};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site title, used in the `<title>` and meta tags.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    #[serde(default = "defaults::site::tagline")]
    #[educe(Default = defaults::site::tagline())]
    pub tagline: String,

    /// Favicon path, relative to the static directory.
    #[serde(default = "defaults::site::favicon")]
    #[educe(Default = defaults::site::favicon())]
    pub favicon: String,

    /// Production origin, without a path (e.g. `https://medin-inteli.github.io`).
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Path the site is served under, bounded by `/`.
    #[serde(default = "defaults::site::base_url")]
    #[educe(Default = defaults::site::base_url())]
    pub base_url: String,

    /// GitHub organization or user owning the repository.
    #[serde(default = "defaults::site::organization_name")]
    #[educe(Default = defaults::site::organization_name())]
    pub organization_name: String,

    /// GitHub repository name.
    #[serde(default = "defaults::site::project_name")]
    #[educe(Default = defaults::site::project_name())]
    pub project_name: String,

    /// What the generator does with links it cannot resolve.
    #[serde(default = "defaults::site::on_broken_links")]
    #[educe(Default = defaults::site::on_broken_links())]
    pub on_broken_links: BrokenLinkPolicy,

    /// Generator feature flags.
    #[serde(default = "defaults::site::future")]
    #[educe(Default = defaults::site::future())]
    pub future: BTreeMap<String, bool>,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default = "defaults::preset::presets")]
    #[educe(Default = defaults::preset::presets())]
    pub presets: Vec<PresetConfig>,

    #[serde(default)]
    pub plugins: Vec<PluginConfig>,

    #[serde(default)]
    pub theme_config: ThemeConfig,
}

/// Reaction to links the generator cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    Ignore,
    /// Report and keep building, so docs can be written incrementally.
    #[default]
    Warn,
    Throw,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// The built-in descriptor with the copyright year of the local clock.
    pub fn builtin() -> Self {
        Self::default().render(date::current_year())
    }

    /// Load `<root>/<config>` rendered for the current year when it exists,
    /// the built-in descriptor otherwise.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = Self::normalize_path(&cli.root().join(&cli.config));

        let mut config = if config_path.exists() {
            log!("config"; "loading {}", config_path.display());
            Self::from_path(&config_path)?.render(date::current_year())
        } else {
            log!("config"; "{} not found, using the built-in descriptor", cli.config.display());
            Self::builtin()
        };
        config.config_path = config_path;

        Ok(config)
    }

    /// Expand the `{year}` placeholders for `year`.
    pub fn render(mut self, year: i32) -> Self {
        self.theme_config.footer.render_copyright(year);
        self
    }

    /// Public URL of the site root (`url` + `baseUrl`).
    pub fn site_root(&self) -> String {
        url::join(&self.url, &self.base_url)
    }

    /// Absolute URL of a route relative to `baseUrl` (e.g. `/intro`).
    pub fn permalink(&self, route: &str) -> String {
        url::join(&self.site_root(), route)
    }

    /// Preset entry by name.
    pub fn preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Serialize for the generator.
    pub fn emit(&self, format: EmitFormat) -> Result<String, ConfigError> {
        match format {
            EmitFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|err| ConfigError::Serialize(err.to_string())),
            EmitFormat::Toml => {
                toml::to_string_pretty(self).map_err(|err| ConfigError::Serialize(err.to_string()))
            }
        }
    }

    /// Run every check and collect the findings.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.title.trim().is_empty() {
            diag.error("title", "must not be empty");
        }
        if self.favicon.trim().is_empty() {
            diag.error("favicon", "must not be empty");
        }

        if !url::is_origin_url(&self.url) {
            diag.error_with_hint(
                "url",
                format!("`{}` is not an http(s) origin", self.url),
                "put the path part into `baseUrl`",
            );
        }

        if !url::is_bounded_path(&self.base_url) {
            diag.error_with_hint(
                "baseUrl",
                format!("`{}` must start and end with `/`", self.base_url),
                format!("e.g. `/{}/`", self.project_name),
            );
        }

        deploy::validate(self, &mut diag);
        self.i18n.validate(&mut diag);

        if self.presets.is_empty() {
            diag.warn("presets", "no preset declared, the generator renders nothing");
        }
        for (i, preset) in self.presets.iter().enumerate() {
            preset.validate(i, &mut diag);
        }
        for (i, plugin) in self.plugins.iter().enumerate() {
            plugin.validate(i, &mut diag);
        }

        self.theme_config.validate(&mut diag);

        diag
    }

    /// Validate configuration, returning the warnings on success.
    pub fn validate(&self) -> Result<ConfigDiagnostics, ConfigError> {
        self.diagnose().into_result().map_err(ConfigError::Diagnostics)
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
