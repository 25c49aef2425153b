//! `presets` and `plugins` configuration.
//!
//! A preset is a named bundle of generator behavior. The only preset the
//! generator ships is `classic`: docs, blog, pages and the classic theme.
//!
//! Both lists use the generator's own entry shape, a `[name, options]` pair.
//! A plugin without options may also be written as its bare name.
//!
//! # Example
//! ```toml
//! presets = [
//!     ["classic", { blog = false, pages = false, docs = { routeBasePath = "/" } }],
//! ]
//! plugins = [
//!     "docusaurus-plugin-sass",
//!     ["@docusaurus/plugin-ideal-image", { quality = 70 }],
//! ]
//! ```

use super::{ConfigDiagnostics, defaults};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Preset names the generator can resolve.
pub const KNOWN_PRESETS: &[&str] = &[defaults::preset::CLASSIC];

/// One `[name, options]` entry of `presets`.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(from = "(String, PresetOptions)", into = "(String, PresetOptions)")]
pub struct PresetConfig {
    /// Preset name, resolved by the generator (see [`KNOWN_PRESETS`]).
    #[educe(Default = defaults::preset::name())]
    pub name: String,

    pub options: PresetOptions,
}

/// Options of the `classic` preset.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PresetOptions {
    /// Docs plugin options.
    #[serde(default)]
    pub docs: DocsOptions,

    /// Enable the blog plugin.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub blog: bool,

    /// Enable the standalone pages plugin.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub pages: bool,

    /// Classic theme options.
    #[serde(default)]
    pub theme: ThemeOptions,
}

impl From<(String, PresetOptions)> for PresetConfig {
    fn from((name, options): (String, PresetOptions)) -> Self {
        Self { name, options }
    }
}

impl From<PresetConfig> for (String, PresetOptions) {
    fn from(preset: PresetConfig) -> Self {
        (preset.name, preset.options)
    }
}

/// `docs` - docs plugin routing.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DocsOptions {
    /// Sidebar definition file, relative to the site root.
    #[serde(default = "defaults::preset::docs::sidebar_path")]
    #[educe(Default = defaults::preset::docs::sidebar_path())]
    pub sidebar_path: String,

    /// URL prefix docs are served under. `/` serves docs at the site root.
    #[serde(default = "defaults::preset::docs::route_base_path")]
    #[educe(Default = defaults::preset::docs::route_base_path())]
    pub route_base_path: String,
}

/// `theme` - classic theme options.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ThemeOptions {
    /// Stylesheet appended after the theme's own CSS.
    #[serde(default = "defaults::preset::theme::custom_css")]
    #[educe(Default = defaults::preset::theme::custom_css())]
    pub custom_css: String,
}

/// One entry of `plugins`: a bare name or a `[name, options]` pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PluginEntry", into = "PluginEntry")]
pub struct PluginConfig {
    /// Plugin module name.
    pub name: String,

    /// Options passed through to the plugin untouched.
    pub options: toml::Table,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PluginEntry {
    Name(String),
    WithOptions(String, toml::Table),
}

impl From<PluginEntry> for PluginConfig {
    fn from(entry: PluginEntry) -> Self {
        match entry {
            PluginEntry::Name(name) => Self {
                name,
                options: toml::Table::new(),
            },
            PluginEntry::WithOptions(name, options) => Self { name, options },
        }
    }
}

impl From<PluginConfig> for PluginEntry {
    fn from(plugin: PluginConfig) -> Self {
        if plugin.options.is_empty() {
            Self::Name(plugin.name)
        } else {
            Self::WithOptions(plugin.name, plugin.options)
        }
    }
}

impl PresetConfig {
    pub fn is_known(&self) -> bool {
        KNOWN_PRESETS.contains(&self.name.as_str())
    }

    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let field = |name: &str| format!("presets[{index}][1].{name}");
        let options = &self.options;

        if !self.is_known() {
            diag.error_with_hint(
                format!("presets[{index}][0]"),
                format!("unknown preset `{}`", self.name),
                format!("known presets: {}", KNOWN_PRESETS.join(", ")),
            );
        }

        if options.docs.sidebar_path.trim().is_empty() {
            diag.error(field("docs.sidebarPath"), "must not be empty");
        }

        if !options.docs.route_base_path.starts_with('/') {
            diag.error_with_hint(
                field("docs.routeBasePath"),
                format!("`{}` must start with `/`", options.docs.route_base_path),
                "use `/` to serve docs at the site root",
            );
        }

        if options.theme.custom_css.trim().is_empty() {
            diag.error(field("theme.customCss"), "must not be empty");
        }
    }
}

impl PluginConfig {
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(format!("plugins[{index}]"), "plugin name must not be empty");
        }
    }
}
