//! `[themeConfig]` section configuration.
//!
//! Everything the classic theme reads at render time: social card, color
//! mode, navbar, footer and the code-block highlighting themes.

use super::{ConfigDiagnostics, FooterConfig, NavbarConfig, defaults};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `[themeConfig]` section.
///
/// # Example
/// ```toml
/// [themeConfig]
/// image = "img/docusaurus-social-card.jpg"
///
/// [themeConfig.colorMode]
/// respectPrefersColorScheme = true
///
/// [themeConfig.prism]
/// theme = "github"
/// darkTheme = "dracula"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Social card image used for `og:image`.
    #[serde(default = "defaults::theme::image")]
    #[educe(Default = defaults::theme::image())]
    pub image: String,

    #[serde(default)]
    pub color_mode: ColorModeConfig,

    #[serde(default)]
    pub navbar: NavbarConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub prism: PrismConfig,
}

/// `[themeConfig.colorMode]`
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ColorModeConfig {
    /// Mode used before the visitor picks one.
    #[serde(default)]
    pub default_mode: ColorMode,

    /// Hide the light/dark switch.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub disable_switch: bool,

    /// Follow the `prefers-color-scheme` media query.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub respect_prefers_color_scheme: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// `[themeConfig.prism]` - light/dark highlighting theme pair.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PrismConfig {
    #[serde(default = "defaults::theme::prism_light")]
    #[educe(Default = defaults::theme::prism_light())]
    pub theme: PrismTheme,

    #[serde(default = "defaults::theme::prism_dark")]
    #[educe(Default = defaults::theme::prism_dark())]
    pub dark_theme: PrismTheme,
}

/// Themes bundled with the Prism renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrismTheme {
    Dracula,
    DuotoneDark,
    DuotoneLight,
    Github,
    GruvboxMaterialDark,
    GruvboxMaterialLight,
    JettwaveDark,
    JettwaveLight,
    NightOwl,
    NightOwlLight,
    OceanicNext,
    Okaidia,
    OneDark,
    OneLight,
    Palenight,
    ShadesOfPurple,
    Synthwave84,
    Ultramin,
    VsDark,
    VsLight,
}

impl PrismTheme {
    /// Whether the theme has a dark background.
    pub const fn is_dark(self) -> bool {
        matches!(
            self,
            Self::Dracula
                | Self::DuotoneDark
                | Self::GruvboxMaterialDark
                | Self::JettwaveDark
                | Self::NightOwl
                | Self::OceanicNext
                | Self::Okaidia
                | Self::OneDark
                | Self::Palenight
                | Self::ShadesOfPurple
                | Self::Synthwave84
                | Self::VsDark
        )
    }
}

/// Formats the name used in config files, e.g. `nightOwl`.
impl fmt::Display for PrismTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.serialize(f)
    }
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.image.trim().is_empty() {
            diag.error("themeConfig.image", "must not be empty");
        }

        if self.prism.theme.is_dark() {
            diag.warn(
                "themeConfig.prism.theme",
                format!("`{}` is a dark theme used for light mode", self.prism.theme),
            );
        }
        if !self.prism.dark_theme.is_dark() {
            diag.warn(
                "themeConfig.prism.darkTheme",
                format!("`{}` is a light theme used for dark mode", self.prism.dark_theme),
            );
        }

        self.navbar.validate(diag);
        self.footer.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.image, "img/docusaurus-social-card.jpg");
        assert!(theme.color_mode.respect_prefers_color_scheme);
        assert!(!theme.color_mode.disable_switch);
        assert_eq!(theme.color_mode.default_mode, ColorMode::Light);
        assert_eq!(theme.prism.theme, PrismTheme::Github);
        assert_eq!(theme.prism.dark_theme, PrismTheme::Dracula);
    }

    #[test]
    fn test_prism_names() {
        let config = r#"
            [themeConfig.prism]
            theme = "vsLight"
            darkTheme = "nightOwl"
        "#;
        let config = SiteConfig::from_str(config).unwrap();
        assert_eq!(config.theme_config.prism.theme, PrismTheme::VsLight);
        assert_eq!(config.theme_config.prism.dark_theme, PrismTheme::NightOwl);
    }

    #[test]
    fn test_unknown_prism_theme_rejected() {
        let config = r#"
            [themeConfig.prism]
            theme = "solarized"
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }

    #[test]
    fn test_color_mode_override() {
        let config = r#"
            [themeConfig.colorMode]
            defaultMode = "dark"
            respectPrefersColorScheme = false
        "#;
        let config = SiteConfig::from_str(config).unwrap();
        let mode = &config.theme_config.color_mode;
        assert_eq!(mode.default_mode, ColorMode::Dark);
        assert!(!mode.respect_prefers_color_scheme);
    }

    #[test]
    fn test_swapped_prism_themes_warn() {
        let mut theme = ThemeConfig::default();
        theme.footer.render_copyright(2025);
        theme.prism = PrismConfig {
            theme: PrismTheme::Dracula,
            dark_theme: PrismTheme::Github,
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(!diag.has_errors());
        let fields: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, ["themeConfig.prism.theme", "themeConfig.prism.darkTheme"]);
        assert!(diag.warnings()[0].message.starts_with("`dracula`"));
        assert!(diag.warnings()[1].message.starts_with("`github`"));
    }

    #[test]
    fn test_prism_theme_display_matches_config_name() {
        assert_eq!(PrismTheme::NightOwlLight.to_string(), "nightOwlLight");
        assert_eq!(PrismTheme::Synthwave84.to_string(), "synthwave84");
        assert_eq!(PrismTheme::VsDark.to_string(), "vsDark");
    }
}
