//! `[themeConfig.footer]` configuration.
//!
//! # Example
//! ```toml
//! [themeConfig.footer]
//! style = "dark"
//! copyright = "Copyright © {year} Liga MedIn. Built with Docusaurus."
//!
//! [[themeConfig.footer.links]]
//! title = "Documentação"
//! items = [
//!     { label = "Introdução", to = "/intro" },
//!     { label = "GitHub", href = "https://github.com/MedIn-Inteli/Datathon-MedIn" },
//! ]
//! ```

use super::{ConfigDiagnostics, defaults};
use crate::utils::url;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the calendar year when the config is rendered.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// `[themeConfig.footer]` section.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FooterConfig {
    #[serde(default = "defaults::theme::footer::style")]
    #[educe(Default = defaults::theme::footer::style())]
    pub style: FooterStyle,

    /// Link columns in display order.
    #[serde(default = "defaults::theme::footer::links")]
    #[educe(Default = defaults::theme::footer::links())]
    pub links: Vec<FooterColumn>,

    /// Copyright line. `{year}` expands to the year of construction.
    #[serde(default = "defaults::theme::footer::copyright")]
    #[educe(Default = defaults::theme::footer::copyright())]
    pub copyright: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterItem>,
}

/// A footer link. It targets either a site route (`to`) or an external
/// URL (`href`). Items carrying both keys or neither fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FooterItem {
    Route(RouteLink),
    External(ExternalLink),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteLink {
    pub label: String,
    /// Route relative to the base URL, e.g. `/intro`.
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

/// Where a footer item points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Route(&'a str),
    Href(&'a str),
}

impl FooterColumn {
    pub fn new(title: impl Into<String>, items: Vec<FooterItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

impl FooterItem {
    pub fn route(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Route(RouteLink {
            label: label.into(),
            to: to.into(),
        })
    }

    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::External(ExternalLink {
            label: label.into(),
            href: href.into(),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Route(link) => &link.label,
            Self::External(link) => &link.label,
        }
    }

    pub fn target(&self) -> LinkTarget<'_> {
        match self {
            Self::Route(link) => LinkTarget::Route(&link.to),
            Self::External(link) => LinkTarget::Href(&link.href),
        }
    }
}

impl FooterConfig {
    /// Expand `{year}` in the copyright line.
    pub fn render_copyright(&mut self, year: i32) {
        self.copyright = self
            .copyright
            .replace(YEAR_PLACEHOLDER, &year.to_string());
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const FIELD: &str = "themeConfig.footer";

        for (i, column) in self.links.iter().enumerate() {
            if column.title.trim().is_empty() {
                diag.error(format!("{FIELD}.links[{i}].title"), "must not be empty");
            }
            if column.items.is_empty() {
                diag.warn(format!("{FIELD}.links[{i}]"), "column has no items");
            }

            for (j, item) in column.items.iter().enumerate() {
                let field = format!("{FIELD}.links[{i}].items[{j}]");
                if item.label().trim().is_empty() {
                    diag.error(format!("{field}.label"), "must not be empty");
                }
                match item.target() {
                    LinkTarget::Route(to) if !to.starts_with('/') => {
                        diag.error_with_hint(
                            format!("{field}.to"),
                            format!("route `{to}` must start with `/`"),
                            "use `href` for links that leave the site",
                        );
                    }
                    LinkTarget::Href(href) if !url::is_absolute_url(href) => {
                        diag.error(
                            format!("{field}.href"),
                            format!("`{href}` is not an absolute http(s) URL"),
                        );
                    }
                    _ => {}
                }
            }
        }

        if self.copyright.contains(YEAR_PLACEHOLDER) {
            diag.error(
                format!("{FIELD}.copyright"),
                "`{year}` was not expanded; the config was never rendered",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_footer_defaults() {
        let footer = FooterConfig::default();
        assert_eq!(footer.style, FooterStyle::Dark);

        let titles: Vec<_> = footer.links.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Documentação", "Liga MedIn", "Mais"]);

        assert_eq!(
            footer.links[0].items[1].target(),
            LinkTarget::Route("/category/tutoriais")
        );
        assert_eq!(
            footer.links[1].items[1].target(),
            LinkTarget::Href("https://instagram.com/med.in")
        );
        assert_eq!(footer.links[2].items[0].label(), "GitHub");
    }

    #[test]
    fn test_every_default_item_has_exactly_one_target() {
        for item in FooterConfig::default().links.iter().flat_map(|c| &c.items) {
            match item.target() {
                LinkTarget::Route(to) => assert!(to.starts_with('/')),
                LinkTarget::Href(href) => assert!(url::is_absolute_url(href)),
            }
        }
    }

    #[test]
    fn test_item_with_to_and_href_rejected() {
        let config = r#"
            [[themeConfig.footer.links]]
            title = "Broken"
            items = [{ label = "Both", to = "/intro", href = "https://medin.org.br" }]
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }

    #[test]
    fn test_item_without_target_rejected() {
        let config = r#"
            [[themeConfig.footer.links]]
            title = "Broken"
            items = [{ label = "Nowhere" }]
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }

    #[test]
    fn test_parse_footer() {
        let config = r#"
            [themeConfig.footer]
            style = "light"
            copyright = "© {year} Someone"

            [[themeConfig.footer.links]]
            title = "Docs"
            items = [
                { label = "Intro", to = "/intro" },
                { label = "Site", href = "https://medin.org.br" },
            ]
        "#;
        let config = SiteConfig::from_str(config).unwrap();
        let footer = &config.theme_config.footer;
        assert_eq!(footer.style, FooterStyle::Light);
        assert_eq!(footer.links.len(), 1);
        assert_eq!(footer.links[0].items[0], FooterItem::route("Intro", "/intro"));
        assert_eq!(
            footer.links[0].items[1],
            FooterItem::external("Site", "https://medin.org.br")
        );
        assert_eq!(footer.copyright, "© {year} Someone");
    }

    #[test]
    fn test_render_copyright() {
        let mut footer = FooterConfig::default();
        footer.render_copyright(2025);
        assert_eq!(
            footer.copyright,
            "Copyright © 2025 Liga MedIn. Built with Docusaurus."
        );

        // Already rendered, nothing left to expand
        footer.render_copyright(2030);
        assert!(footer.copyright.contains("2025"));
    }

    #[test]
    fn test_validate_footer() {
        let footer = FooterConfig {
            links: vec![
                FooterColumn::new(
                    "",
                    vec![
                        FooterItem::route("Intro", "intro"),
                        FooterItem::external("Site", "medin.org.br"),
                    ],
                ),
                FooterColumn::new("Empty", vec![]),
            ],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "themeConfig.footer.links[0].title",
                "themeConfig.footer.links[0].items[0].to",
                "themeConfig.footer.links[0].items[1].href",
                "themeConfig.footer.copyright",
            ]
        );
        assert_eq!(diag.warnings()[0].field, "themeConfig.footer.links[1]");
    }
}
