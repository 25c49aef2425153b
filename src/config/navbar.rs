//! `[themeConfig.navbar]` configuration.
//!
//! Nav items come in two shapes, told apart by their keys:
//!
//! ```toml
//! [[themeConfig.navbar.items]]
//! type = "docSidebar"
//! sidebarId = "tutorialSidebar"
//! position = "left"
//! label = "Documentação"
//!
//! [[themeConfig.navbar.items]]
//! href = "https://github.com/MedIn-Inteli/Datathon-MedIn"
//! label = "GitHub"
//! position = "right"
//! ```

use super::{ConfigDiagnostics, defaults};
use crate::utils::url;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[themeConfig.navbar]` section.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavbarConfig {
    /// Text next to the logo.
    #[serde(default = "defaults::theme::navbar::title")]
    #[educe(Default = defaults::theme::navbar::title())]
    pub title: String,

    #[serde(default)]
    pub logo: LogoConfig,

    /// Items in display order.
    #[serde(default = "defaults::theme::navbar::items")]
    #[educe(Default = defaults::theme::navbar::items())]
    pub items: Vec<NavItem>,
}

/// `[themeConfig.navbar.logo]`
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    #[serde(default = "defaults::theme::navbar::logo_alt")]
    #[educe(Default = defaults::theme::navbar::logo_alt())]
    pub alt: String,

    /// Image path, relative to the static directory.
    #[serde(default = "defaults::theme::navbar::logo_src")]
    #[educe(Default = defaults::theme::navbar::logo_src())]
    pub src: String,
}

/// A navbar entry: a link to a docs sidebar or to an external page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    Sidebar(SidebarNavItem),
    External(ExternalNavItem),
}

/// Discriminator carried by sidebar items as `type = "docSidebar"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SidebarItemKind {
    #[default]
    #[serde(rename = "docSidebar")]
    DocSidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SidebarNavItem {
    #[serde(rename = "type")]
    pub kind: SidebarItemKind,
    /// Id of a sidebar declared in the sidebar file.
    pub sidebar_id: String,
    #[serde(default)]
    pub position: NavPosition,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalNavItem {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub position: NavPosition,
}

/// Side of the navbar an item is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

impl SidebarNavItem {
    pub fn new(sidebar_id: impl Into<String>, position: NavPosition, label: impl Into<String>) -> Self {
        Self {
            kind: SidebarItemKind::DocSidebar,
            sidebar_id: sidebar_id.into(),
            position,
            label: label.into(),
        }
    }
}

impl ExternalNavItem {
    pub fn new(href: impl Into<String>, label: impl Into<String>, position: NavPosition) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            position,
        }
    }
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Sidebar(item) => &item.label,
            Self::External(item) => &item.label,
        }
    }
}

impl NavbarConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const FIELD: &str = "themeConfig.navbar";

        if self.logo.src.trim().is_empty() {
            diag.error(format!("{FIELD}.logo.src"), "must not be empty");
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.label().trim().is_empty() {
                diag.error(format!("{FIELD}.items[{i}].label"), "must not be empty");
            }
            match item {
                NavItem::Sidebar(item) if item.sidebar_id.trim().is_empty() => {
                    diag.error_with_hint(
                        format!("{FIELD}.items[{i}].sidebarId"),
                        "sidebar items need a sidebar id",
                        "use an id declared in the sidebar file, e.g. `tutorialSidebar`",
                    );
                }
                NavItem::External(item) if !url::is_absolute_url(&item.href) => {
                    diag.error(
                        format!("{FIELD}.items[{i}].href"),
                        format!("`{}` is not an absolute http(s) URL", item.href),
                    );
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_navbar_defaults() {
        let navbar = NavbarConfig::default();
        assert_eq!(navbar.title, "Datathon MedIn");
        assert_eq!(navbar.logo.alt, "MedIn Logo");
        assert_eq!(navbar.logo.src, "img/logo_medin.png");

        let [NavItem::Sidebar(docs), NavItem::External(github)] = navbar.items.as_slice() else {
            panic!("unexpected navbar items: {:?}", navbar.items);
        };
        assert_eq!(docs.sidebar_id, "tutorialSidebar");
        assert_eq!(docs.position, NavPosition::Left);
        assert_eq!(docs.label, "Documentação");
        assert_eq!(github.href, "https://github.com/MedIn-Inteli/Datathon-MedIn");
        assert_eq!(github.position, NavPosition::Right);
    }

    #[test]
    fn test_default_items_are_well_formed() {
        for item in NavbarConfig::default().items {
            match item {
                NavItem::Sidebar(item) => assert!(!item.sidebar_id.is_empty()),
                NavItem::External(item) => assert!(url::is_absolute_url(&item.href)),
            }
        }
    }

    #[test]
    fn test_parse_items() {
        let config = r#"
            [[themeConfig.navbar.items]]
            type = "docSidebar"
            sidebarId = "apiSidebar"
            label = "API"

            [[themeConfig.navbar.items]]
            href = "https://medin.org.br"
            label = "MedIn"
            position = "right"
        "#;
        let config = SiteConfig::from_str(config).unwrap();
        let items = &config.theme_config.navbar.items;
        assert_eq!(items.len(), 2);
        assert!(matches!(
            &items[0],
            NavItem::Sidebar(i) if i.sidebar_id == "apiSidebar" && i.position == NavPosition::Left
        ));
        assert!(matches!(&items[1], NavItem::External(i) if i.href == "https://medin.org.br"));
        assert_eq!(items[1].label(), "MedIn");
    }

    #[test]
    fn test_item_with_sidebar_and_href_rejected() {
        let config = r#"
            [[themeConfig.navbar.items]]
            type = "docSidebar"
            sidebarId = "tutorialSidebar"
            href = "https://example.com"
            label = "Both"
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }

    #[test]
    fn test_unknown_item_type_rejected() {
        let config = r#"
            [[themeConfig.navbar.items]]
            type = "dropdown"
            label = "More"
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }

    #[test]
    fn test_validate_items() {
        let navbar = NavbarConfig {
            items: vec![
                NavItem::Sidebar(SidebarNavItem::new("", NavPosition::Left, "Docs")),
                NavItem::External(ExternalNavItem::new("github.com/x", "GitHub", NavPosition::Right)),
                NavItem::External(ExternalNavItem::new("https://x.dev", "", NavPosition::Right)),
            ],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "themeConfig.navbar.items[0].sidebarId",
                "themeConfig.navbar.items[1].href",
                "themeConfig.navbar.items[2].label",
            ]
        );
    }
}
