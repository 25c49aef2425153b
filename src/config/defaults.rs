//! Default values for configuration fields.
//!
//! These are the literal values of the built-in site descriptor. serde uses
//! them for fields missing from `docsite.toml`, and educe uses them for
//! `SiteConfig::default()`.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

/// Repository every "GitHub" link points at.
pub const REPOSITORY_URL: &str = "https://github.com/MedIn-Inteli/Datathon-MedIn";

/// Title shared by the site and the navbar.
pub const SITE_TITLE: &str = "Datathon MedIn";

// ============================================================================
// Root Defaults
// ============================================================================

pub mod site {
    use super::super::BrokenLinkPolicy;
    use std::collections::BTreeMap;

    pub fn title() -> String {
        super::SITE_TITLE.into()
    }

    pub fn tagline() -> String {
        "Heart Disease Prediction Challenge".into()
    }

    pub fn favicon() -> String {
        "img/favicon.ico".into()
    }

    pub fn future() -> BTreeMap<String, bool> {
        BTreeMap::from([("v4".into(), true)])
    }

    pub fn url() -> String {
        "https://medin-inteli.github.io".into()
    }

    pub fn base_url() -> String {
        "/Datathon-MedIn/".into()
    }

    pub fn organization_name() -> String {
        "MedIn-Inteli".into()
    }

    pub fn project_name() -> String {
        "Datathon-MedIn".into()
    }

    pub fn on_broken_links() -> BrokenLinkPolicy {
        BrokenLinkPolicy::Warn
    }
}

// ============================================================================
// [i18n] Defaults
// ============================================================================

pub mod i18n {
    pub fn default_locale() -> String {
        "pt".into()
    }

    pub fn locales() -> Vec<String> {
        vec![default_locale()]
    }
}

// ============================================================================
// presets Defaults
// ============================================================================

pub mod preset {
    use super::super::PresetConfig;

    pub const CLASSIC: &str = "classic";

    pub fn presets() -> Vec<PresetConfig> {
        vec![PresetConfig::default()]
    }

    pub fn name() -> String {
        CLASSIC.into()
    }

    pub mod docs {
        pub fn sidebar_path() -> String {
            "./sidebars.ts".into()
        }

        pub fn route_base_path() -> String {
            "/".into()
        }
    }

    pub mod theme {
        pub fn custom_css() -> String {
            "./src/css/custom.css".into()
        }
    }
}

// ============================================================================
// [themeConfig] Defaults
// ============================================================================

pub mod theme {
    use super::super::PrismTheme;

    pub fn image() -> String {
        "img/docusaurus-social-card.jpg".into()
    }

    pub fn prism_light() -> PrismTheme {
        PrismTheme::Github
    }

    pub fn prism_dark() -> PrismTheme {
        PrismTheme::Dracula
    }

    pub mod navbar {
        use super::super::super::{ExternalNavItem, NavItem, NavPosition, SidebarNavItem};

        pub fn title() -> String {
            super::super::SITE_TITLE.into()
        }

        pub fn logo_alt() -> String {
            "MedIn Logo".into()
        }

        pub fn logo_src() -> String {
            "img/logo_medin.png".into()
        }

        pub fn items() -> Vec<NavItem> {
            vec![
                NavItem::Sidebar(SidebarNavItem::new(
                    "tutorialSidebar",
                    NavPosition::Left,
                    "Documentação",
                )),
                NavItem::External(ExternalNavItem::new(
                    super::super::REPOSITORY_URL,
                    "GitHub",
                    NavPosition::Right,
                )),
            ]
        }
    }

    pub mod footer {
        use super::super::super::{FooterColumn, FooterItem, FooterStyle};

        pub fn style() -> FooterStyle {
            FooterStyle::Dark
        }

        pub fn links() -> Vec<FooterColumn> {
            vec![
                FooterColumn::new(
                    "Documentação",
                    vec![
                        FooterItem::route("Introdução", "/intro"),
                        FooterItem::route("Tutoriais", "/category/tutoriais"),
                    ],
                ),
                FooterColumn::new(
                    "Liga MedIn",
                    vec![
                        FooterItem::external("Site Oficial", "https://medin.org.br"),
                        FooterItem::external("Instagram", "https://instagram.com/med.in"),
                    ],
                ),
                FooterColumn::new(
                    "Mais",
                    vec![FooterItem::external("GitHub", super::super::REPOSITORY_URL)],
                ),
            ]
        }

        pub fn copyright() -> String {
            "Copyright © {year} Liga MedIn. Built with Docusaurus.".into()
        }
    }
}
