//! Deployment target resolution.
//!
//! `organizationName` and `projectName` identify the GitHub repository the
//! generator deploys to. When the site URL is the organization's GitHub
//! Pages domain, the site is a project site served under `/<projectName>/`.

use super::{ConfigDiagnostics, SiteConfig};
use crate::utils::url;
use std::fmt;

/// Where the built site is pushed and served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployTarget {
    /// `https://github.com/<org>/<project>`
    pub repository: String,
    /// Public URL of the site (`url` + `baseUrl`).
    pub site: String,
    /// Whether the site is served from `<org>.github.io`.
    pub github_pages: bool,
}

impl DeployTarget {
    pub fn resolve(config: &SiteConfig) -> Self {
        Self {
            repository: format!(
                "https://github.com/{}/{}",
                config.organization_name, config.project_name
            ),
            site: config.site_root(),
            github_pages: pages_host(config).is_some(),
        }
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.repository, self.site)?;
        if self.github_pages {
            write!(f, " (github pages)")?;
        }
        Ok(())
    }
}

/// `<org>.github.io` when `url` points at the organization's pages domain.
fn pages_host(config: &SiteConfig) -> Option<String> {
    let host = url::host(&config.url)?;
    let expected = format!("{}.github.io", config.organization_name.to_ascii_lowercase());
    (host == expected).then_some(host)
}

pub(super) fn validate(config: &SiteConfig, diag: &mut ConfigDiagnostics) {
    for (field, value) in [
        ("organizationName", &config.organization_name),
        ("projectName", &config.project_name),
    ] {
        if value.trim().is_empty() {
            diag.error(field, "must not be empty");
        } else if value.contains('/') || value.contains(char::is_whitespace) {
            diag.error_with_hint(
                field,
                format!("`{value}` is not a GitHub name"),
                "names cannot contain `/` or whitespace",
            );
        }
    }

    // Project sites on <org>.github.io are served under /<project>/,
    // except the user/org site repository itself.
    if let Some(host) = pages_host(config)
        && !config.project_name.eq_ignore_ascii_case(&host)
    {
        let expected = format!("/{}/", config.project_name);
        if config.base_url != expected {
            diag.warn(
                "baseUrl",
                format!(
                    "`{}` differs from `{expected}`, the path GitHub Pages serves `{}` under",
                    config.base_url, config.project_name
                ),
            );
        }
    }
}
