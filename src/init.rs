//! Site initialization module.
//!
//! Writes the built-in descriptor to `docsite.toml` so it can be edited.

use crate::{cli::EmitFormat, config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Header written above the generated config.
const HEADER: &str = "\
# Site descriptor for the documentation generator.
# `{year}` in themeConfig.footer.copyright expands to the current year.

";

/// Write the built-in descriptor to `path`, refusing to overwrite.
pub fn new_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = SiteConfig::default().emit(EmitFormat::Toml)?;
    fs::write(path, format!("{HEADER}{content}"))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
