//! docsite - the site descriptor of the Datathon MedIn documentation.

mod cli;
mod config;
mod init;
mod logger;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, EmitFormat};
use config::{
    ConfigDiagnostics, DeployTarget, SiteConfig, defaults,
    handle::{cfg, init_config},
};
use init::new_config;
use std::{fs, path::Path};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => new_config(&cli.root().join(&cli.config)),
        Commands::Check => {
            load_config(&cli)?;
            check(&cfg())
        }
        Commands::Emit { format, output } => {
            load_config(&cli)?;
            emit(&cfg(), *format, output.as_deref())
        }
        Commands::Target => {
            load_config(&cli)?;
            println!("{}", DeployTarget::resolve(&cfg()));
            Ok(())
        }
    }
}

/// Load the descriptor and publish it for the rest of the run.
fn load_config(cli: &Cli) -> Result<()> {
    init_config(SiteConfig::load(cli)?);
    Ok(())
}

/// Validate `config`, printing warnings. Errors fail with every finding.
fn validate(config: &SiteConfig) -> Result<ConfigDiagnostics> {
    let warnings = config.validate()?;
    warnings.print_warnings();
    Ok(warnings)
}

fn check(config: &SiteConfig) -> Result<()> {
    let warnings = validate(config)?;

    log!("check"; "`{}` is valid ({} warnings)", config.title, warnings.warnings().len());
    log!("check"; "deploys {}", DeployTarget::resolve(config));
    if let Some(classic) = config.preset(defaults::preset::CLASSIC) {
        let docs = &classic.options.docs;
        log!("check"; "docs served at {}", config.permalink(&docs.route_base_path));
    }
    Ok(())
}

/// Validate, then write the descriptor to `output` or stdout.
///
/// Nothing is written when validation fails.
fn emit(config: &SiteConfig, format: EmitFormat, output: Option<&Path>) -> Result<()> {
    validate(config)?;

    let content = config.emit(format)?;
    match output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("emit"; "wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
