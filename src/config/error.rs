//! Configuration error types.

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(String),

    // No #[from]: the diagnostics already render every message themselves
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "themeConfig.navbar.items[0].sidebarId")
    pub field: String,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected over a whole validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning. Warnings never fail validation.
    pub fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings().is_empty() {
            return;
        }

        crate::log!("warning"; "the site config looks suspicious:");
        for warning in self.warnings() {
            eprintln!("- [{}] {}", warning.field, warning.message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<Self, Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        let errors = self.errors();
        for (i, err) in errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docsite.toml"));

        let serialize_err = ConfigError::Serialize("unsupported value".to_string());
        let display = format!("{serialize_err}");
        assert!(display.contains("unsupported value"));
    }

    #[test]
    fn test_diagnostic_display_with_hint() {
        colored::control::set_override(false);
        let diag = ConfigDiagnostic::new("baseUrl", "must end with `/`")
            .with_hint("use `/Datathon-MedIn/`");
        let display = diag.to_string();
        assert!(display.contains("[baseUrl]"));
        assert!(display.contains("must end with `/`"));
        assert!(display.contains("hint: use `/Datathon-MedIn/`"));
    }

    #[test]
    fn test_diagnostics_counts_errors_only() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.errors().is_empty());

        diag.warn("baseUrl", "looks odd");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        diag.error("title", "must not be empty");
        diag.error_with_hint("url", "must be absolute", "add https://");
        assert!(diag.has_errors());
        assert_eq!(diag.errors().len(), 2);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("add https://"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn("baseUrl", "looks odd");
        let ok = diag.into_result().unwrap();
        assert_eq!(ok.warnings().len(), 1);

        let mut diag = ConfigDiagnostics::new();
        diag.error("title", "must not be empty");
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_diagnostics_display_counts_multiple() {
        colored::control::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error("title", "must not be empty");
        diag.error("i18n.defaultLocale", "`en` is not in `i18n.locales`");
        let display = diag.to_string();
        assert!(display.contains("config validation failed:"));
        assert!(display.contains("[title]"));
        assert!(display.contains("[i18n.defaultLocale]"));
        assert!(display.contains("found 2 errors"));
    }
}
