//! Common CLI utilities shared across all CLI commands.
//!
//! - `CliContext`: configuration, resolved API base and the async runtime
//! - Output helpers: `print_success`, `print_error`, `print_warning`, `print_info`
//! - `prompt_confirm` and the `ConsoleDialogs` built on it

use crate::catalog::HttpCatalogApi;
use crate::config::Config;
use crate::panel::{AdminPanel, Dialogs};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::error;

/// Shared context for CLI commands.
pub struct CliContext {
    pub config: Config,
    pub config_path: PathBuf,
    /// API base after CLI and environment overrides
    pub api_base: String,
    pub runtime: Runtime,
}

impl CliContext {
    pub fn load(api_base_override: Option<&str>) -> Result<Self> {
        let config_path = crate::utils::get_config_path();
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        let api_base = config.effective_api_base(api_base_override);
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        Ok(Self {
            config,
            config_path,
            api_base,
            runtime,
        })
    }

    /// A fresh panel talking to the configured API.
    pub fn panel(&self) -> Result<AdminPanel<HttpCatalogApi>> {
        let api = HttpCatalogApi::new(&self.api_base, self.config.request_timeout())
            .context("Failed to create HTTP client")?;
        Ok(AdminPanel::new(api))
    }
}

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning prefix to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("\u{26a0} {}", msg);
}

pub fn print_info(msg: &str) {
    println!("{}", msg);
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes`/`s`/`sim` is a no.
pub fn prompt_confirm(message: &str) -> Result<bool> {
    print!("{} [y/N]: ", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

/// Alerts go to the terminal; confirmations read stdin unless pre-approved.
pub struct ConsoleDialogs {
    assume_yes: bool,
    alerts: Vec<String>,
}

impl ConsoleDialogs {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            alerts: Vec::new(),
        }
    }

    /// Messages alerted so far
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Dialogs for ConsoleDialogs {
    fn alert(&mut self, message: &str) {
        if message.to_lowercase().contains("sucesso") {
            print_success(message);
        } else {
            print_error(message);
        }
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        prompt_confirm(message).unwrap_or_else(|e| {
            error!("Failed to read confirmation: {}", e);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" Sim "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut dialogs = ConsoleDialogs::new(true);
        assert!(dialogs.confirm("Excluir?"));
        dialogs.alert("Serviço excluído com sucesso!");
        assert_eq!(dialogs.alerts(), ["Serviço excluído com sucesso!"]);
    }
}
