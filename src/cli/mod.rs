//! Command-line interface: one-shot catalog commands next to the TUI.

mod commands;
mod common;
pub mod completions;

pub use commands::{Cli, Commands};
pub use common::{
    print_error, print_info, print_success, print_warning, prompt_confirm, CliContext,
    ConsoleDialogs,
};
