//! catalog-admin - terminal admin panel for a services catalog
//!
//! Lists, creates, edits and deletes the services of a `/servicos` REST
//! collection, attaching images as inline base64 data URIs.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod encoding;
pub mod keymap;
pub mod panel;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

/// File name of the log written under [`utils::get_log_dir`]
pub const LOG_FILE_NAME: &str = "catalog-admin.log";

pub use catalog::{ApiError, CatalogApi, HttpCatalogApi, ImageRef, Service, ServicePayload};
pub use config::Config;
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
pub use panel::{AdminPanel, Dialogs, Outcome};
