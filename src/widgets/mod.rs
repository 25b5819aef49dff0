// Reusable UI widgets

pub mod dialog;
pub mod text_input;

pub use dialog::{Dialog, DialogVariant};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
