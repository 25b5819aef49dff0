// Render components of the admin panel TUI

pub mod footer;
pub mod form_panel;
pub mod header;
pub mod help_overlay;
pub mod service_list;

pub use footer::Footer;
pub use form_panel::FormPanel;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use service_list::ServiceList;
