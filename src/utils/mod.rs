pub mod layout;
pub mod number;
pub mod path;
pub mod text_input;

pub use layout::center_popup;
pub use number::{parse_leading_float, parse_leading_int};
pub use path::{expand_path, get_config_dir, get_config_path, get_log_dir, split_path_list};
pub use text_input::TextInput;
