pub mod layout;
pub mod line_edit;
pub mod paths;

pub use layout::{center_card, create_standard_layout};
pub use line_edit::LineEdit;
pub use paths::{get_cache_dir, get_config_dir, get_config_path, get_home_dir, get_log_path};
