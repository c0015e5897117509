pub mod environment;
pub mod logging;
pub mod paths;
pub mod terminal;

pub use environment::get_history_path;
pub use logging::init_logging;
pub use paths::{format_path_with_tilde, validate_file_size};
pub use terminal::strip_ansi_codes;
