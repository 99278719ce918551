//! Service adapters: OS specific implementations (filesystem locations, settings IO).

pub mod paths;
pub mod settings;

pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings_from,
};
