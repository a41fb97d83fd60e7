pub mod files;
pub mod history;
pub mod settings;

pub use files::{
    atomic_write, ensure_data_dir, ensure_dir, get_data_dir, history_file, init_local_data_dir,
    log_dir, read_file, report_file, settings_file,
};
pub use history::{date_key, HistoryStore};
pub use settings::{load_settings, save_settings, AppSettings};
