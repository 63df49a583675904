//! Shared configuration and the in-memory table model for bizlens.
//!
//! The [`Table`] is loaded once from CSV, mutated in place by a batch pass,
//! and written back out. Its column set only grows.

pub mod app_config;
pub mod columns;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod table;

pub use app_config::AppConfig;
pub use columns::{detect_website_column, export_file_name, EXPORT_FILE_PREFIX};
pub use config::{load_app_config, load_app_config_from_env};
pub use csv_io::{read_table, read_table_from_path, write_table, write_table_to_path};
pub use error::{ConfigError, TableError};
pub use table::{render_cell, RowStatus, StatusCounts, Table, STATUS_COLUMN};
