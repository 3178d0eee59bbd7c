//! Data loading and external game content
//!
//! The XP table can be overridden from a RON file so a changed curve does not
//! need a rebuild.

pub mod loader;

pub use loader::{export_table, load_table_file, load_xp_table, TableError, DEFAULT_TABLE_PATH};
