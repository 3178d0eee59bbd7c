//! RON data loader
//!
//! Loads the XP table from an external RON file, with fallback to the
//! built-in curve.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ron::ser::PrettyConfig;
use thiserror::Error;

use crate::progression::{InvalidTable, XpTable};

/// Where a table is looked for when no path is given
pub const DEFAULT_TABLE_PATH: &str = "assets/data/xp_table.ron";

/// Errors reading or writing an XP table file
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize table: {0}")]
    Serialize(#[from] ron::Error),
    #[error("{path} is not a usable XP table: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidTable,
    },
}

/// Read and validate a table file
pub fn load_table_file(path: &Path) -> Result<XpTable, TableError> {
    let content = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let thresholds: Vec<u32> = ron::from_str(&content).map_err(|source| TableError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    XpTable::new(&thresholds).map_err(|source| TableError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the XP table for this run.
///
/// An explicit path wins, then [`DEFAULT_TABLE_PATH`] if it exists, then the
/// built-in curve. Unusable files are logged and skipped.
pub fn load_xp_table(explicit: Option<&Path>) -> XpTable {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_TABLE_PATH);
            if !default.exists() {
                log::info!("Using built-in XP table");
                return XpTable::default();
            }
            default
        }
    };

    match load_table_file(path) {
        Ok(table) => {
            log::info!("XP table loaded from {:?}", path);
            table
        }
        Err(e) => {
            log::warn!("{}, using built-in XP table", e);
            XpTable::default()
        }
    }
}

/// Write a table as RON so it can be edited and loaded back
pub fn export_table(table: &XpTable, path: &Path) -> Result<(), TableError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| TableError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let config = PrettyConfig::default().compact_arrays(true);
    let ron = ron::ser::to_string_pretty(table.thresholds(), config)?;
    fs::write(path, ron).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("XP table exported to {:?}", path);
    Ok(())
}
