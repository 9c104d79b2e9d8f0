//! Document loading
//!
//! Both entry points check the extension before touching the filesystem, then
//! open and parse the file, then hand the parsed value to the validators.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

use serde_json::Value;

use crate::config::ReaderConfig;
use crate::error::{MsgramError, Result};
use crate::preconfig::{assemble_preconfig, Preconfiguration};
use crate::sonar::{components_of, validate_sonar_format};
use crate::trace_time;

/// The only accepted file extension
pub const ACCEPTED_EXTENSION: &str = "json";

/// Fail with `InvalidFileType` unless `path` ends in `.json`
pub fn check_file_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == ACCEPTED_EXTENSION => Ok(()),
        _ => Err(MsgramError::InvalidFileType {
            path: path.to_path_buf(),
        }),
    }
}

/// Open `path` for reading, failing with `FileNotFound` when it is absent
pub fn open_existing_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MsgramError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => MsgramError::io_operation("open", path.display(), e),
    })
}

/// Check, open and parse a JSON document
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_json(path: &Path) -> Result<Value> {
    let start = Instant::now();

    check_file_extension(path)?;
    let file = open_existing_file(path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;

    trace_time!(start, "load_json");
    Ok(document)
}

/// Read and validate a pre-configuration file
pub fn read_preconfig(path: &Path, config: &ReaderConfig) -> Result<Preconfiguration> {
    let document = load_json(path)?;
    assemble_preconfig(&document, config)
}

/// Read a Sonar export, validate its shape and return its `components` list
pub fn read_components(path: &Path, config: &ReaderConfig) -> Result<Vec<Value>> {
    let document = load_json(path)?;
    validate_sonar_format(&document, config.key_order)?;

    let components = components_of(&document)?.to_vec();
    tracing::debug!(count = components.len(), "components_read");
    Ok(components)
}
