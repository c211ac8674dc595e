use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::types::House;
use crate::error::LoadError;

/// Top-level document: everything lives under `house:`.
#[derive(Deserialize)]
struct Document {
    house: House,
}

/// Parse a description from YAML text.
pub fn parse_house(text: &str) -> Result<House, LoadError> {
    let doc: Document = serde_yaml::from_str(text)?;
    Ok(doc.house)
}

/// Read and parse a description file.
///
/// A missing file maps to `LoadError::NotFound` so callers can report it and
/// stop; every other failure is returned as-is.
pub fn load_house<P: AsRef<Path>>(path: P) -> Result<House, LoadError> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()))
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let house = parse_house(&text)?;
    tracing::debug!(
        path = %path.display(),
        floors = house.floors.len(),
        "loaded house description"
    );
    Ok(house)
}
