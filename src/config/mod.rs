//! JSON configuration documents.
//!
//! Documents are parsed with Serde, then validated before they are turned into runtime values.

pub(crate) mod snap;
pub(crate) mod timeline;

use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{MarqueeError, MarqueeResult};

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    r: impl std::io::Read,
    what: &str,
) -> MarqueeResult<T> {
    serde_json::from_reader(r).map_err(|e| MarqueeError::serde(format!("parse {what} JSON: {e}")))
}

pub(crate) fn read_json_path<T: serde::de::DeserializeOwned>(
    path: &Path,
    what: &str,
) -> MarqueeResult<T> {
    let f = File::open(path).map_err(|e| {
        MarqueeError::validation(format!("open {what} JSON '{}': {e}", path.display()))
    })?;
    read_json(BufReader::new(f), what)
}
