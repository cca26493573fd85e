// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{InjuryCatalog, InjuryRecord};

const CATALOG_FILENAME: &str = "injuries.json";

/// Reads the injuries document from disk.
///
/// The on-disk format is a single JSON array of record objects. Unknown
/// fields are ignored; `steps`, `image` and `icon` default to empty/absent
/// when missing. A record without the required `name` aborts the load.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional location used by the desktop app (`data/injuries.json`
    /// relative to the working directory).
    pub fn default_location() -> Self {
        Self::new(Path::new("data").join(CATALOG_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<InjuryCatalog, StoreError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        parse_catalog(&self.path, &text)
    }
}

/// Parses an injuries document already in memory. `path` is used for error
/// context only.
pub fn parse_catalog(path: &Path, text: &str) -> Result<InjuryCatalog, StoreError> {
    let raw: Vec<InjuryRecordJson> = serde_json::from_str(text)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, record) in raw.into_iter().enumerate() {
        records.push(record_from_json(path, index, record)?);
    }
    Ok(InjuryCatalog::new(records))
}

#[derive(Debug, Clone, Deserialize)]
struct InjuryRecordJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

fn record_from_json(
    path: &Path,
    index: usize,
    raw: InjuryRecordJson,
) -> Result<InjuryRecord, StoreError> {
    let Some(name) = raw.name else {
        return Err(StoreError::MissingName { path: path.to_path_buf(), index });
    };
    let mut record = InjuryRecord::new(name, raw.steps);
    record.set_image(raw.image);
    record.set_icon(raw.icon);
    Ok(record)
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// The document is not a JSON array of record objects, or a field has the
    /// wrong type (including a non-string `name`).
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A record is missing the required `name` field.
    MissingName {
        path: PathBuf,
        index: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::MissingName { path, index } => {
                write!(f, "record {index} in {path:?} has no name")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::MissingName { .. } => None,
        }
    }
}
