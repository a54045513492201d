/*
 * Copyright (c) 2024 Andrew Brower.
 * This file is part of Chemdata.
 *
 * Chemdata is free software: you can redistribute it and/or
 * modify it under the terms of the GNU Affero General Public
 * License as published by the Free Software Foundation, either
 * version 3 of the License, or (at your option) any later version.
 *
 * Chemdata is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public
 * License along with Chemdata. If not, see
 * <https://www.gnu.org/licenses/>.
 */

//! Reading and writing JSON data files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value};

/// A recipe file as an ordered JSON object.
pub type Document = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Unable to access {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("{0} is not valid JSON: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
    #[error("{0} does not hold a JSON object")]
    NotAnObject(PathBuf),
    #[error("Unable to serialize {0}: {1}")]
    Serialize(PathBuf, #[source] serde_json::Error),
    #[error("{0} was already written in this run")]
    Duplicate(PathBuf),
}

/// Reads `path` as a JSON object, keeping key order.
pub fn read_json(path: &Path) -> Result<Document, DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| DocumentError::Io(path.to_owned(), e))?;
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(doc)) => Ok(doc),
        Ok(_) => Err(DocumentError::NotAnObject(path.to_owned())),
        Err(e) => Err(DocumentError::Parse(path.to_owned(), e)),
    }
}

/// Serializes `value` the way every file in the resource tree is laid out:
/// two space indents and a trailing newline.
pub fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Writes `value` to `path`, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DocumentError> {
    let text = to_pretty(value).map_err(|e| DocumentError::Serialize(path.to_owned(), e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DocumentError::Io(parent.to_owned(), e))?;
    }

    fs::write(path, text).map_err(|e| DocumentError::Io(path.to_owned(), e))
}

/// All `.json` files below `dir`, sorted by path.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), DocumentError> {
    let entries = fs::read_dir(dir).map_err(|e| DocumentError::Io(dir.to_owned(), e))?;

    for entry in entries {
        let path = entry
            .map_err(|e| DocumentError::Io(dir.to_owned(), e))?
            .path();

        if path.is_dir() {
            collect(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    Ok(())
}
