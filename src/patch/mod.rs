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

//! In-place normalization of recipe files that are already on disk.
//!
//! A [`Fix`] states what a document should look like. Running a pass only
//! touches files that do not look like that yet, so a pass can be repeated
//! freely.

mod audit;
mod fixes;
mod prune;

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    document::{json_files, read_json, write_json, Document, DocumentError},
    recipe::MachineType,
};

pub use audit::audit;
pub use fixes::FixName;
pub use prune::prune_file;

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Unexpected document shape: {0}")]
    Shape(String),
    #[error("{fix} did not take effect")]
    Postcondition { fix: &'static str },
}

/// A single normalization of a recipe document.
pub trait Fix: Sync {
    fn name(&self) -> &'static str;

    /// Documents of other types are left alone.
    fn target(&self) -> MachineType {
        MachineType::Dissolution
    }

    /// Rejects documents this fix cannot make sense of.
    fn check(&self, _doc: &Document) -> Result<(), PatchError> {
        Ok(())
    }

    /// Whether `doc` already looks the way this fix wants it to.
    fn satisfied(&self, doc: &Document) -> bool;

    fn apply(&self, doc: &mut Document);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Modified,
    Unchanged,
    /// Not a document any of the fixes target.
    Ignored,
    Removed,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Modified => write!(f, "modified"),
            Outcome::Unchanged => write!(f, "unchanged"),
            Outcome::Ignored => write!(f, "ignored"),
            Outcome::Removed => write!(f, "removed"),
        }
    }
}

pub fn doc_type(doc: &Document) -> Option<&str> {
    doc.get("type").and_then(Value::as_str)
}

/// Applies `fixes` in order, each only when its target matches and it is not
/// already satisfied.
pub fn patch_document(doc: &mut Document, fixes: &[&dyn Fix]) -> Result<Outcome, PatchError> {
    let mut outcome = Outcome::Ignored;

    for fix in fixes {
        if doc_type(doc) != Some(fix.target().id()) {
            continue;
        }

        fix.check(doc)?;
        if fix.satisfied(doc) {
            if outcome == Outcome::Ignored {
                outcome = Outcome::Unchanged;
            }
            continue;
        }

        fix.apply(doc);
        if !fix.satisfied(doc) {
            return Err(PatchError::Postcondition { fix: fix.name() });
        }

        trace!("Applied {}", fix.name());
        outcome = Outcome::Modified;
    }

    Ok(outcome)
}

/// Patches the file at `path`, writing it back only if something changed.
pub fn patch_file(path: &Path, fixes: &[&dyn Fix], dry_run: bool) -> Result<Outcome, PatchError> {
    let mut doc = read_json(path)?;
    let outcome = patch_document(&mut doc, fixes)?;

    if outcome == Outcome::Modified && !dry_run {
        write_json(path, &doc)?;
    }

    Ok(outcome)
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<Outcome, PatchError>,
}

#[derive(Debug, Default)]
pub struct PassReport {
    pub files: Vec<FileReport>,
}

impl PassReport {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, Ok(o) if o == outcome))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.result.is_err())
    }

    pub fn log(&self, name: &str) {
        info!(
            "{name}: {} files, {} modified, {} removed, {} unchanged, {} ignored, {} failed",
            self.files.len(),
            self.count(Outcome::Modified),
            self.count(Outcome::Removed),
            self.count(Outcome::Unchanged),
            self.count(Outcome::Ignored),
            self.failures().count()
        );

        for failure in self.failures() {
            if let Err(why) = &failure.result {
                warn!("  failed {}: {why}", failure.path.display());
            }
        }
    }
}

/// Runs `f` over every JSON file below `dir`. A failing file is logged and
/// recorded, the rest of the pass still runs.
pub fn run_pass<F>(dir: &Path, mut f: F) -> Result<PassReport, DocumentError>
where
    F: FnMut(&Path) -> Result<Outcome, PatchError>,
{
    if !dir.is_dir() {
        warn!("{} does not exist, nothing to do", dir.display());
        return Ok(PassReport::default());
    }

    let mut report = PassReport::default();
    for path in json_files(dir)? {
        let result = f(&path);
        match &result {
            Ok(outcome @ (Outcome::Modified | Outcome::Removed)) => {
                info!("{}: {outcome}", path.display())
            }
            Ok(_) => trace!("{}: nothing to do", path.display()),
            Err(why) => error!("{}: {why}", path.display()),
        }
        report.files.push(FileReport { path, result });
    }

    Ok(report)
}
