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

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    document::{json_files, read_json, Document, DocumentError},
    ids::{is_slurry, split, LOCAL, MEKANISM},
    recipe::MachineType,
};

use super::doc_type;

/// The produced chemical, whichever key it is written under.
pub(super) fn output_chemical(doc: &Document) -> Option<&str> {
    let output = doc.get("output")?;
    output
        .get("id")
        .or_else(|| output.get("chemical"))?
        .as_str()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// Dirty, clean or otherwise named slurries. The only valid dissolution output.
    Slurry,
    /// A gas or other chemical from Mekanism or this mod.
    Chemical,
    Other,
}

impl OutputKind {
    pub fn of(id: &str) -> Self {
        if is_slurry(id) {
            return OutputKind::Slurry;
        }

        match split(id).0 {
            LOCAL | MEKANISM => OutputKind::Chemical,
            _ => OutputKind::Other,
        }
    }
}

/// Dissolution recipes on disk, grouped by what they produce.
#[derive(Debug, Default)]
pub struct Audit {
    pub slurry: Vec<PathBuf>,
    /// Chemical id to the files producing it.
    pub chemical: BTreeMap<String, Vec<PathBuf>>,
    pub other: Vec<(PathBuf, String)>,
    pub unreadable: Vec<(PathBuf, DocumentError)>,
}

impl Audit {
    pub fn log(&self) {
        info!("Slurry outputs: {}", self.slurry.len());
        info!(
            "Chemical outputs: {} in {} chemicals",
            self.chemical.values().map(Vec::len).sum::<usize>(),
            self.chemical.len()
        );
        info!("Other outputs: {}", self.other.len());

        for (chemical, files) in &self.chemical {
            warn!("{chemical}: {} recipes", files.len());
            if files.len() <= 3 {
                for file in files {
                    let name = file.file_name().map(|n| n.to_string_lossy());
                    info!("  - {}", name.unwrap_or_default());
                }
            }
        }

        for (file, id) in &self.other {
            info!("{}: {id}", file.display());
        }

        for (file, why) in &self.unreadable {
            error!("{}: {why}", file.display());
        }
    }
}

/// Classifies every dissolution recipe below `dir` without modifying anything.
pub fn audit(dir: &Path) -> Result<Audit, DocumentError> {
    let mut audit = Audit::default();
    if !dir.is_dir() {
        warn!("{} does not exist, nothing to audit", dir.display());
        return Ok(audit);
    }

    for path in json_files(dir)? {
        let doc = match read_json(&path) {
            Ok(doc) => doc,
            Err(why) => {
                audit.unreadable.push((path, why));
                continue;
            }
        };

        if doc_type(&doc) != Some(MachineType::Dissolution.id()) {
            continue;
        }

        let Some(id) = output_chemical(&doc) else {
            continue;
        };

        match OutputKind::of(id) {
            OutputKind::Slurry => audit.slurry.push(path),
            OutputKind::Chemical => audit.chemical.entry(id.to_owned()).or_default().push(path),
            OutputKind::Other => audit.other.push((path, id.to_owned())),
        }
    }

    Ok(audit)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn classifies_outputs() {
        assert_eq!(OutputKind::of("mekanism:dirty_iron"), OutputKind::Slurry);
        assert_eq!(OutputKind::of("chemlibmekanized:slurry_zinc"), OutputKind::Slurry);
        assert_eq!(OutputKind::of("mekanism:carbon"), OutputKind::Chemical);
        assert_eq!(OutputKind::of("chemlibmekanized:compound_ammonia"), OutputKind::Chemical);
        assert_eq!(OutputKind::of("minecraft:coal"), OutputKind::Other);
        assert_eq!(OutputKind::of("coal"), OutputKind::Other);
    }

    #[test]
    fn groups_by_chemical_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = |id: &str| {
            format!(
                r#"{{"type": "mekanism:dissolution", "output": {{"amount": 1, "id": "{id}"}}}}"#
            )
        };

        fs::write(dir.path().join("a.json"), recipe("mekanism:carbon")).unwrap();
        fs::write(dir.path().join("b.json"), recipe("mekanism:carbon")).unwrap();
        fs::write(dir.path().join("c.json"), recipe("chemlibmekanized:dirty_zinc")).unwrap();
        fs::write(dir.path().join("d.json"), recipe("create:crushed_zinc")).unwrap();
        fs::write(dir.path().join("e.json"), "[]").unwrap();

        let before = fs::read_to_string(dir.path().join("a.json")).unwrap();
        let result = audit(dir.path()).unwrap();

        assert_eq!(result.slurry.len(), 1);
        assert_eq!(result.chemical["mekanism:carbon"].len(), 2);
        assert_eq!(result.other.len(), 1);
        assert_eq!(result.unreadable.len(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("a.json")).unwrap(), before);
    }
}
