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

use std::{fs, path::Path};

use crate::{
    document::{read_json, DocumentError},
    recipe::MachineType,
};

use super::{
    audit::{output_chemical, OutputKind},
    doc_type, Outcome, PatchError,
};

/// Deletes a dissolution recipe that produces something other than a slurry.
pub fn prune_file(path: &Path, dry_run: bool) -> Result<Outcome, PatchError> {
    let doc = read_json(path)?;

    if doc_type(&doc) != Some(MachineType::Dissolution.id()) {
        return Ok(Outcome::Ignored);
    }

    match output_chemical(&doc) {
        Some(id) if OutputKind::of(id) != OutputKind::Slurry => {
            if !dry_run {
                fs::remove_file(path).map_err(|e| DocumentError::Io(path.to_owned(), e))?;
            }
            Ok(Outcome::Removed)
        }
        _ => Ok(Outcome::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::patch::run_pass;

    #[test]
    fn only_chemical_outputs_are_removed() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, doc: Value| {
            fs::write(dir.path().join(name), doc.to_string()).unwrap()
        };
        let dissolution = |output: Value| json!({"type": "mekanism:dissolution", "output": output});

        write(
            "carbon.json",
            dissolution(json!({"amount": 1000, "id": "mekanism:carbon"})),
        );
        write(
            "sulfur.json",
            dissolution(json!({"amount": 1000, "chemical": "chemlibmekanized:element_sulfur"})),
        );
        write(
            "zinc.json",
            dissolution(json!({"amount": 200, "id": "chemlibmekanized:dirty_zinc"})),
        );
        write(
            "smelt.json",
            json!({"type": "minecraft:smelting", "result": {"id": "minecraft:iron_ingot"}}),
        );

        let preview = run_pass(dir.path(), |path| prune_file(path, true)).unwrap();
        assert_eq!(preview.count(Outcome::Removed), 2);
        assert!(dir.path().join("carbon.json").exists());

        let report = run_pass(dir.path(), |path| prune_file(path, false)).unwrap();
        assert_eq!(report.count(Outcome::Removed), 2);
        assert_eq!(report.count(Outcome::Unchanged), 1);
        assert_eq!(report.count(Outcome::Ignored), 1);

        assert!(!dir.path().join("carbon.json").exists());
        assert!(!dir.path().join("sulfur.json").exists());
        assert!(dir.path().join("zinc.json").exists());
        assert!(dir.path().join("smelt.json").exists());
    }
}
