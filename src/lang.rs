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

//! Display names for the slurries this mod registers.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    data::NamedMaterial,
    document::{read_json, write_json, DocumentError},
    ids::LOCAL,
    recipe::assets_dir,
};

/// `assets/chemlibmekanized/lang/en_us.json` below `resources`.
pub fn lang_path(resources: &Path) -> PathBuf {
    assets_dir(resources).join("lang").join("en_us.json")
}

/// Dirty and clean translation entries for `slurry`.
pub fn slurry_entries(slurry: &NamedMaterial) -> [(String, String); 2] {
    let NamedMaterial { id, name } = slurry;
    [
        (format!("chemical.{LOCAL}.dirty_{id}"), format!("Dirty {name} Slurry")),
        (format!("chemical.{LOCAL}.clean_{id}"), format!("Clean {name} Slurry")),
    ]
}

/// Merges slurry names into the language file at `path`, creating it when
/// missing. Keys are written sorted. Returns how many entries were new or
/// changed.
pub fn update_translations(
    path: &Path,
    slurries: &[NamedMaterial],
) -> Result<usize, DocumentError> {
    let mut lang: BTreeMap<String, Value> = if path.exists() {
        read_json(path)?.into_iter().collect()
    } else {
        info!("{} does not exist, creating it", path.display());
        BTreeMap::new()
    };

    let mut changed = 0;
    for (key, value) in slurries.iter().flat_map(slurry_entries) {
        let value = Value::String(value);
        if lang.get(&key) != Some(&value) {
            trace!("{key} = {value}");
            lang.insert(key, value);
            changed += 1;
        }
    }

    write_json(path, &lang)?;
    Ok(changed)
}
