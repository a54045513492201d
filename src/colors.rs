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

//! Slurry tint colors taken from ChemLib's element data.

use std::{collections::BTreeMap, fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use regex::{NoExpand, Regex};
use serde::Deserialize;

/// Elements registered a second time under another spelling.
const ALIASES: &[(&str, &str, &str)] = &[
    ("aluminum", "ALUMINUM_ALT", "aluminium"),
    ("tungsten", "TUNGSTEN_ALT", "wolfram"),
];

const DEFAULT_COLOR: &str = "FFFFFF";

#[derive(Debug, Deserialize)]
struct ElementData {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    name: String,
    color: Option<String>,
}

/// `RRGGBB` to an opaque `0xAARRGGBB` literal.
pub fn argb(hex: &str) -> Option<String> {
    let hex = hex.trim();
    let hex = hex
        .strip_prefix('#')
        .or_else(|| hex.strip_prefix("0x"))
        .unwrap_or(hex);

    let rgb = u32::from_str_radix(hex, 16).ok()?;
    Some(format!("0x{:08X}", rgb | 0xFF00_0000))
}

/// Colors for the elements in `wanted`, keyed by element name.
pub fn element_colors(path: &Path, wanted: &[String]) -> Result<BTreeMap<String, String>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read element data from {}", path.display()))?;
    let data: ElementData = serde_json::from_str(&text)
        .wrap_err_with(|| format!("{} is not ChemLib element data", path.display()))?;

    let mut colors = BTreeMap::new();
    for element in data.elements {
        if !wanted.contains(&element.name) {
            continue;
        }

        let hex = element.color.as_deref().unwrap_or(DEFAULT_COLOR);
        match argb(hex) {
            Some(color) => {
                colors.insert(element.name, color);
            }
            None => warn!("{} has an unreadable color {hex:?}", element.name),
        }
    }

    Ok(colors)
}

fn constant(enum_name: &str, name: &str) -> Regex {
    let pattern = format!(
        r#"(?i)\b{}\("{}", 0x[0-9a-f]+\)"#,
        regex::escape(enum_name),
        regex::escape(name)
    );
    Regex::new(&pattern).expect("escaped enum patterns should compile")
}

/// Rewrites `NAME("name", 0x...)` enum constants in `source` to the given
/// colors. Returns the new source and how many constants were changed.
pub fn update_enum_colors(source: &str, colors: &BTreeMap<String, String>) -> (String, usize) {
    let mut source = source.to_owned();
    let mut replaced = 0;

    for (name, color) in colors {
        let mut constants = vec![(name.to_uppercase(), name.as_str())];
        constants.extend(
            ALIASES
                .iter()
                .filter(|(element, ..)| element == name)
                .map(|(_, alias, spelling)| ((*alias).to_owned(), *spelling)),
        );

        for (enum_name, spelling) in constants {
            let re = constant(&enum_name, spelling);
            let found = re.find_iter(&source).count();
            if found == 0 {
                continue;
            }

            let replacement = format!(r#"{enum_name}("{spelling}", {color})"#);
            source = re.replace_all(&source, NoExpand(&replacement)).into_owned();
            replaced += found;
        }
    }

    (source, replaced)
}

/// Updates the slurry enum at `slurries` with colors read from `elements`.
pub fn update_slurry_colors(elements: &Path, slurries: &Path, wanted: &[String]) -> Result<usize> {
    let colors = element_colors(elements, wanted)?;
    info!("Read {} element colors", colors.len());

    let source = fs::read_to_string(slurries)
        .wrap_err_with(|| format!("Unable to read {}", slurries.display()))?;
    let (updated, replaced) = update_enum_colors(&source, &colors);

    if updated != source {
        fs::write(slurries, updated)
            .wrap_err_with(|| format!("Unable to write {}", slurries.display()))?;
    }

    Ok(replaced)
}
