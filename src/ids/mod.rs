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

mod tables;

use std::fmt::Display;

use clap::ValueEnum;

use self::tables::Table;

/// Namespace of the mod the data is generated for.
pub const LOCAL: &str = "chemlibmekanized";
pub const MEKANISM: &str = "mekanism";
pub const MINECRAFT: &str = "minecraft";

/// Revision of the name tables a [`Resolver`] consults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MappingVersion {
    /// Mekanism first, then our own chemicals. Unknown names map to `chemlibmekanized:{name}`.
    #[default]
    Classic,
    /// Adds slurries and newer compounds. Unknown names map to `chemlibmekanized:compound_{name}`.
    Extended,
}

/// Which table a name was answered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Mekanism,
    Slurry,
    Chemical,
    Compound,
    Synthesized,
}

impl Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Mekanism => write!(f, "Mekanism"),
            Origin::Synthesized => write!(f, "Ours, unlisted"),
            _ => write!(f, "Ours"),
        }
    }
}

/// Maps short chemical names such as `hydrogen` onto namespaced ids.
///
/// Lookups never fail: a name missing from every table is turned into an id
/// in our own namespace.
#[derive(Debug, Clone)]
pub struct Resolver {
    version: MappingVersion,
    tables: Vec<(Origin, &'static Table)>,
}

impl Resolver {
    #[must_use]
    pub fn new(version: MappingVersion) -> Self {
        let tables: Vec<(Origin, &'static Table)> = match version {
            MappingVersion::Classic => vec![
                (Origin::Mekanism, &*tables::CLASSIC_MEKANISM),
                (Origin::Chemical, &*tables::CLASSIC_CHEMLIB),
            ],
            MappingVersion::Extended => vec![
                (Origin::Mekanism, &*tables::EXTENDED_MEKANISM),
                (Origin::Slurry, &*tables::EXTENDED_SLURRIES),
                (Origin::Chemical, &*tables::EXTENDED_CHEMLIB),
                (Origin::Compound, &*tables::EXTENDED_COMPOUNDS),
            ],
        };

        Self { version, tables }
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> MappingVersion {
        self.version
    }

    /// Resolves `name` case-insensitively to exactly one id.
    #[must_use]
    pub fn resolve(&self, name: &str) -> String {
        self.lookup(name).0
    }

    /// Same as [`Resolver::resolve`], also reporting where the id came from.
    #[must_use]
    pub fn lookup(&self, name: &str) -> (String, Origin) {
        let name = name.to_lowercase();

        for (origin, table) in &self.tables {
            if let Some(id) = table.get(&name) {
                return (id.clone(), *origin);
            }
        }

        let id = match self.version {
            MappingVersion::Classic => format!("{LOCAL}:{name}"),
            MappingVersion::Extended => format!("{LOCAL}:compound_{name}"),
        };

        trace!("{name} is in no table, synthesized {id}");
        (id, Origin::Synthesized)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(MappingVersion::default())
    }
}

/// Splits `namespace:path`. Ids without a namespace belong to vanilla.
#[must_use]
pub fn split(id: &str) -> (&str, &str) {
    id.split_once(':').unwrap_or((MINECRAFT, id))
}

#[inline]
#[must_use]
pub fn local(path: &str) -> String {
    format!("{LOCAL}:{path}")
}

/// Whether `id` names a slurry in any namespace. Anything marked dirty,
/// clean or slurry counts.
#[must_use]
pub fn is_slurry(id: &str) -> bool {
    let (_, path) = split(id);
    ["dirty_", "clean_", "slurry_"].iter().any(|p| path.contains(p))
}

/// Mekanism's own ore slurries. Recipes producing these belong to Mekanism.
#[must_use]
pub fn is_mekanism_slurry(id: &str) -> bool {
    id.starts_with("mekanism:dirty_")
}
