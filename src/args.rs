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

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{datagen::Source, ids::MappingVersion, patch::FixName};

/// Generates and maintains the ChemLib Mekanized recipe data.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// The mod's resource root, holding `data/` and `assets/`.
    /// Defaults to src/main/resources if not set.
    #[arg(short, long, env = "CHEMDATA_RESOURCES", global = true)]
    resources: Option<PathBuf>,
    /// Which revision of the chemical name tables to resolve against.
    #[arg(short, long, env = "CHEMDATA_MAPPINGS", value_enum, global = true)]
    mappings: Option<MappingVersion>,
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    #[inline(always)]
    pub fn resources(&self) -> PathBuf {
        self.resources
            .clone()
            .unwrap_or("src/main/resources".into())
    }

    #[inline(always)]
    pub fn mappings(&self) -> MappingVersion {
        self.mappings.unwrap_or_default()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write recipe files from the built-in tables. Runs every source if none are given.
    Generate {
        #[arg(value_enum)]
        sources: Vec<Source>,
    },
    /// Normalize the dissolution recipes already on disk.
    Patch {
        #[arg(value_enum, required = true)]
        fixes: Vec<FixName>,
        /// Report what would change without writing anything.
        #[arg(long)]
        dry_run: bool,
    },
    /// Delete dissolution recipes that do not produce a slurry.
    Prune {
        #[arg(long)]
        dry_run: bool,
    },
    /// Report what the dissolution recipes produce.
    Audit,
    /// Add slurry names to the English language file.
    Translations,
    /// Copy element colors from ChemLib onto the slurry enum.
    Colors {
        /// ChemLib's elements.json.
        #[arg(long)]
        elements: PathBuf,
        /// The slurry enum to rewrite. Defaults to the registry source in this repository.
        #[arg(long)]
        slurries: Option<PathBuf>,
    },
}

pub const SLURRY_ENUM: &str =
    "src/main/java/com/hecookin/chemlibmekanized/registry/ChemLibSlurries.java";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_patch_presets() {
        let args =
            Args::try_parse_from(["chemdata", "patch", "final", "id-outputs", "--dry-run"])
                .unwrap();

        match args.command {
            Command::Patch { fixes, dry_run } => {
                assert_eq!(fixes, [FixName::Final, FixName::IdOutputs]);
                assert!(dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_options_follow_subcommands() {
        let args = Args::try_parse_from([
            "chemdata",
            "generate",
            "infusing",
            "--mappings",
            "extended",
            "--resources",
            "out",
        ])
        .unwrap();

        assert_eq!(args.mappings(), MappingVersion::Extended);
        assert_eq!(args.resources(), PathBuf::from("out"));
    }

    #[test]
    fn patch_needs_a_fix() {
        assert!(Args::try_parse_from(["chemdata", "patch"]).is_err());
    }
}
