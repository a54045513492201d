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

//! Recipe generators.
//!
//! Each [`Source`] turns one family of embedded tables into recipe files.
//! Every file is overwritten whole, so running a source twice yields the same
//! tree.

mod crystallizing;
mod dissolution;
mod infusing;
mod reaction;
mod rotary;
mod slurry;

use std::{collections::BTreeMap, fs, path::PathBuf};

use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;

use crate::{
    data::{Batch, Description, Unregistered},
    document::{write_json, DocumentError},
    ids::{Origin, Resolver},
    recipe::{recipe_dir, MachineType},
};

/// Abstract table units to millibuckets.
pub const UNIT: u32 = 1000;

/// Where generated files go and how chemical names are resolved.
pub struct Context {
    pub resources: PathBuf,
    pub resolver: Resolver,
}

impl Context {
    pub fn new(resources: impl Into<PathBuf>, resolver: Resolver) -> Self {
        Self {
            resources: resources.into(),
            resolver,
        }
    }

    pub fn recipe_dir(&self, machine: MachineType) -> PathBuf {
        recipe_dir(&self.resources, machine)
    }

    /// An emitter writing into the directory for `machine`.
    pub fn emitter(&self, machine: MachineType) -> Result<Emitter, DocumentError> {
        Emitter::new(self.recipe_dir(machine))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Source {
    Infusing,
    Dissolution,
    ElementSlurries,
    ElementAcids,
    Crystallizing,
    Crystals,
    Washing,
    SlurryProcessing,
    Rotary,
    Reaction,
    Cooking,
    CrystalModels,
}

impl Source {
    /// Sources run when none are named. `ElementAcids` replaces the files
    /// `ElementSlurries` writes, so only the former is included.
    pub const DEFAULT: &'static [Source] = &[
        Source::Infusing,
        Source::Dissolution,
        Source::ElementAcids,
        Source::Crystallizing,
        Source::Crystals,
        Source::Washing,
        Source::SlurryProcessing,
        Source::Rotary,
        Source::Reaction,
        Source::Cooking,
        Source::CrystalModels,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Source::Infusing => "infusing",
            Source::Dissolution => "dissolution",
            Source::ElementSlurries => "element-slurries",
            Source::ElementAcids => "element-acids",
            Source::Crystallizing => "crystallizing",
            Source::Crystals => "crystals",
            Source::Washing => "washing",
            Source::SlurryProcessing => "slurry-processing",
            Source::Rotary => "rotary",
            Source::Reaction => "reaction",
            Source::Cooking => "cooking",
            Source::CrystalModels => "crystal-models",
        }
    }
}

/// Runs `source`, writing its files below the context's resource root.
pub fn generate(ctx: &Context, source: Source) -> Result<Report> {
    let report = match source {
        Source::Infusing => infusing::generate(ctx),
        Source::Dissolution => dissolution::generate(ctx),
        Source::ElementSlurries => dissolution::element_slurries(ctx),
        Source::ElementAcids => dissolution::element_acids(ctx),
        Source::Crystallizing => crystallizing::generate(ctx),
        Source::Crystals => crystallizing::crystals(ctx),
        Source::Washing => slurry::washing(ctx),
        Source::SlurryProcessing => slurry::processing(ctx),
        Source::Rotary => rotary::generate(ctx),
        Source::Reaction => reaction::generate(ctx),
        Source::Cooking => slurry::cooking(ctx),
        Source::CrystalModels => slurry::crystal_models(ctx),
    }
    .wrap_err_with(|| format!("Failed to generate {}", source.name()))?;

    info!(
        "{}: {} created, {} skipped, {} pending",
        source.name(),
        report.created.len(),
        report.skipped.len(),
        report.pending.len()
    );

    Ok(report)
}

/// What a generator did, per file name.
#[derive(Debug, Default)]
pub struct Report {
    pub created: Vec<String>,
    pub skipped: Vec<(String, String)>,
    pub pending: Vec<(String, String)>,
}

impl Report {
    pub fn merge(&mut self, other: Report) {
        self.created.extend(other.created);
        self.skipped.extend(other.skipped);
        self.pending.extend(other.pending);
    }
}

/// Writes documents into a single directory and keeps count.
pub struct Emitter {
    dir: PathBuf,
    report: Report,
}

impl Emitter {
    pub fn new(dir: PathBuf) -> Result<Self, DocumentError> {
        fs::create_dir_all(&dir).map_err(|e| DocumentError::Io(dir.clone(), e))?;
        Ok(Self {
            dir,
            report: Report::default(),
        })
    }

    /// Writes `doc` to `<dir>/<name>.json`. Each name is written once per
    /// emitter, a second document under the same name is an error.
    pub fn emit<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        doc: &T,
    ) -> Result<(), DocumentError> {
        let path = self.dir.join(format!("{name}.json"));
        if self.report.created.iter().any(|created| created == name) {
            return Err(DocumentError::Duplicate(path));
        }

        write_json(&path, doc)?;
        info!("Created {}", path.display());
        self.report.created.push(name.to_owned());
        Ok(())
    }

    pub fn skip(&mut self, name: &str, reason: impl Into<String>) {
        let reason = reason.into();
        info!("Skipped {name}: {reason}");
        self.report.skipped.push((name.to_owned(), reason));
    }

    pub fn defer(&mut self, name: &str, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Pending {name}: {reason}");
        self.report.pending.push((name.to_owned(), reason));
    }

    /// Checks a table row against its batch. Returns whether it should be written.
    pub fn admit<R: Description>(&mut self, batch: &Batch<R>, recipe: &R) -> bool {
        if let Some(note) = recipe.note() {
            trace!("{}: {note}", recipe.name());
        }

        if let Some(reason) = recipe.deferred() {
            self.defer(recipe.name(), reason);
            return false;
        }

        let missing = batch.unregistered_in(recipe);
        if missing.is_empty() {
            return true;
        }

        let missing = missing.join(", ");
        match batch.unregistered {
            Unregistered::Ignore => true,
            Unregistered::Warn => {
                warn!("{} uses unregistered chemicals: {missing}", recipe.name());
                true
            }
            Unregistered::Skip => {
                self.skip(recipe.name(), format!("unregistered chemicals: {missing}"));
                false
            }
        }
    }

    pub fn finish(self) -> Report {
        self.report
    }
}

/// Scales table units to an integer amount, rounding to the nearest unit.
pub fn scale(units: f64, scale: u32) -> u64 {
    (units * f64::from(scale)).round() as u64
}

/// Logs each chemical named by `batch` and where its id came from.
pub fn log_chemicals<R: Description>(resolver: &Resolver, batch: &Batch<R>) {
    let used = batch
        .recipes
        .iter()
        .flat_map(|r| r.chemicals())
        .map(|name| (name, resolver.lookup(name)))
        .collect::<BTreeMap<_, _>>();

    info!("{} ({}): {} chemicals", batch.title, batch.name, used.len());
    for (name, (id, origin)) in used {
        match origin {
            Origin::Synthesized => info!("  {name} -> {id} ({origin})"),
            _ => debug!("  {name} -> {id} ({origin})"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{fs, path::Path};

    use serde_json::Value;

    use super::*;
    use crate::{data::InfusingRecipe, document::json_files, ids::MappingVersion};

    pub fn context() -> (tempfile::TempDir, Context) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(dir.path(), Resolver::new(MappingVersion::Classic));
        (dir, ctx)
    }

    pub fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
        json_files(root)
            .unwrap()
            .into_iter()
            .map(|p| {
                let text = fs::read_to_string(&p).unwrap();
                (p, text)
            })
            .collect()
    }

    #[test]
    fn scale_rounds_to_nearest() {
        assert_eq!(scale(2.0, UNIT), 2000);
        assert_eq!(scale(0.1, 100), 10);
        assert_eq!(scale(0.111, UNIT), 111);
    }

    #[test]
    fn every_source_is_repeatable() {
        let (dir, ctx) = context();

        for source in Source::value_variants() {
            generate(&ctx, *source).unwrap();
        }
        let first = snapshot(dir.path());
        assert!(!first.is_empty());

        for source in Source::value_variants() {
            generate(&ctx, *source).unwrap();
        }
        assert_eq!(first, snapshot(dir.path()));
    }

    #[test]
    fn names_are_written_once() {
        let (dir, _ctx) = context();
        let mut emitter = Emitter::new(dir.path().join("out")).unwrap();

        emitter.emit("a", &1).unwrap();
        assert!(matches!(emitter.emit("a", &2), Err(DocumentError::Duplicate(_))));
        assert_eq!(read(&dir.path().join("out/a.json")), 1);
        assert_eq!(emitter.finish().created, ["a"]);
    }

    #[test]
    fn deferred_rows_are_not_admitted() {
        let (dir, _ctx) = context();
        let mut emitter = Emitter::new(dir.path().join("out")).unwrap();

        let recipe = |name: &str, deferred: Option<&str>| InfusingRecipe {
            name: name.into(),
            left: ("oxygen".into(), 3.0),
            right: ("oxygen".into(), 1.0),
            output: ("ozone".into(), 2.0),
            note: Some("3O2 -> 2O3".into()),
            deferred: deferred.map(Into::into),
        };
        let batch = Batch {
            name: "test".into(),
            title: "Test".into(),
            scale: UNIT,
            registered: Vec::new(),
            unregistered: Unregistered::Ignore,
            recipes: vec![recipe("ozone", Some("needs a catalyst")), recipe("ozone_now", None)],
        };

        let admitted = batch
            .recipes
            .iter()
            .filter(|r| emitter.admit(&batch, r))
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(admitted, ["ozone_now"]);

        let report = emitter.finish();
        assert_eq!(report.pending, [("ozone".to_owned(), "needs a catalyst".to_owned())]);
    }

    #[test]
    fn created_files_match_report() {
        let (_dir, ctx) = context();
        let report = generate(&ctx, Source::Rotary).unwrap();
        let files = json_files(&ctx.recipe_dir(MachineType::Rotary)).unwrap();

        assert_eq!(files.len(), report.created.len());
        for file in files {
            let doc = read(&file);
            assert_eq!(doc["type"], "mekanism:rotary");
        }
    }
}
