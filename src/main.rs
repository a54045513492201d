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

use std::path::{Path, PathBuf};

use args::{Args, Command, SLURRY_ENUM};
use clap::Parser;
use color_eyre::eyre::{ensure, Result};
use data::MATERIALS;
use datagen::{Context, Report, Source};
use ids::Resolver;
use patch::{patch_file, prune_file, run_pass, Fix, FixName, PassReport};
use recipe::{recipe_dir, MachineType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[macro_use]
extern crate tracing;

mod args;
mod colors;
mod data;
mod datagen;
mod document;
mod ids;
mod lang;
mod patch;
mod recipe;

fn main() -> Result<()> {
    color_eyre::install()?;

    // RUST_LOG=chemdata=trace
    match cfg!(debug_assertions) {
        true => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chemdata=info"));
            let fmt = tracing_subscriber::fmt::layer().pretty();
            tracing_subscriber::registry().with(filter).with(fmt).init();
        }
        false => tracing_subscriber::fmt::init(),
    }

    let args = Args::parse();
    let resources = args.resources();
    let resolver = Resolver::new(args.mappings());

    debug!(
        "Resources at {}, {:?} mappings",
        resources.display(),
        resolver.version()
    );

    match args.command {
        Command::Generate { sources } => generate(&Context::new(resources, resolver), &sources),
        Command::Patch { fixes, dry_run } => patch(&resources, &fixes, dry_run),
        Command::Prune { dry_run } => prune(&resources, dry_run),
        Command::Audit => {
            patch::audit(&recipe_dir(&resources, MachineType::Dissolution))?.log();
            Ok(())
        }
        Command::Translations => {
            let path = lang::lang_path(&resources);
            let changed = lang::update_translations(&path, &MATERIALS.translated_slurries)?;
            info!("Updated {changed} translations in {}", path.display());
            Ok(())
        }
        Command::Colors { elements, slurries } => {
            let slurries = slurries.unwrap_or_else(|| PathBuf::from(SLURRY_ENUM));
            let replaced =
                colors::update_slurry_colors(&elements, &slurries, &MATERIALS.colored_slurries)?;
            info!("Updated {replaced} slurry colors in {}", slurries.display());
            Ok(())
        }
    }
}

fn generate(ctx: &Context, sources: &[Source]) -> Result<()> {
    let sources = match sources.is_empty() {
        true => Source::DEFAULT,
        false => sources,
    };

    let mut total = Report::default();
    for source in sources {
        total.merge(datagen::generate(ctx, *source)?);
    }

    info!(
        "Done: {} files created, {} skipped, {} pending",
        total.created.len(),
        total.skipped.len(),
        total.pending.len()
    );
    for (name, reason) in total.skipped.iter().chain(&total.pending) {
        info!("  {name}: {reason}");
    }

    Ok(())
}

fn finish_pass(name: &str, report: &PassReport) -> Result<()> {
    report.log(name);

    let failed = report.failures().count();
    ensure!(failed == 0, "{failed} of {} files failed", report.files.len());
    Ok(())
}

fn patch(resources: &Path, names: &[FixName], dry_run: bool) -> Result<()> {
    let fixes = names
        .iter()
        .flat_map(|name| name.fixes().iter().copied())
        .collect::<Vec<&dyn Fix>>();

    if dry_run {
        info!("Dry run, nothing will be written");
    }

    let dir = recipe_dir(resources, MachineType::Dissolution);
    let report = run_pass(&dir, |path| patch_file(path, &fixes, dry_run))?;
    finish_pass("patch", &report)
}

fn prune(resources: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        info!("Dry run, nothing will be deleted");
    }

    let dir = recipe_dir(resources, MachineType::Dissolution);
    let report = run_pass(&dir, |path| prune_file(path, dry_run))?;
    finish_pass("prune", &report)
}
