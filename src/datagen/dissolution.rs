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

use std::fs;

use color_eyre::eyre::{Result, WrapErr};

use crate::{
    data::{DissolutionRecipe, DISSOLUTION, MATERIALS},
    ids::{local, Resolver},
    recipe::{ChemicalStack, Dissolution, ItemStack, MachineType, Product, Recipe},
};

use super::{log_chemicals, scale, Context, Report, UNIT};

/// Elements without ingots, nuggets or plates.
const NON_METALS: &[&str] = &["boron", "silicon", "arsenic", "tellurium"];

/// Acids every slurry element dissolves in, with the amount each recipe uses.
const ACIDS: &[(&str, u64)] = &[
    ("sulfuric_acid", 20),
    ("hydrochloric_acid", 10),
    ("nitric_acid", 10),
    ("hydrogen_chloride", 10),
];

/// Dirty slurry produced by one element item.
const ELEMENT_SLURRY: u64 = 200;

pub fn generate(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Dissolution)?;

    for batch in &DISSOLUTION.batches {
        log_chemicals(&ctx.resolver, batch);

        for recipe in &batch.recipes {
            if emitter.admit(batch, recipe) {
                emitter.emit(&recipe.name, &build(&ctx.resolver, recipe, batch.scale))?;
            }
        }
    }

    Ok(emitter.finish())
}

fn build(resolver: &Resolver, recipe: &DissolutionRecipe, acid_scale: u32) -> Recipe {
    let (item, count) = &recipe.input;
    let (acid, acid_amount) = &recipe.acid;
    let (output, output_amount) = &recipe.output;

    Recipe::Dissolution(Dissolution {
        item_input: ItemStack::new(*count, item.as_str()),
        chemical_input: ChemicalStack::new(scale(*acid_amount, acid_scale), resolver.resolve(acid)),
        output: Product::new(scale(*output_amount, UNIT), resolver.resolve(output)),
        per_tick_usage: Some(true),
    })
}

fn to_slurry(
    item: String,
    acid: ChemicalStack,
    amount: u64,
    slurry: String,
    per_tick: bool,
) -> Recipe {
    Recipe::Dissolution(Dissolution {
        item_input: ItemStack::new(1, item),
        chemical_input: acid,
        output: Product::new(amount, slurry),
        per_tick_usage: Some(per_tick),
    })
}

/// Element, ingot, nugget and plate items dissolved in sulfuric acid.
pub fn element_slurries(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Dissolution)?;
    let sulfuric = ChemicalStack::new(100, "mekanism:sulfuric_acid");

    for element in &MATERIALS.dissolvable_elements {
        let id = &element.id;
        let slurry = local(&format!("dirty_{id}"));

        let mut forms = vec![(format!("element_{id}_to_slurry"), local(id), ELEMENT_SLURRY)];
        if !NON_METALS.contains(&id.as_str()) {
            forms.extend([
                (format!("{id}_ingot_to_slurry"), local(&format!("{id}_ingot")), 1000),
                (format!("{id}_nugget_to_slurry"), local(&format!("{id}_nugget")), 111),
                (format!("{id}_plate_to_slurry"), local(&format!("{id}_plate")), 1000),
            ]);
        }

        for (name, item, amount) in forms {
            let doc = to_slurry(item, sulfuric.clone(), amount, slurry.clone(), true);
            emitter.emit(&name, &doc)?;
        }
    }

    Ok(emitter.finish())
}

/// One dissolution per slurry element and acid. Replaces the
/// `element_*_to_slurry` files written by [`element_slurries`].
pub fn element_acids(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Dissolution)?;

    let removed = remove_element_slurries(&ctx.recipe_dir(MachineType::Dissolution))?;
    info!("Removed {removed} older element dissolution recipes");

    for element in &MATERIALS.slurry_elements {
        for (acid, amount) in ACIDS {
            let suffix = acid_suffix(acid);
            let doc = to_slurry(
                local(element),
                ChemicalStack::new(*amount, format!("mekanism:{acid}")),
                ELEMENT_SLURRY,
                local(&format!("dirty_{element}")),
                false,
            );
            emitter.emit(&format!("element_{element}_dissolution_{suffix}"), &doc)?;
        }
    }

    Ok(emitter.finish())
}

fn acid_suffix(acid: &str) -> String {
    acid.replace("_acid", "").replace("hydrogen_chloride", "hcl")
}

fn remove_element_slurries(dir: &std::path::Path) -> Result<usize> {
    let mut removed = 0;

    for entry in fs::read_dir(dir).wrap_err_with(|| format!("Unable to list {}", dir.display()))? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if name.starts_with("element_") && name.contains("_to_slurry") {
            fs::remove_file(&path)
                .wrap_err_with(|| format!("Unable to remove {}", path.display()))?;
            removed += 1;
        }
    }

    Ok(removed)
}
