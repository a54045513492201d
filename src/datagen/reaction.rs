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

use color_eyre::eyre::Result;

use crate::{
    data::{ReactionRecipe, REACTION},
    ids::{Resolver, MINECRAFT},
    recipe::{
        ChemicalStack, FluidStack, ItemResult, ItemStack, MachineType, Product, Reaction, Recipe,
    },
};

use super::{log_chemicals, Context, Report};

pub fn generate(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Reaction)?;

    for batch in &REACTION.batches {
        log_chemicals(&ctx.resolver, batch);

        for recipe in &batch.recipes {
            if emitter.admit(batch, recipe) {
                emitter.emit(&recipe.name, &build(&ctx.resolver, recipe))?;
            }
        }
    }

    Ok(emitter.finish())
}

/// Amounts in reaction tables are already millibuckets.
fn build(resolver: &Resolver, recipe: &ReactionRecipe) -> Recipe {
    // the chamber always needs a fluid, a drop of water stands in when none is used
    let fluid_input = match &recipe.fluid_input {
        Some((fluid, amount)) => FluidStack::tag(*amount, format!("{MINECRAFT}:{fluid}")),
        None => FluidStack::tag(1, "minecraft:water"),
    };

    Recipe::Reaction(Reaction {
        item_input: recipe
            .item_input
            .as_ref()
            .map(|(item, count)| ItemStack::new(*count, item.as_str())),
        fluid_input,
        chemical_input: recipe
            .chemical_input
            .as_ref()
            .map(|(chemical, amount)| ChemicalStack::new(*amount, resolver.resolve(chemical))),
        energy_required: recipe.energy,
        duration: recipe.duration,
        item_output: recipe
            .item_output
            .as_ref()
            .map(|(item, count)| ItemResult::new(*count, item.as_str())),
        fluid_output: recipe
            .fluid_output
            .as_ref()
            .map(|(fluid, amount)| FluidStack::fluid(*amount, format!("{MINECRAFT}:{fluid}"))),
        chemical_output: recipe
            .chemical_output
            .as_ref()
            .map(|(chemical, amount)| Product::new(*amount, resolver.resolve(chemical))),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::datagen::tests::{context, read};

    #[test]
    fn missing_fluid_gets_water_placeholder() {
        let (_dir, ctx) = context();
        generate(&ctx).unwrap();

        let doc = read(&ctx.recipe_dir(MachineType::Reaction).join("copper_oxide_reduction.json"));
        assert_eq!(
            doc,
            json!({
                "type": "mekanism:reaction",
                "item_input": {"count": 2, "item": "minecraft:raw_copper"},
                "fluid_input": {"amount": 1, "tag": "minecraft:water"},
                "chemical_input": {"amount": 1000, "chemical": "mekanism:hydrogen"},
                "energy_required": 2000.0,
                "duration": 200,
                "item_output": {"count": 2, "id": "minecraft:copper_ingot"},
                "fluid_output": {"amount": 500, "fluid": "minecraft:water"}
            })
        );
    }

    #[test]
    fn listed_fluids_become_tags() {
        let (_dir, ctx) = context();
        generate(&ctx).unwrap();

        let doc = read(&ctx.recipe_dir(MachineType::Reaction).join("haber_process.json"));
        assert_eq!(doc["fluid_input"], json!({"amount": 100, "tag": "minecraft:water"}));
        assert!(doc.get("item_input").is_none());
        assert_eq!(
            doc["chemical_output"],
            json!({"amount": 2000, "id": "chemlibmekanized:compound_ammonia"})
        );
    }
}
