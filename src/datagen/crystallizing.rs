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
    data::{CrystallizingRecipe, CRYSTALLIZING, MATERIALS},
    ids::{local, Resolver},
    recipe::{ChemicalStack, Crystallizing, ItemResult, MachineType, Recipe},
};

use super::{log_chemicals, scale, Context, Report};

/// Clean slurry per crystal: 81 element items, one ingot.
const SLURRY_PER_CRYSTAL: u64 = 16200;

pub fn generate(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Crystallizing)?;

    for batch in &CRYSTALLIZING.batches {
        log_chemicals(&ctx.resolver, batch);

        for recipe in &batch.recipes {
            if emitter.admit(batch, recipe) {
                emitter.emit(&recipe.name, &build(&ctx.resolver, recipe, batch.scale))?;
            }
        }
    }

    Ok(emitter.finish())
}

fn build(resolver: &Resolver, recipe: &CrystallizingRecipe, factor: u32) -> Recipe {
    let (input, amount) = &recipe.input;

    Recipe::Crystallizing(Crystallizing {
        chemical_type: Some(recipe.chemical_type),
        input: ChemicalStack::new(scale(*amount, factor), resolver.resolve(input)),
        output: ItemResult::new(recipe.count.unwrap_or(1), recipe.output.as_str()),
    })
}

/// Clean slurry crystallized back into a crystal for each crystal metal.
pub fn crystals(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Crystallizing)?;

    for metal in &MATERIALS.crystal_metals {
        let doc = crystallize(metal, SLURRY_PER_CRYSTAL);
        emitter.emit(&format!("{metal}_crystal"), &doc)?;
    }

    Ok(emitter.finish())
}

pub(super) fn crystallize(metal: &str, amount: u64) -> Recipe {
    Recipe::Crystallizing(Crystallizing {
        chemical_type: None,
        input: ChemicalStack::new(amount, local(&format!("clean_{metal}"))),
        output: ItemResult::counted(1, local(&format!("{metal}_crystal"))),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::datagen::tests::{context, read};

    #[test]
    fn batch_recipes_carry_chemical_type() {
        let (_dir, ctx) = context();
        generate(&ctx).unwrap();

        let dir = ctx.recipe_dir(MachineType::Crystallizing);
        assert_eq!(
            read(&dir.join("carbon_to_coal.json")),
            json!({
                "type": "mekanism:crystallizing",
                "chemical_type": "infusion",
                "input": {"amount": 16000, "chemical": "mekanism:carbon"},
                "output": {"id": "minecraft:coal"}
            })
        );
        assert_eq!(
            read(&dir.join("carbon_to_lapis.json"))["output"],
            json!({"count": 4, "id": "minecraft:lapis_lazuli"})
        );
    }

    #[test]
    fn crystals_take_an_ingot_of_slurry() {
        let (_dir, ctx) = context();
        let report = crystals(&ctx).unwrap();
        assert_eq!(report.created.len(), MATERIALS.crystal_metals.len());

        let metal = &MATERIALS.crystal_metals[0];
        let doc = read(
            &ctx.recipe_dir(MachineType::Crystallizing)
                .join(format!("{metal}_crystal.json")),
        );
        assert_eq!(
            doc,
            json!({
                "type": "mekanism:crystallizing",
                "input": {"amount": 16200, "chemical": format!("chemlibmekanized:clean_{metal}")},
                "output": {"count": 1, "id": format!("chemlibmekanized:{metal}_crystal")}
            })
        );
    }
}
