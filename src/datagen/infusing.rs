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
    data::{InfusingRecipe, INFUSING},
    ids::Resolver,
    recipe::{ChemicalInfusing, ChemicalStack, MachineType, Product, Recipe},
};

use super::{log_chemicals, scale, Context, Report};

pub fn generate(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::ChemicalInfusing)?;

    for batch in &INFUSING.batches {
        log_chemicals(&ctx.resolver, batch);

        for recipe in &batch.recipes {
            if emitter.admit(batch, recipe) {
                emitter.emit(&recipe.name, &build(&ctx.resolver, recipe, batch.scale))?;
            }
        }
    }

    Ok(emitter.finish())
}

fn build(resolver: &Resolver, recipe: &InfusingRecipe, factor: u32) -> Recipe {
    let (left, left_amount) = &recipe.left;
    let (right, right_amount) = &recipe.right;
    let (output, output_amount) = &recipe.output;

    // a zero right side is a catalyst, the machine still needs some of it
    let right_amount = if *right_amount > 0.0 { *right_amount } else { 1.0 };

    Recipe::ChemicalInfusing(ChemicalInfusing {
        left_input: ChemicalStack::new(scale(*left_amount, factor), resolver.resolve(left)),
        right_input: ChemicalStack::new(scale(right_amount, factor), resolver.resolve(right)),
        output: Product::new(scale(*output_amount, factor), resolver.resolve(output)),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        datagen::{tests::{context, read}, UNIT},
        document::json_files,
    };

    #[test]
    fn water_vapor_formation() {
        let (_dir, ctx) = context();
        generate(&ctx).unwrap();

        let path = ctx
            .recipe_dir(MachineType::ChemicalInfusing)
            .join("water_vapor_formation.json");
        assert_eq!(
            read(&path),
            json!({
                "type": "mekanism:chemical_infusing",
                "left_input": {"amount": 2000, "chemical": "mekanism:hydrogen"},
                "right_input": {"amount": 1000, "chemical": "mekanism:oxygen"},
                "output": {"amount": 1000, "id": "mekanism:water_vapor"}
            })
        );
    }

    #[test]
    fn one_file_per_admitted_recipe() {
        let (_dir, ctx) = context();
        let report = generate(&ctx).unwrap();

        let total = INFUSING.batches.iter().map(|b| b.recipes.len()).sum::<usize>();
        assert_eq!(
            report.created.len() + report.skipped.len() + report.pending.len(),
            total
        );
        assert!(report.created.iter().any(|name| name == "ozone_formation"));

        let files = json_files(&ctx.recipe_dir(MachineType::ChemicalInfusing)).unwrap();
        assert_eq!(files.len(), report.created.len());
        for file in files {
            assert_eq!(read(&file)["type"], "mekanism:chemical_infusing");
        }
    }

    #[test]
    fn zero_right_amount_is_clamped() {
        let recipe = InfusingRecipe {
            name: "catalysed".into(),
            left: ("nitrogen".into(), 1.0),
            right: ("platinum".into(), 0.0),
            output: ("ammonia".into(), 2.0),
            note: None,
            deferred: None,
        };

        let Recipe::ChemicalInfusing(doc) = build(&Resolver::default(), &recipe, UNIT) else {
            panic!("expected an infusing recipe");
        };
        assert_eq!(doc.right_input.amount, 1000);
        assert_eq!(doc.output.id, "chemlibmekanized:compound_ammonia");
    }
}
