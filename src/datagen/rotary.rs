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
    data::ROTARY,
    ids::local,
    recipe::{ChemicalStack, FluidStack, MachineType, Product, Recipe, Rotary},
};

use super::{Context, Report};

const BUCKET: u64 = 1000;

pub fn generate(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Rotary)?;

    for gas in &ROTARY.condensing {
        emitter.emit(gas, &condense(gas))?;
    }

    for entry in &ROTARY.decondensing {
        let (output, amount) = &entry.output;
        let (id, origin) = ctx.resolver.lookup(output);
        debug!("{} -> {id} ({origin})", entry.name);
        if let Some(note) = &entry.note {
            trace!("{}: {note}", entry.name);
        }

        let doc = Recipe::Rotary(Rotary {
            chemical_input: None,
            chemical_output: Some(Product::new(*amount, id)),
            fluid_input: Some(FluidStack::fluid(BUCKET, entry.fluid.as_str())),
            fluid_output: None,
        });
        emitter.emit(&entry.name, &doc)?;
    }

    Ok(emitter.finish())
}

/// Both directions between a gas and its liquid, one millibucket at a time.
fn condense(gas: &str) -> Recipe {
    let liquid = local(&format!("liquid_{gas}"));

    Recipe::Rotary(Rotary {
        chemical_input: Some(ChemicalStack::new(1, local(gas))),
        chemical_output: Some(Product::new(1, local(gas))),
        fluid_input: Some(FluidStack::fluid(1, liquid.as_str())),
        fluid_output: Some(Product::new(1, liquid)),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::datagen::tests::{context, read};

    #[test]
    fn condensing_pairs_gas_and_liquid() {
        assert_eq!(
            serde_json::to_value(condense("neon")).unwrap(),
            json!({
                "type": "mekanism:rotary",
                "chemical_input": {"amount": 1, "chemical": "chemlibmekanized:neon"},
                "chemical_output": {"amount": 1, "id": "chemlibmekanized:neon"},
                "fluid_input": {"amount": 1, "fluid": "chemlibmekanized:liquid_neon"},
                "fluid_output": {"amount": 1, "id": "chemlibmekanized:liquid_neon"}
            })
        );
    }

    #[test]
    fn decondensing_reads_a_bucket() {
        let (_dir, ctx) = context();
        let report = generate(&ctx).unwrap();
        assert_eq!(
            report.created.len(),
            ROTARY.condensing.len() + ROTARY.decondensing.len()
        );

        let doc = read(&ctx.recipe_dir(MachineType::Rotary).join("water_electrolysis.json"));
        assert_eq!(
            doc,
            json!({
                "type": "mekanism:rotary",
                "chemical_output": {"amount": 1000, "id": "mekanism:hydrogen"},
                "fluid_input": {"amount": 1000, "fluid": "minecraft:water"}
            })
        );
    }
}
