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

//! The ore processing chain for our own slurries: wash, crystallize and
//! smelt, plus the crystal item models.

use color_eyre::eyre::Result;

use crate::{
    data::MATERIALS,
    ids::local,
    recipe::{
        assets_dir, ChemicalStack, Cooking, FluidStack, Ingredient, ItemModel, ItemResult,
        MachineType, Product, Recipe, Washing,
    },
};

use super::{crystallizing::crystallize, Context, Emitter, Report};

const WASH_WATER: u64 = 5;

/// Clean slurry per crystal in the element processing chain.
const ELEMENT_SLURRY: u64 = 200;

fn wash(slurry: &str, water: FluidStack) -> Recipe {
    Recipe::Washing(Washing {
        fluid_input: water,
        chemical_input: ChemicalStack::new(1, local(&format!("dirty_{slurry}"))),
        output: Product::new(1, local(&format!("clean_{slurry}"))),
    })
}

pub fn washing(ctx: &Context) -> Result<Report> {
    let mut emitter = ctx.emitter(MachineType::Washing)?;
    let water = FluidStack::tag(WASH_WATER, "minecraft:water");

    for metal in &MATERIALS.washable_slurries {
        emitter.emit(&format!("{metal}_washing"), &wash(metal, water.clone()))?;
    }

    for slurry in &MATERIALS.chemlib_slurries {
        emitter.emit(&format!("{slurry}_slurry_washing"), &wash(slurry, water.clone()))?;
    }

    Ok(emitter.finish())
}

/// `wash_{e}` and `crystallize_{e}` for every slurry element.
pub fn processing(ctx: &Context) -> Result<Report> {
    let mut washing = ctx.emitter(MachineType::Washing)?;
    let mut crystallizing = ctx.emitter(MachineType::Crystallizing)?;
    let water = FluidStack::fluid(WASH_WATER, "minecraft:water");

    for element in &MATERIALS.slurry_elements {
        washing.emit(&format!("wash_{element}"), &wash(element, water.clone()))?;
        crystallizing.emit(
            &format!("crystallize_{element}"),
            &crystallize(element, ELEMENT_SLURRY),
        )?;
    }

    let mut report = washing.finish();
    report.merge(crystallizing.finish());
    Ok(report)
}

/// Furnace and blast furnace recipes turning crystals into ingots.
pub fn cooking(ctx: &Context) -> Result<Report> {
    let mut smelting = ctx.emitter(MachineType::Smelting)?;
    let mut blasting = ctx.emitter(MachineType::Blasting)?;

    for metal in &MATERIALS.crystal_metals {
        let cook = |cookingtime| Cooking {
            category: "misc".into(),
            cookingtime,
            experience: 0.7,
            ingredient: Ingredient {
                item: local(&format!("{metal}_crystal")),
            },
            result: ItemResult::counted(1, local(&format!("{metal}_ingot"))),
        };

        smelting.emit(&format!("{metal}_crystal_smelting"), &Recipe::Smelting(cook(200)))?;
        blasting.emit(&format!("{metal}_crystal_blasting"), &Recipe::Blasting(cook(100)))?;
    }

    let mut report = smelting.finish();
    report.merge(blasting.finish());
    Ok(report)
}

pub fn crystal_models(ctx: &Context) -> Result<Report> {
    let mut emitter = Emitter::new(assets_dir(&ctx.resources).join("models").join("item"))?;
    let model = ItemModel::layered(local("item/crystal_base"), local("item/crystal_overlay"));

    for metal in &MATERIALS.crystal_metals {
        emitter.emit(&format!("{metal}_crystal"), &model)?;
    }

    Ok(emitter.finish())
}
