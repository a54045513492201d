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

//! Typed recipe documents as the game reads them.

mod model;
mod stack;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{data::ChemicalType, ids::LOCAL};

pub use model::ItemModel;
pub use stack::{ChemicalStack, FluidStack, Ingredient, ItemResult, ItemStack, Product};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MachineType {
    ChemicalInfusing,
    Dissolution,
    Crystallizing,
    Washing,
    Rotary,
    Reaction,
    Smelting,
    Blasting,
}

impl MachineType {
    /// Value of the `type` field in documents for this machine.
    pub fn id(self) -> &'static str {
        match self {
            MachineType::ChemicalInfusing => "mekanism:chemical_infusing",
            MachineType::Dissolution => "mekanism:dissolution",
            MachineType::Crystallizing => "mekanism:crystallizing",
            MachineType::Washing => "mekanism:washing",
            MachineType::Rotary => "mekanism:rotary",
            MachineType::Reaction => "mekanism:reaction",
            MachineType::Smelting => "minecraft:smelting",
            MachineType::Blasting => "minecraft:blasting",
        }
    }

    /// Directory below `recipe/` the documents live in.
    pub fn dir(self) -> &'static str {
        let id = self.id();
        id.split_once(':').map_or(id, |(_, path)| path)
    }
}

/// `<resources>/data/chemlibmekanized/recipe/<machine>`
pub fn recipe_dir(resources: &Path, machine: MachineType) -> PathBuf {
    resources
        .join("data")
        .join(LOCAL)
        .join("recipe")
        .join(machine.dir())
}

/// `<resources>/assets/chemlibmekanized`
pub fn assets_dir(resources: &Path) -> PathBuf {
    resources.join("assets").join(LOCAL)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Recipe {
    #[serde(rename = "mekanism:chemical_infusing")]
    ChemicalInfusing(ChemicalInfusing),
    #[serde(rename = "mekanism:dissolution")]
    Dissolution(Dissolution),
    #[serde(rename = "mekanism:crystallizing")]
    Crystallizing(Crystallizing),
    #[serde(rename = "mekanism:washing")]
    Washing(Washing),
    #[serde(rename = "mekanism:rotary")]
    Rotary(Rotary),
    #[serde(rename = "mekanism:reaction")]
    Reaction(Reaction),
    #[serde(rename = "minecraft:smelting")]
    Smelting(Cooking),
    #[serde(rename = "minecraft:blasting")]
    Blasting(Cooking),
}

/// Two chemicals combined into a third.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalInfusing {
    pub left_input: ChemicalStack,
    pub right_input: ChemicalStack,
    pub output: Product,
}

/// An item dissolved in an acid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dissolution {
    pub item_input: ItemStack,
    pub chemical_input: ChemicalStack,
    pub output: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_tick_usage: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crystallizing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_type: Option<ChemicalType>,
    pub input: ChemicalStack,
    pub output: ItemResult,
}

/// Dirty slurry washed into clean slurry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Washing {
    pub fluid_input: FluidStack,
    pub chemical_input: ChemicalStack,
    pub output: Product,
}

/// Rotary condensentrator. Condensing fills all four sides, decondensing
/// only reads a fluid and writes a chemical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_input: Option<ChemicalStack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_output: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_input: Option<FluidStack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_output: Option<Product>,
}

/// Pressurized reaction chamber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_input: Option<ItemStack>,
    pub fluid_input: FluidStack,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_input: Option<ChemicalStack>,
    pub energy_required: f64,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_output: Option<ItemResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_output: Option<FluidStack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_output: Option<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cooking {
    pub category: String,
    pub cookingtime: u32,
    pub experience: f64,
    pub ingredient: Ingredient,
    pub result: ItemResult,
}
