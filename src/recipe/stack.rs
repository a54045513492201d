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

use serde::{Deserialize, Serialize};

/// An amount of a gas, infusion type or slurry consumed by a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalStack {
    pub amount: u64,
    pub chemical: String,
}

impl ChemicalStack {
    pub fn new(amount: u64, chemical: impl Into<String>) -> Self {
        Self {
            amount,
            chemical: chemical.into(),
        }
    }
}

/// An amount of a chemical or fluid produced by a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub amount: u64,
    pub id: String,
}

impl Product {
    pub fn new(amount: u64, id: impl Into<String>) -> Self {
        Self {
            amount,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub count: u32,
    pub item: String,
}

impl ItemStack {
    pub fn new(count: u32, item: impl Into<String>) -> Self {
        Self {
            count,
            item: item.into(),
        }
    }
}

/// An item result. A count of one is left implicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub id: String,
}

impl ItemResult {
    pub fn new(count: u32, id: impl Into<String>) -> Self {
        Self {
            count: (count > 1).then_some(count),
            id: id.into(),
        }
    }

    /// A result that always spells out its count.
    pub fn counted(count: u32, id: impl Into<String>) -> Self {
        Self {
            count: Some(count),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidStack {
    pub amount: u64,
    #[serde(flatten)]
    pub fluid: FluidRef,
}

/// A single fluid or every fluid in a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidRef {
    #[serde(rename = "fluid")]
    Fluid(String),
    #[serde(rename = "tag")]
    Tag(String),
}

impl FluidStack {
    pub fn fluid(amount: u64, id: impl Into<String>) -> Self {
        Self {
            amount,
            fluid: FluidRef::Fluid(id.into()),
        }
    }

    pub fn tag(amount: u64, tag: impl Into<String>) -> Self {
        Self {
            amount,
            fluid: FluidRef::Tag(tag.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
}
