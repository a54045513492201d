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

//! Recipe tables embedded at compile time.
//!
//! Every table is a JSON file under `assets/` and is parsed once on first use.
//! Quantities are kept in the units the tables were written in; the
//! generators decide how to scale them.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub static INFUSING: LazyLock<Batches<InfusingRecipe>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/infusing.json"))
        .expect("infusing.json should be parseable")
});

pub static DISSOLUTION: LazyLock<Batches<DissolutionRecipe>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/dissolution.json"))
        .expect("dissolution.json should be parseable")
});

pub static CRYSTALLIZING: LazyLock<Batches<CrystallizingRecipe>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/crystallizing.json"))
        .expect("crystallizing.json should be parseable")
});

pub static REACTION: LazyLock<Batches<ReactionRecipe>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/reaction.json"))
        .expect("reaction.json should be parseable")
});

pub static ROTARY: LazyLock<RotaryTable> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/rotary.json"))
        .expect("rotary.json should be parseable")
});

pub static MATERIALS: LazyLock<Materials> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/materials.json"))
        .expect("materials.json should be parseable")
});

/// A short chemical name paired with an amount in table units.
pub type Quantity = (String, f64);

/// An item id paired with a count.
pub type ItemCount = (String, u32);

/// A name paired with an amount that is already in millibuckets.
pub type Millibuckets = (String, u64);

#[derive(Debug, Deserialize)]
pub struct Batches<R> {
    pub batches: Vec<Batch<R>>,
}

#[derive(Debug, Deserialize)]
pub struct Batch<R> {
    pub name: String,
    pub title: String,
    /// Multiplier from table units to the amount written to disk. Dissolution
    /// batches apply it to the acid only.
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Chemicals known to be registered in game. Empty means unchecked.
    #[serde(default)]
    pub registered: Vec<String>,
    #[serde(default)]
    pub unregistered: Unregistered,
    pub recipes: Vec<R>,
}

fn default_scale() -> u32 {
    1000
}

/// What to do with a recipe that names a chemical missing from the batch's
/// registered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unregistered {
    #[default]
    Ignore,
    Warn,
    Skip,
}

/// Common view over table rows, used for availability checks and reporting.
pub trait Description {
    fn name(&self) -> &str;

    /// Short chemical names this row reads or produces.
    fn chemicals(&self) -> Vec<&str>;

    fn note(&self) -> Option<&str> {
        None
    }

    /// Reason this row is held back, if any.
    fn deferred(&self) -> Option<&str> {
        None
    }
}

impl<R: Description> Batch<R> {
    /// Chemicals used by `recipe` that the batch does not know to be registered.
    pub fn unregistered_in<'a>(&self, recipe: &'a R) -> Vec<&'a str> {
        if self.unregistered == Unregistered::Ignore || self.registered.is_empty() {
            return Vec::new();
        }

        recipe
            .chemicals()
            .into_iter()
            .filter(|c| !self.registered.iter().any(|r| r == c))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfusingRecipe {
    pub name: String,
    pub left: Quantity,
    pub right: Quantity,
    pub output: Quantity,
    pub note: Option<String>,
    pub deferred: Option<String>,
}

impl Description for InfusingRecipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn chemicals(&self) -> Vec<&str> {
        // only the reactants have to exist up front, the product is registered alongside
        vec![self.left.0.as_str(), self.right.0.as_str()]
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    fn deferred(&self) -> Option<&str> {
        self.deferred.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DissolutionRecipe {
    pub name: String,
    pub input: ItemCount,
    pub acid: Quantity,
    pub output: Quantity,
    pub note: Option<String>,
}

impl Description for DissolutionRecipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn chemicals(&self) -> Vec<&str> {
        vec![self.acid.0.as_str(), self.output.0.as_str()]
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChemicalType {
    Gas,
    Infusion,
    Slurry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrystallizingRecipe {
    pub name: String,
    pub chemical_type: ChemicalType,
    pub input: Quantity,
    pub output: String,
    pub count: Option<u32>,
    pub note: Option<String>,
}

impl Description for CrystallizingRecipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn chemicals(&self) -> Vec<&str> {
        vec![self.input.0.as_str()]
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionRecipe {
    pub name: String,
    pub item_input: Option<ItemCount>,
    /// Vanilla fluid name without namespace, e.g. `water`.
    pub fluid_input: Option<Millibuckets>,
    pub chemical_input: Option<Millibuckets>,
    pub energy: f64,
    pub duration: u32,
    pub item_output: Option<ItemCount>,
    pub fluid_output: Option<Millibuckets>,
    pub chemical_output: Option<Millibuckets>,
    pub note: Option<String>,
}

impl Description for ReactionRecipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn chemicals(&self) -> Vec<&str> {
        [&self.chemical_input, &self.chemical_output]
            .into_iter()
            .flatten()
            .map(|(c, _)| c.as_str())
            .collect()
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct RotaryTable {
    /// Gases that get a liquid counterpart, converted both ways.
    pub condensing: Vec<String>,
    /// Existing fluids turned into a gas.
    pub decondensing: Vec<Decondensing>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Decondensing {
    pub name: String,
    pub fluid: String,
    pub output: Millibuckets,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Materials {
    /// Metals and metalloids with a crystal, ingot and item model.
    pub crystal_metals: Vec<String>,
    /// Slurries washed under the `{name}_washing` recipe names.
    pub washable_slurries: Vec<String>,
    /// Slurries registered by this mod, washed as `{name}_slurry_washing`.
    pub chemlib_slurries: Vec<String>,
    /// Elements that get the full wash and crystallize chain and the acid dissolutions.
    pub slurry_elements: Vec<String>,
    pub dissolvable_elements: Vec<NamedMaterial>,
    pub translated_slurries: Vec<NamedMaterial>,
    pub colored_slurries: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedMaterial {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_parse() {
        assert!(!INFUSING.batches.is_empty());
        assert!(!DISSOLUTION.batches.is_empty());
        assert!(!CRYSTALLIZING.batches.is_empty());
        assert!(!REACTION.batches.is_empty());
        assert!(!ROTARY.condensing.is_empty());
        assert!(!MATERIALS.crystal_metals.is_empty());
    }

    #[test]
    fn recipe_names_are_unique_per_table() {
        fn check<R: Description>(batches: &Batches<R>) {
            let mut names = batches
                .batches
                .iter()
                .flat_map(|b| b.recipes.iter().map(|r| r.name()))
                .collect::<Vec<_>>();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total);
        }

        check(&INFUSING);
        check(&DISSOLUTION);
        check(&CRYSTALLIZING);
        check(&REACTION);
    }

    #[test]
    fn unregistered_respects_policy() {
        let recipe = InfusingRecipe {
            name: "test".into(),
            left: ("xenon".into(), 1.0),
            right: ("astatine".into(), 2.0),
            output: ("xenon_astatide".into(), 1.0),
            note: None,
            deferred: None,
        };

        let mut batch = Batch {
            name: "b".into(),
            title: "B".into(),
            scale: 1000,
            registered: vec!["xenon".into()],
            unregistered: Unregistered::Ignore,
            recipes: Vec::<InfusingRecipe>::new(),
        };
        assert!(batch.unregistered_in(&recipe).is_empty());

        batch.unregistered = Unregistered::Skip;
        assert_eq!(batch.unregistered_in(&recipe), vec!["astatine"]);
    }
}
