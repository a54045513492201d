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

use clap::ValueEnum;
use serde_json::{json, Value};

use crate::{
    document::Document,
    ids::{is_mekanism_slurry, is_slurry},
    recipe::MachineType,
};

use super::{Fix, PatchError};

const SULFURIC_ACID: &str = "mekanism:sulfuric_acid";

const ALTERNATIVE_ACIDS: &[&str] = &[
    "chemlibmekanized:nitric_acid",
    "mekanism:hydrochloric_acid",
    "chemlibmekanized:hydrochloric_acid",
    "mekanism:hydrogen_chloride",
];

/// Output amount assumed when a document does not state one.
const DEFAULT_OUTPUT: u64 = 200;

/// Fixes and presets selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FixName {
    /// Sulfuric acid at 20 mB, the other acids at 10 mB.
    AcidAmounts,
    /// Remove `per_tick_usage`.
    StripPerTick,
    /// Add `per_tick_usage: false` where it is missing.
    PerTickFalse,
    /// Consume acid every tick: 2 mB sulfuric, 1 mB of any other chemical.
    PerTickRates,
    /// Write non-slurry outputs as `{amount, chemical}`.
    ChemicalOutputs,
    /// Write outputs as `{amount, id}`.
    IdOutputs,
    /// strip-per-tick, then acid-amounts. Mekanism ore recipes are left alone.
    Final,
    /// strip-per-tick, acid-amounts, then id-outputs, on every recipe.
    Revert,
}

impl FixName {
    pub fn fixes(self) -> &'static [&'static dyn Fix] {
        match self {
            FixName::AcidAmounts => &[&SkipOres(AcidAmounts)],
            FixName::StripPerTick => &[&StripPerTick],
            FixName::PerTickFalse => &[&PerTickFalse],
            FixName::PerTickRates => &[&PerTickRates],
            FixName::ChemicalOutputs => &[&ChemicalOutputs],
            FixName::IdOutputs => &[&IdOutputs],
            FixName::Final => &[&SkipOres(StripPerTick), &SkipOres(AcidAmounts)],
            FixName::Revert => &[&StripPerTick, &AcidAmounts, &IdOutputs],
        }
    }
}

fn output_id(doc: &Document) -> Option<&str> {
    doc.get("output")?.get("id")?.as_str()
}

fn input_chemical(doc: &Document) -> Option<&str> {
    doc.get("chemical_input")?.get("chemical")?.as_str()
}

/// The acid amount, a missing amount counting as zero.
fn input_amount(doc: &Document) -> f64 {
    doc.get("chemical_input")
        .and_then(|input| input.get("amount"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

fn set_input_amount(doc: &mut Document, amount: u64) {
    if let Some(Value::Object(input)) = doc.get_mut("chemical_input") {
        input.insert("amount".into(), amount.into());
    }
}

/// Mekanism's own ore slurries are processed the way Mekanism ships them.
fn exempt(doc: &Document) -> bool {
    output_id(doc).is_some_and(is_mekanism_slurry)
}

/// Runs the wrapped fix on everything except Mekanism ore recipes.
pub struct SkipOres<F>(pub F);

impl<F: Fix> Fix for SkipOres<F> {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn target(&self) -> MachineType {
        self.0.target()
    }

    fn check(&self, doc: &Document) -> Result<(), PatchError> {
        match exempt(doc) {
            true => Ok(()),
            false => self.0.check(doc),
        }
    }

    fn satisfied(&self, doc: &Document) -> bool {
        exempt(doc) || self.0.satisfied(doc)
    }

    fn apply(&self, doc: &mut Document) {
        if !exempt(doc) {
            self.0.apply(doc);
        }
    }
}

fn check_chemical_input(doc: &Document) -> Result<(), PatchError> {
    let Some(input) = doc.get("chemical_input").and_then(Value::as_object) else {
        return Err(PatchError::Shape("chemical_input is not an object".into()));
    };

    if !input.get("chemical").is_some_and(Value::is_string) {
        return Err(PatchError::Shape("chemical_input.chemical is not a string".into()));
    }

    match input.get("amount") {
        None | Some(Value::Number(_)) => Ok(()),
        Some(other) => Err(PatchError::Shape(format!(
            "chemical_input.amount is not a number: {other}"
        ))),
    }
}

fn check_output(doc: &Document) -> Result<&Document, PatchError> {
    doc.get("output")
        .and_then(Value::as_object)
        .ok_or_else(|| PatchError::Shape("output is not an object".into()))
}

/// Sulfuric acid at 20 mB and the alternative acids at 10 mB. Other
/// chemicals keep their amount.
pub struct AcidAmounts;

impl AcidAmounts {
    fn expected(doc: &Document) -> Option<u64> {
        match input_chemical(doc)? {
            SULFURIC_ACID => Some(20),
            acid if ALTERNATIVE_ACIDS.contains(&acid) => Some(10),
            _ => None,
        }
    }
}

impl Fix for AcidAmounts {
    fn name(&self) -> &'static str {
        "acid-amounts"
    }

    fn check(&self, doc: &Document) -> Result<(), PatchError> {
        check_chemical_input(doc)
    }

    fn satisfied(&self, doc: &Document) -> bool {
        Self::expected(doc).map_or(true, |amount| input_amount(doc) == amount as f64)
    }

    fn apply(&self, doc: &mut Document) {
        if let Some(amount) = Self::expected(doc) {
            set_input_amount(doc, amount);
        }
    }
}

pub struct StripPerTick;

impl Fix for StripPerTick {
    fn name(&self) -> &'static str {
        "strip-per-tick"
    }

    fn satisfied(&self, doc: &Document) -> bool {
        !doc.contains_key("per_tick_usage")
    }

    fn apply(&self, doc: &mut Document) {
        doc.shift_remove("per_tick_usage");
    }
}

pub struct PerTickFalse;

impl Fix for PerTickFalse {
    fn name(&self) -> &'static str {
        "per-tick-false"
    }

    fn check(&self, doc: &Document) -> Result<(), PatchError> {
        match doc.get("per_tick_usage") {
            None | Some(Value::Bool(_)) => Ok(()),
            Some(other) => Err(PatchError::Shape(format!(
                "per_tick_usage is not a boolean: {other}"
            ))),
        }
    }

    fn satisfied(&self, doc: &Document) -> bool {
        doc.contains_key("per_tick_usage")
    }

    fn apply(&self, doc: &mut Document) {
        doc.insert("per_tick_usage".into(), Value::Bool(false));
    }
}

pub struct PerTickRates;

impl PerTickRates {
    fn expected(doc: &Document) -> Option<u64> {
        match input_chemical(doc)? {
            SULFURIC_ACID => Some(2),
            _ => Some(1),
        }
    }
}

impl Fix for PerTickRates {
    fn name(&self) -> &'static str {
        "per-tick-rates"
    }

    fn check(&self, doc: &Document) -> Result<(), PatchError> {
        check_chemical_input(doc)
    }

    fn satisfied(&self, doc: &Document) -> bool {
        doc.get("per_tick_usage") == Some(&Value::Bool(true))
            && Self::expected(doc).map_or(true, |amount| input_amount(doc) == amount as f64)
    }

    fn apply(&self, doc: &mut Document) {
        if let Some(amount) = Self::expected(doc) {
            set_input_amount(doc, amount);
        }
        doc.insert("per_tick_usage".into(), Value::Bool(true));
    }
}

fn reshape_output(doc: &mut Document, from: &str, to: &str) {
    let Some(Value::Object(output)) = doc.get("output") else {
        return;
    };
    let Some(id) = output.get(from).cloned() else {
        return;
    };
    let amount = output.get("amount").cloned().unwrap_or_else(|| DEFAULT_OUTPUT.into());

    doc.insert("output".into(), json!({ "amount": amount, to: id }));
}

pub struct ChemicalOutputs;

impl Fix for ChemicalOutputs {
    fn name(&self) -> &'static str {
        "chemical-outputs"
    }

    fn check(&self, doc: &Document) -> Result<(), PatchError> {
        check_output(doc).map(|_| ())
    }

    fn satisfied(&self, doc: &Document) -> bool {
        match doc.get("output").and_then(|o| o.get("id")) {
            None => true,
            Some(id) => id.as_str().is_some_and(is_slurry),
        }
    }

    fn apply(&self, doc: &mut Document) {
        reshape_output(doc, "id", "chemical");
    }
}

pub struct IdOutputs;

impl Fix for IdOutputs {
    fn name(&self) -> &'static str {
        "id-outputs"
    }

    fn check(&self, doc: &Document) -> Result<(), PatchError> {
        match check_output(doc)?.get("chemical") {
            None | Some(Value::String(_)) => Ok(()),
            Some(other) => Err(PatchError::Shape(format!(
                "output.chemical is not a string: {other}"
            ))),
        }
    }

    fn satisfied(&self, doc: &Document) -> bool {
        doc.get("output")
            .and_then(|o| o.get("chemical"))
            .is_none()
    }

    fn apply(&self, doc: &mut Document) {
        reshape_output(doc, "chemical", "id");
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        document::read_json,
        patch::{patch_document, patch_file, run_pass, Outcome},
    };

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn dissolution(acid: &str, amount: u64, output: &str) -> Document {
        doc(json!({
            "type": "mekanism:dissolution",
            "item_input": {"count": 1, "item": "minecraft:coal"},
            "chemical_input": {"amount": amount, "chemical": acid},
            "output": {"amount": 1000, "id": output},
            "per_tick_usage": true
        }))
    }

    #[test]
    fn acid_amounts_are_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coal.json");
        let recipe = dissolution(SULFURIC_ACID, 5, "mekanism:carbon");
        fs::write(&path, serde_json::to_string(&recipe).unwrap()).unwrap();

        let fixes = FixName::AcidAmounts.fixes();
        assert_eq!(patch_file(&path, fixes, false).unwrap(), Outcome::Modified);
        let patched = read_json(&path).unwrap();
        assert_eq!(patched["chemical_input"]["amount"], 20);

        let modified = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(patch_file(&path, fixes, false).unwrap(), Outcome::Unchanged);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn alternative_acids_use_ten() {
        for acid in ALTERNATIVE_ACIDS {
            let mut recipe = dissolution(acid, 1000, "mekanism:carbon");
            assert_eq!(patch_document(&mut recipe, &[&AcidAmounts]).unwrap(), Outcome::Modified);
            assert_eq!(recipe["chemical_input"]["amount"], 10);
        }

        let mut other = dissolution("mekanism:hydrofluoric_acid", 1000, "mekanism:carbon");
        assert_eq!(patch_document(&mut other, &[&AcidAmounts]).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn mekanism_slurries_are_exempt() {
        let fixes = FixName::AcidAmounts.fixes();

        let mut recipe = dissolution(SULFURIC_ACID, 1, "mekanism:dirty_iron");
        assert_eq!(patch_document(&mut recipe, fixes).unwrap(), Outcome::Unchanged);
        assert_eq!(recipe["chemical_input"]["amount"], 1);

        let mut broken = doc(json!({
            "type": "mekanism:dissolution",
            "output": {"amount": 1000, "id": "mekanism:dirty_gold"}
        }));
        assert_eq!(patch_document(&mut broken, fixes).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn final_leaves_mekanism_ores_alone() {
        let mut ore = dissolution(SULFURIC_ACID, 1, "mekanism:dirty_iron");
        assert_eq!(
            patch_document(&mut ore, FixName::Final.fixes()).unwrap(),
            Outcome::Unchanged
        );
        assert_eq!(ore["per_tick_usage"], true);
        assert_eq!(ore["chemical_input"]["amount"], 1);

        assert_eq!(
            patch_document(&mut ore, FixName::Revert.fixes()).unwrap(),
            Outcome::Modified
        );
        assert!(!ore.contains_key("per_tick_usage"));
        assert_eq!(ore["chemical_input"]["amount"], 20);
    }

    #[test]
    fn malformed_chemical_input_is_rejected() {
        let mut recipe = doc(json!({
            "type": "mekanism:dissolution",
            "chemical_input": "mekanism:sulfuric_acid",
            "output": {"amount": 1000, "id": "mekanism:carbon"}
        }));
        assert!(matches!(
            patch_document(&mut recipe, &[&AcidAmounts]),
            Err(PatchError::Shape(_))
        ));
    }

    #[test]
    fn missing_amount_counts_as_zero() {
        let mut recipe = doc(json!({
            "type": "mekanism:dissolution",
            "chemical_input": {"chemical": SULFURIC_ACID},
            "output": {"amount": 1000, "id": "mekanism:carbon"}
        }));
        assert_eq!(patch_document(&mut recipe, &[&AcidAmounts]).unwrap(), Outcome::Modified);
        assert_eq!(recipe["chemical_input"]["amount"], 20);
    }

    #[test]
    fn per_tick_flags() {
        let mut recipe = dissolution(SULFURIC_ACID, 20, "mekanism:carbon");

        assert_eq!(patch_document(&mut recipe, &[&PerTickFalse]).unwrap(), Outcome::Unchanged);
        assert_eq!(recipe["per_tick_usage"], true);

        assert_eq!(patch_document(&mut recipe, &[&StripPerTick]).unwrap(), Outcome::Modified);
        assert!(!recipe.contains_key("per_tick_usage"));

        assert_eq!(patch_document(&mut recipe, &[&PerTickFalse]).unwrap(), Outcome::Modified);
        assert_eq!(recipe["per_tick_usage"], false);

        assert_eq!(patch_document(&mut recipe, &[&PerTickRates]).unwrap(), Outcome::Modified);
        assert_eq!(recipe["per_tick_usage"], true);
        assert_eq!(recipe["chemical_input"]["amount"], 2);

        recipe.insert("per_tick_usage".into(), json!("yes"));
        assert!(patch_document(&mut recipe, &[&PerTickFalse]).is_err());
    }

    #[test]
    fn per_tick_rates_cover_every_chemical() {
        let mut fluoride = dissolution("mekanism:hydrofluoric_acid", 1000, "mekanism:carbon");
        fluoride.shift_remove("per_tick_usage");
        assert_eq!(
            patch_document(&mut fluoride, &[&PerTickRates]).unwrap(),
            Outcome::Modified
        );
        assert_eq!(fluoride["chemical_input"]["amount"], 1);
        assert_eq!(fluoride["per_tick_usage"], true);

        let mut ore = dissolution(SULFURIC_ACID, 1000, "mekanism:dirty_iron");
        assert_eq!(patch_document(&mut ore, &[&PerTickRates]).unwrap(), Outcome::Modified);
        assert_eq!(ore["chemical_input"]["amount"], 2);

        assert_eq!(patch_document(&mut ore, &[&PerTickRates]).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn stripping_keeps_key_order() {
        let mut recipe = dissolution(SULFURIC_ACID, 20, "mekanism:carbon");
        recipe.insert("extra".into(), json!(1));
        patch_document(&mut recipe, &[&StripPerTick]).unwrap();

        assert_eq!(
            recipe.keys().collect::<Vec<_>>(),
            ["type", "item_input", "chemical_input", "output", "extra"]
        );
    }

    #[test]
    fn output_forms_round_trip() {
        let by_id = dissolution(SULFURIC_ACID, 20, "mekanism:carbon");
        let mut recipe = by_id.clone();

        assert_eq!(patch_document(&mut recipe, &[&ChemicalOutputs]).unwrap(), Outcome::Modified);
        assert_eq!(recipe["output"], json!({"amount": 1000, "chemical": "mekanism:carbon"}));

        assert_eq!(patch_document(&mut recipe, &[&IdOutputs]).unwrap(), Outcome::Modified);
        assert_eq!(recipe, by_id);
    }

    #[test]
    fn slurry_outputs_keep_ids() {
        for slurry in ["chemlibmekanized:dirty_zinc", "chemlibmekanized:slurry_zinc"] {
            let mut recipe = dissolution(SULFURIC_ACID, 20, slurry);
            assert_eq!(
                patch_document(&mut recipe, &[&ChemicalOutputs]).unwrap(),
                Outcome::Unchanged
            );
        }
    }

    #[test]
    fn missing_output_amount_defaults() {
        let mut recipe = doc(json!({
            "type": "mekanism:dissolution",
            "output": {"chemical": "mekanism:carbon"}
        }));
        patch_document(&mut recipe, &[&IdOutputs]).unwrap();
        assert_eq!(recipe["output"], json!({"amount": 200, "id": "mekanism:carbon"}));
    }

    #[test]
    fn revert_preset_over_a_directory() {
        let dir = tempfile::tempdir().unwrap();

        let mut chemical = dissolution(SULFURIC_ACID, 2, "mekanism:carbon");
        patch_document(&mut chemical, &[&ChemicalOutputs]).unwrap();
        fs::write(dir.path().join("a.json"), serde_json::to_string(&chemical).unwrap()).unwrap();
        fs::write(dir.path().join("b.json"), "not json").unwrap();
        let slurry = dissolution(SULFURIC_ACID, 100, "mekanism:dirty_iron");
        fs::write(dir.path().join("c.json"), serde_json::to_string(&slurry).unwrap()).unwrap();

        let fixes = FixName::Revert.fixes();
        let report = run_pass(dir.path(), |path| patch_file(path, fixes, false)).unwrap();
        assert_eq!(report.count(Outcome::Modified), 2);
        assert_eq!(report.failures().count(), 1);

        let a = read_json(&dir.path().join("a.json")).unwrap();
        assert_eq!(a["output"], json!({"amount": 1000, "id": "mekanism:carbon"}));
        assert_eq!(a["chemical_input"]["amount"], 20);
        assert!(!a.contains_key("per_tick_usage"));

        let c = read_json(&dir.path().join("c.json")).unwrap();
        assert_eq!(c["chemical_input"]["amount"], 20);
        assert!(!c.contains_key("per_tick_usage"));

        let again = run_pass(dir.path(), |path| patch_file(path, fixes, false)).unwrap();
        assert_eq!(again.count(Outcome::Modified), 0);
        assert_eq!(again.count(Outcome::Unchanged), 2);
    }
}
