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

use std::{collections::HashMap, sync::LazyLock};

use crate::data::MATERIALS;

use super::LOCAL;

/// Chemicals Mekanism already registers. These always win over ours.
pub const MEKANISM: &[(&str, &str)] = &[
    // gases
    ("hydrogen", "mekanism:hydrogen"),
    ("oxygen", "mekanism:oxygen"),
    ("chlorine", "mekanism:chlorine"),
    ("fluorine", "mekanism:fluorine"),
    ("sodium", "mekanism:sodium"),
    ("lithium", "mekanism:lithium"),
    // compounds
    ("water_vapor", "mekanism:water_vapor"),
    ("steam", "mekanism:steam"),
    ("sulfur_dioxide", "mekanism:sulfur_dioxide"),
    ("sulfur_trioxide", "mekanism:sulfur_trioxide"),
    ("hydrogen_chloride", "mekanism:hydrogen_chloride"),
    ("sulfuric_acid", "mekanism:sulfuric_acid"),
    ("hydrofluoric_acid", "mekanism:hydrofluoric_acid"),
    // infusion types
    ("carbon", "mekanism:carbon"),
    ("redstone", "mekanism:redstone"),
    ("diamond", "mekanism:diamond"),
    ("gold", "mekanism:gold"),
    ("tin", "mekanism:tin"),
    ("refined_obsidian", "mekanism:refined_obsidian"),
    ("bio", "mekanism:bio"),
    ("fungi", "mekanism:fungi"),
    // special
    ("brine", "mekanism:brine"),
    ("ethene", "mekanism:ethene"),
    ("uranium_oxide", "mekanism:uranium_oxide"),
    ("uranium_hexafluoride", "mekanism:uranium_hexafluoride"),
    ("plutonium", "mekanism:plutonium"),
    ("polonium", "mekanism:polonium"),
    ("antimatter", "mekanism:antimatter"),
    ("nuclear_waste", "mekanism:nuclear_waste"),
    ("spent_nuclear_waste", "mekanism:spent_nuclear_waste"),
    ("fissile_fuel", "mekanism:fissile_fuel"),
];

/// Extra Mekanism names only the extended tables know about.
pub const MEKANISM_EXTENDED: &[(&str, &str)] = &[
    ("hydrogen_fluoride", "mekanism:hydrofluoric_acid"),
];

/// Ore slurries Mekanism ships with.
pub const MEKANISM_SLURRY_METALS: &[&str] =
    &["iron", "gold", "copper", "tin", "lead", "osmium", "uranium"];

/// Our chemicals that Mekanism does not have.
pub const CHEMLIB: &[(&str, &str)] = &[
    // noble gases
    ("helium", "chemlibmekanized:element_helium"),
    ("neon", "chemlibmekanized:element_neon"),
    ("argon", "chemlibmekanized:element_argon"),
    ("krypton", "chemlibmekanized:element_krypton"),
    ("xenon", "chemlibmekanized:element_xenon"),
    ("radon", "chemlibmekanized:element_radon"),
    // compounds
    ("ammonia", "chemlibmekanized:compound_ammonia"),
    ("methane", "chemlibmekanized:compound_methane"),
    ("ethane", "chemlibmekanized:compound_ethane"),
    ("propane", "chemlibmekanized:compound_propane"),
    ("butane", "chemlibmekanized:compound_butane"),
    ("acetylene", "chemlibmekanized:compound_acetylene"),
    ("ethylene", "chemlibmekanized:compound_ethylene"),
    ("hydrogen_sulfide", "chemlibmekanized:compound_hydrogen_sulfide"),
    ("nitrogen_dioxide", "chemlibmekanized:compound_nitrogen_dioxide"),
    ("carbon_monoxide", "chemlibmekanized:compound_carbon_monoxide"),
    ("nitric_oxide", "chemlibmekanized:compound_nitric_oxide"),
    ("carbon_dioxide", "chemlibmekanized:compound_carbon_dioxide"),
    // Mekanism has no standalone nitrogen gas
    ("nitrogen", "chemlibmekanized:element_nitrogen"),
];

/// Elements added to the chemical table in the extended revision.
pub const CHEMLIB_EXTENDED: &[(&str, &str)] = &[
    ("sulfur", "chemlibmekanized:element_sulfur"),
    ("phosphorus", "chemlibmekanized:element_phosphorus"),
    ("silicon", "chemlibmekanized:element_silicon"),
    ("boron", "chemlibmekanized:element_boron"),
    ("iodine", "chemlibmekanized:element_iodine"),
    ("arsenic", "chemlibmekanized:element_arsenic"),
    ("germanium", "chemlibmekanized:element_germanium"),
    ("selenium", "chemlibmekanized:element_selenium"),
    ("tellurium", "chemlibmekanized:element_tellurium"),
];

/// Compounds registered after the first release. Acids keep their bare name.
pub const NEW_COMPOUNDS: &[(&str, &str)] = &[
    ("nitric_acid", "chemlibmekanized:nitric_acid"),
    ("hydrochloric_acid", "chemlibmekanized:hydrochloric_acid"),
    ("nitrous_oxide", "chemlibmekanized:compound_nitrous_oxide"),
    ("hydrogen_peroxide", "chemlibmekanized:compound_hydrogen_peroxide"),
    ("hydrazine", "chemlibmekanized:compound_hydrazine"),
    ("ozone", "chemlibmekanized:compound_ozone"),
    ("carbon_disulfide", "chemlibmekanized:compound_carbon_disulfide"),
    ("carbonyl_sulfide", "chemlibmekanized:compound_carbonyl_sulfide"),
    ("xenon_difluoride", "chemlibmekanized:compound_xenon_difluoride"),
    ("xenon_tetrafluoride", "chemlibmekanized:compound_xenon_tetrafluoride"),
    ("krypton_difluoride", "chemlibmekanized:compound_krypton_difluoride"),
    ("phosphine", "chemlibmekanized:compound_phosphine"),
    ("phosphorus_trichloride", "chemlibmekanized:compound_phosphorus_trichloride"),
    ("borane", "chemlibmekanized:compound_borane"),
    ("boron_trifluoride", "chemlibmekanized:compound_boron_trifluoride"),
    ("silicon_tetrafluoride", "chemlibmekanized:compound_silicon_tetrafluoride"),
    ("silicon_tetrachloride", "chemlibmekanized:compound_silicon_tetrachloride"),
    ("chlorine_trifluoride", "chemlibmekanized:compound_chlorine_trifluoride"),
    ("iodine_pentafluoride", "chemlibmekanized:compound_iodine_pentafluoride"),
];

pub type Table = HashMap<String, String>;

fn index(entries: &[&[(&str, &str)]]) -> Table {
    entries
        .iter()
        .flat_map(|e| e.iter())
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn slurries<'a>(namespace: &str, metals: impl IntoIterator<Item = &'a str>) -> Table {
    metals
        .into_iter()
        .flat_map(|m| {
            ["dirty", "clean"].map(|state| {
                let path = format!("{state}_{m}");
                (path.clone(), format!("{namespace}:{path}"))
            })
        })
        .collect()
}

pub static CLASSIC_MEKANISM: LazyLock<Table> = LazyLock::new(|| index(&[MEKANISM]));

pub static CLASSIC_CHEMLIB: LazyLock<Table> = LazyLock::new(|| index(&[CHEMLIB]));

pub static EXTENDED_MEKANISM: LazyLock<Table> = LazyLock::new(|| {
    let mut table = index(&[MEKANISM, MEKANISM_EXTENDED]);
    table.extend(slurries("mekanism", MEKANISM_SLURRY_METALS.iter().copied()));
    table
});

pub static EXTENDED_SLURRIES: LazyLock<Table> = LazyLock::new(|| {
    slurries(
        LOCAL,
        MATERIALS
            .chemlib_slurries
            .iter()
            .chain(MATERIALS.slurry_elements.iter())
            .map(String::as_str),
    )
});

pub static EXTENDED_CHEMLIB: LazyLock<Table> =
    LazyLock::new(|| index(&[CHEMLIB, CHEMLIB_EXTENDED]));

pub static EXTENDED_COMPOUNDS: LazyLock<Table> = LazyLock::new(|| index(&[NEW_COMPOUNDS]));
