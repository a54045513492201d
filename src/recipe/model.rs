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

/// A flat item model built from stacked texture layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemModel {
    pub parent: String,
    pub textures: Layers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layers {
    pub layer0: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer1: Option<String>,
}

impl ItemModel {
    /// A generated item with a tinted base and an untinted overlay.
    pub fn layered(base: impl Into<String>, overlay: impl Into<String>) -> Self {
        Self {
            parent: "minecraft:item/generated".into(),
            textures: Layers {
                layer0: base.into(),
                layer1: Some(overlay.into()),
            },
        }
    }
}
