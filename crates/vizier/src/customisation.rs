// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::catalogue::{Palette, SizePreset, Theme};
use serde::{Deserialize, Serialize};

pub const MIN_CUSTOM_DIMENSION: u32 = 200;
pub const MAX_CUSTOM_DIMENSION: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSelection {
    Preset(SizePreset),
    Custom { width: u32, height: u32 },
}
impl SizeSelection {
    pub fn custom(width: u32, height: u32) -> Self {
        SizeSelection::Custom {
            width: width.clamp(MIN_CUSTOM_DIMENSION, MAX_CUSTOM_DIMENSION),
            height: height.clamp(MIN_CUSTOM_DIMENSION, MAX_CUSTOM_DIMENSION),
        }
    }
    pub fn width(&self) -> u32 {
        match self {
            SizeSelection::Preset(preset) => preset.width,
            SizeSelection::Custom { width, .. } => *width,
        }
    }
    pub fn height(&self) -> u32 {
        match self {
            SizeSelection::Preset(preset) => preset.height,
            SizeSelection::Custom { height, .. } => *height,
        }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customisation {
    pub palette: Palette,
    pub theme: Theme,
    pub size: SizeSelection,
}
impl Customisation {
    pub fn new(palette: Palette, theme: Theme, size: SizeSelection) -> Self {
        Customisation {
            palette,
            theme,
            size,
        }
    }
    // Fields change by whole-value replacement only.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
    pub fn with_size(mut self, size: SizeSelection) -> Self {
        self.size = size;
        self
    }
    pub fn validate(&self) -> Result<(), String> {
        if self.palette.id.is_empty() {
            return Err("Palette id must not be empty".to_string());
        }
        if self.palette.colours.is_empty() {
            return Err(format!("Palette '{}' has no colours", self.palette.id));
        }
        if self.theme.id.is_empty() {
            return Err("Theme id must not be empty".to_string());
        }
        let (width, height) = (self.size.width(), self.size.height());
        if width == 0 || height == 0 {
            return Err("Size dimensions must be positive".to_string());
        }
        if let SizeSelection::Custom { width, height } = self.size {
            if !(MIN_CUSTOM_DIMENSION..=MAX_CUSTOM_DIMENSION).contains(&width)
                || !(MIN_CUSTOM_DIMENSION..=MAX_CUSTOM_DIMENSION).contains(&height)
            {
                return Err(format!(
                    "Custom dimensions must be between {MIN_CUSTOM_DIMENSION} and {MAX_CUSTOM_DIMENSION} pixels"
                ));
            }
        }
        Ok(())
    }
}
impl Default for Customisation {
    fn default() -> Self {
        Customisation {
            palette: Palette {
                name: "Default".to_string(),
                id: "default".to_string(),
                colours: vec![
                    "#1f77b4".to_string(),
                    "#ff7f0e".to_string(),
                    "#2ca02c".to_string(),
                ],
            },
            theme: Theme {
                name: "Clean".to_string(),
                id: "clean".to_string(),
                description: "White background with the stock matplotlib look".to_string(),
            },
            size: SizeSelection::Preset(SizePreset {
                name: "Medium".to_string(),
                id: "medium".to_string(),
                width: 1200,
                height: 800,
            }),
        }
    }
}
