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

use crate::catalogue::{
    Catalogue, CUSTOM_SIZE_ID, DEFAULT_PALETTE_ID, DEFAULT_SIZE_ID, DEFAULT_THEME_ID,
};
use crate::customisation::{Customisation, SizeSelection};
use crate::dataset::Dataset;
use crate::error::{CatalogueError, CatalogueResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request handed to the external render service: the generated script plus
// the dataset it was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub code: String,
    pub dataset: Dataset,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderResponse {
    pub success: bool,
    pub chart_image: Option<String>,
    pub error_message: Option<String>,
}
impl RenderResponse {
    pub fn succeeded(chart_image: String) -> Self {
        RenderResponse {
            success: true,
            chart_image: Some(chart_image),
            error_message: None,
        }
    }
    pub fn failed(error_message: String) -> Self {
        RenderResponse {
            success: false,
            chart_image: None,
            error_message: Some(error_message),
        }
    }
}
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub dataset: Value,
    pub chart_type_id: String,
    pub customization: Option<CustomisationRequest>,
}
// Catalogue ids as sent by a client; resolved against the loaded catalogue
// before generation. Missing fields fall back to the stock selections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomisationRequest {
    pub palette: Option<String>,
    pub theme: Option<String>,
    pub size: Option<String>,
    pub custom_width: Option<u32>,
    pub custom_height: Option<u32>,
}
impl CustomisationRequest {
    pub fn resolve(&self, catalogue: &Catalogue) -> CatalogueResult<Customisation> {
        let palette_id = self.palette.as_deref().unwrap_or(DEFAULT_PALETTE_ID);
        let palette = catalogue.get_palette(palette_id).cloned().ok_or_else(|| {
            CatalogueError::PaletteNotFound {
                id: palette_id.to_string(),
            }
        })?;
        let theme_id = self.theme.as_deref().unwrap_or(DEFAULT_THEME_ID);
        let theme = catalogue.get_theme(theme_id).cloned().ok_or_else(|| {
            CatalogueError::ThemeNotFound {
                id: theme_id.to_string(),
            }
        })?;
        let size_id = self.size.as_deref().unwrap_or(DEFAULT_SIZE_ID);
        let preset = catalogue.get_size_preset(size_id).cloned().ok_or_else(|| {
            CatalogueError::SizeNotFound {
                id: size_id.to_string(),
            }
        })?;
        let size = if size_id == CUSTOM_SIZE_ID {
            let width = self.custom_width.unwrap_or(preset.width);
            let height = self.custom_height.unwrap_or(preset.height);
            SizeSelection::custom(width, height)
        } else {
            SizeSelection::Preset(preset)
        };
        Ok(Customisation::new(palette, theme, size))
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub chart_image: Option<String>,
    pub python_code: Option<String>,
    pub error_message: Option<String>,
    pub execution_time: Option<f64>,
}
impl GenerateResponse {
    pub fn succeeded(python_code: String, execution_time: f64) -> Self {
        GenerateResponse {
            success: true,
            chart_image: None,
            python_code: Some(python_code),
            error_message: None,
            execution_time: Some(execution_time),
        }
    }
    pub fn failed(error_message: String) -> Self {
        GenerateResponse {
            success: false,
            chart_image: None,
            python_code: None,
            error_message: Some(error_message),
            execution_time: None,
        }
    }
}
