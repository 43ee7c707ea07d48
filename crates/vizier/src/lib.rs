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

pub mod catalogue;
pub mod codegen;
pub mod contract;
pub mod customisation;
pub mod dataset;
pub mod error;
pub mod visualisation;

pub use catalogue::{
    Catalogue, CatalogueStats, Category, ChartDescriptor, Library, Palette, SizePreset, Theme,
};
pub use codegen::ChartKind;
pub use contract::{
    CustomisationRequest, GenerateRequest, GenerateResponse, RenderRequest, RenderResponse,
};
pub use customisation::{Customisation, SizeSelection};
pub use dataset::Dataset;
pub use error::{CatalogueError, DatasetError, Result, VizierError};
pub use visualisation::GeneratedVisualisation;

#[derive(Debug)]
pub struct ChartStudio {
    catalogue: Catalogue,
    customisation: Customisation,
}
impl ChartStudio {
    pub fn new() -> Result<Self> {
        let catalogue = Catalogue::builtin()?;
        catalogue
            .validate()
            .map_err(|reason| CatalogueError::InvalidDefinition { reason })?;
        Ok(Self {
            catalogue,
            customisation: Customisation::default(),
        })
    }
    pub fn with_catalogue_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let catalogue = Catalogue::from_yaml_file(path)?;
        catalogue
            .validate()
            .map_err(|reason| CatalogueError::InvalidDefinition { reason })?;
        Ok(Self {
            catalogue,
            customisation: Customisation::default(),
        })
    }
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
    pub fn default_customisation(&self) -> &Customisation {
        &self.customisation
    }
    pub fn validate_dataset(&self, raw: &str) -> Result<Dataset> {
        Ok(Dataset::parse(raw)?)
    }
    pub fn dataset_from_value(&self, value: &serde_json::Value) -> Result<Dataset> {
        Ok(Dataset::from_value(value)?)
    }
    pub fn generate(
        &self,
        chart_id: &str,
        dataset: &Dataset,
        customisation: Option<&Customisation>,
    ) -> Result<GeneratedVisualisation> {
        let chart = self.catalogue.get_chart(chart_id).cloned().ok_or_else(|| {
            CatalogueError::ChartNotFound {
                id: chart_id.to_string(),
            }
        })?;
        let customisation = customisation.unwrap_or(&self.customisation).clone();
        Ok(GeneratedVisualisation::generate(
            chart,
            dataset.clone(),
            customisation,
        ))
    }
    pub fn get_available_charts(&self) -> &[ChartDescriptor] {
        self.catalogue.get_all_charts()
    }
    pub fn get_charts_by_library(&self, library: Library) -> Vec<&ChartDescriptor> {
        self.catalogue.get_charts_by_library(library)
    }
}
impl Default for ChartStudio {
    fn default() -> Self {
        Self::new().expect("Failed to create default chart studio")
    }
}
