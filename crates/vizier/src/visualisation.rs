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

use crate::catalogue::ChartDescriptor;
use crate::codegen;
use crate::contract::RenderRequest;
use crate::customisation::Customisation;
use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};

// A snapshot of one generation pass. Regeneration replaces the whole value;
// nothing is merged in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVisualisation {
    pub chart_type: ChartDescriptor,
    pub dataset: Dataset,
    #[serde(rename = "customization")]
    pub customisation: Customisation,
    pub python_code: String,
    pub chart_image: Option<String>,
}
impl GeneratedVisualisation {
    pub fn generate(
        chart_type: ChartDescriptor,
        dataset: Dataset,
        customisation: Customisation,
    ) -> Self {
        let python_code = codegen::generate(&chart_type, &dataset, &customisation);
        GeneratedVisualisation {
            chart_type,
            dataset,
            customisation,
            python_code,
            chart_image: None,
        }
    }
    pub fn with_image(mut self, chart_image: String) -> Self {
        self.chart_image = Some(chart_image);
        self
    }
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            code: self.python_code.clone(),
            dataset: self.dataset.clone(),
        }
    }
}
