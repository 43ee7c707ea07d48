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

use thiserror::Error;
#[derive(Error, Debug)]
pub enum VizierError {
    #[error("Dataset validation error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to parse dataset input: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("Dataset input must be an object with 'rows' and 'cols' fields")]
    NotAnObject,
    #[error("Required field '{field}' is missing from the dataset")]
    MissingField { field: &'static str },
    #[error("Field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Field '{field}' must not be empty")]
    EmptySequence { field: &'static str },
}
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Failed to parse catalogue YAML: {source}")]
    YamlParse {
        #[from]
        source: serde_yaml::Error,
    },
    #[error("Failed to read catalogue file '{path}': {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Duplicate chart id found: '{id}'")]
    DuplicateChartId { id: String },
    #[error("Chart '{id}' not found in catalogue")]
    ChartNotFound { id: String },
    #[error("Palette '{id}' not found in catalogue")]
    PaletteNotFound { id: String },
    #[error("Theme '{id}' not found in catalogue")]
    ThemeNotFound { id: String },
    #[error("Size preset '{id}' not found in catalogue")]
    SizeNotFound { id: String },
    #[error("Invalid catalogue definition: {reason}")]
    InvalidDefinition { reason: String },
}
pub type Result<T> = std::result::Result<T, VizierError>;
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;
pub type CatalogueResult<T> = std::result::Result<T, CatalogueError>;
impl VizierError {
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VizierError::Dataset(_)
                | VizierError::Catalogue(CatalogueError::ChartNotFound { .. })
                | VizierError::Catalogue(CatalogueError::PaletteNotFound { .. })
                | VizierError::Catalogue(CatalogueError::ThemeNotFound { .. })
                | VizierError::Catalogue(CatalogueError::SizeNotFound { .. })
        )
    }
    pub fn category(&self) -> &'static str {
        match self {
            VizierError::Dataset(_) => "Dataset",
            VizierError::Catalogue(_) => "Catalogue",
            VizierError::Io(_) => "I/O",
            VizierError::Serialisation(_) => "Serialisation",
        }
    }
}
impl DatasetError {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DatasetError::MissingField { field }
            | DatasetError::WrongType { field, .. }
            | DatasetError::EmptySequence { field } => Some(field),
            DatasetError::Parse { .. } | DatasetError::NotAnObject => None,
        }
    }
}
