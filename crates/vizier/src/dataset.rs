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

use crate::error::{DatasetError, DatasetResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_DATASET_NAME: &str = "Custom Dataset";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub rows: Vec<String>,
    pub cols: Vec<f64>,
    pub values: Option<Vec<f64>>,
    pub description: Option<String>,
}
impl Dataset {
    pub fn parse(raw: &str) -> DatasetResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }
    pub fn from_value(value: &Value) -> DatasetResult<Self> {
        let object = value.as_object().ok_or(DatasetError::NotAnObject)?;
        let rows = required_sequence(object, "rows")?
            .iter()
            .map(label_from_value)
            .collect::<DatasetResult<Vec<String>>>()?;
        if rows.is_empty() {
            return Err(DatasetError::EmptySequence { field: "rows" });
        }
        let cols = required_sequence(object, "cols")?
            .iter()
            .map(|element| number_from_value(element, "cols"))
            .collect::<DatasetResult<Vec<f64>>>()?;
        if cols.is_empty() {
            return Err(DatasetError::EmptySequence { field: "cols" });
        }
        let values = optional_numbers(object, "values")?;
        let name = match object.get("name") {
            None | Some(Value::Null) => DEFAULT_DATASET_NAME.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => {
                return Err(DatasetError::WrongType {
                    field: "name",
                    expected: "a string",
                })
            }
        };
        let description = match object.get("description") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(DatasetError::WrongType {
                    field: "description",
                    expected: "a string",
                })
            }
        };
        if rows.len() != cols.len() {
            warn!(
                rows = rows.len(),
                cols = cols.len(),
                "Dataset row and column counts differ; accepting as supplied"
            );
        }
        if let Some(weights) = &values {
            if weights.len() != cols.len() {
                warn!(
                    values = weights.len(),
                    cols = cols.len(),
                    "Dataset weight count differs from column count; accepting as supplied"
                );
            }
        }
        Ok(Dataset {
            name,
            rows,
            cols,
            values,
            description,
        })
    }
    pub fn samples() -> Vec<Dataset> {
        vec![
            Dataset {
                name: "Quarterly Revenue".to_string(),
                rows: vec!["Q1", "Q2", "Q3", "Q4"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                cols: vec![120.0, 135.5, 148.0, 162.3],
                values: None,
                description: Some("Revenue per quarter in thousands".to_string()),
            },
            Dataset {
                name: "Monthly Temperature".to_string(),
                rows: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                cols: vec![3.2, 4.1, 8.6, 12.4, 17.0, 20.3],
                values: None,
                description: Some("Average temperature in degrees Celsius".to_string()),
            },
            Dataset {
                name: "City Population".to_string(),
                rows: vec!["London", "Paris", "Berlin", "Madrid", "Rome"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                cols: vec![8.9, 2.1, 3.6, 3.3, 2.8],
                values: Some(vec![180.0, 120.0, 140.0, 130.0, 110.0]),
                description: Some("Population in millions with marker weights".to_string()),
            },
        ]
    }
}
fn required_sequence<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> DatasetResult<&'a Vec<Value>> {
    let value = object
        .get(field)
        .ok_or(DatasetError::MissingField { field })?;
    value.as_array().ok_or(DatasetError::WrongType {
        field,
        expected: "an ordered sequence",
    })
}
fn label_from_value(value: &Value) -> DatasetResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(DatasetError::WrongType {
            field: "rows",
            expected: "a sequence of labels",
        }),
    }
}
fn number_from_value(value: &Value, field: &'static str) -> DatasetResult<f64> {
    value.as_f64().ok_or(DatasetError::WrongType {
        field,
        expected: "a sequence of numbers",
    })
}
fn optional_numbers(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> DatasetResult<Option<Vec<f64>>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(elements)) => {
            if elements.is_empty() {
                return Ok(None);
            }
            let numbers = elements
                .iter()
                .map(|element| number_from_value(element, field))
                .collect::<DatasetResult<Vec<f64>>>()?;
            Ok(Some(numbers))
        }
        Some(_) => Err(DatasetError::WrongType {
            field,
            expected: "a sequence of numbers",
        }),
    }
}
