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

use std::io::Write;
use vizier::{CatalogueError, ChartStudio, GenerateResponse, RenderResponse, VizierError};

const BROKEN_CATALOGUE: &str = r#"
charts:
  - id: broken
    name: "Broken"
    library: matplotlib
    description: "x"
    icon: "B"
    category: basic
palettes:
  - name: "Bad"
    id: bad
    colours: ["not-a-colour"]
themes: []
sizes: []
"#;

#[test]
fn test_studio_generates_a_visualisation() {
    let studio = ChartStudio::new().expect("studio with builtin catalogue");
    let dataset = studio
        .validate_dataset(r#"{"name": "Sales", "rows": ["A", "B"], "cols": [1, 2]}"#)
        .expect("valid dataset");

    let visualisation = studio
        .generate("matplotlib_bar", &dataset, None)
        .expect("generated visualisation");

    assert_eq!(visualisation.chart_type.id, "matplotlib_bar");
    assert!(visualisation.python_code.contains("# Create bar chart"));
    assert!(visualisation.chart_image.is_none());
}

#[test]
fn test_studio_applies_default_customisation_when_none_given() {
    let studio = ChartStudio::new().unwrap();
    let dataset = studio
        .validate_dataset(r#"{"rows": ["A", "B"], "cols": [1, 2]}"#)
        .unwrap();

    let visualisation = studio.generate("matplotlib_line", &dataset, None).unwrap();
    assert!(visualisation.python_code.contains("figure_size = (12.0, 8.0)"));
    assert!(visualisation.python_code.contains("plt.style.use('default')"));
}

#[test]
fn test_studio_rejects_unknown_chart_id() {
    let studio = ChartStudio::new().unwrap();
    let dataset = studio
        .validate_dataset(r#"{"rows": ["A"], "cols": [1]}"#)
        .unwrap();

    let error = studio
        .generate("nonexistent_chart", &dataset, None)
        .unwrap_err();

    assert!(matches!(
        error,
        VizierError::Catalogue(CatalogueError::ChartNotFound { .. })
    ));
    assert!(error.is_recoverable());
    assert_eq!(error.category(), "Catalogue");
}

#[test]
fn test_invalid_catalogue_file_is_rejected_at_startup() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(BROKEN_CATALOGUE.as_bytes())
        .expect("write catalogue");

    let error = ChartStudio::with_catalogue_file(file.path()).unwrap_err();
    assert!(matches!(
        error,
        VizierError::Catalogue(CatalogueError::InvalidDefinition { .. })
    ));
    assert!(error.to_string().contains("bad"));
}

#[test]
fn test_invalid_dataset_surfaces_as_recoverable_error() {
    let studio = ChartStudio::new().unwrap();
    let error = studio.validate_dataset("{{{").unwrap_err();

    assert!(error.is_recoverable());
    assert_eq!(error.category(), "Dataset");
}

#[test]
fn test_render_request_carries_code_and_dataset() {
    let studio = ChartStudio::new().unwrap();
    let dataset = studio
        .validate_dataset(r#"{"rows": ["A"], "cols": [1]}"#)
        .unwrap();
    let visualisation = studio.generate("seaborn_heatmap", &dataset, None).unwrap();

    let request = visualisation.render_request();
    assert_eq!(request.code, visualisation.python_code);
    assert_eq!(request.dataset, visualisation.dataset);
}

#[test]
fn test_with_image_replaces_the_snapshot() {
    let studio = ChartStudio::new().unwrap();
    let dataset = studio
        .validate_dataset(r#"{"rows": ["A"], "cols": [1]}"#)
        .unwrap();

    let visualisation = studio
        .generate("plotly_interactive", &dataset, None)
        .unwrap()
        .with_image("data:image/png;base64,AAAA".to_string());

    assert_eq!(
        visualisation.chart_image.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[test]
fn test_visualisation_wire_format_field_names() {
    let studio = ChartStudio::new().unwrap();
    let dataset = studio
        .validate_dataset(r#"{"rows": ["A"], "cols": [1]}"#)
        .unwrap();
    let visualisation = studio.generate("matplotlib_line", &dataset, None).unwrap();

    let value = serde_json::to_value(&visualisation).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("customization"));
    assert!(object.contains_key("python_code"));
    assert!(!object.contains_key("customisation"));
}

#[test]
fn test_render_response_constructors() {
    let ok = RenderResponse::succeeded("data:image/png;base64,AAAA".to_string());
    assert!(ok.success);
    assert!(ok.chart_image.is_some());
    assert!(ok.error_message.is_none());

    let failed = RenderResponse::failed("remote renderer unavailable".to_string());
    assert!(!failed.success);
    assert!(failed.chart_image.is_none());
    assert_eq!(
        failed.error_message.as_deref(),
        Some("remote renderer unavailable")
    );
}

#[test]
fn test_generate_response_constructors() {
    let ok = GenerateResponse::succeeded("plt.show()".to_string(), 0.004);
    assert!(ok.success);
    assert_eq!(ok.python_code.as_deref(), Some("plt.show()"));
    assert_eq!(ok.execution_time, Some(0.004));

    let failed = GenerateResponse::failed("Field 'rows' must be an ordered sequence".to_string());
    assert!(!failed.success);
    assert!(failed.python_code.is_none());
    assert!(failed.execution_time.is_none());
}
