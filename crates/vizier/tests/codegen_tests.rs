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

use vizier::catalogue::{Catalogue, Category, ChartDescriptor, Library};
use vizier::codegen::{generate, ChartKind};
use vizier::customisation::{Customisation, SizeSelection};
use vizier::dataset::Dataset;

fn dataset(name: &str, rows: &[&str], cols: &[f64]) -> Dataset {
    Dataset {
        name: name.to_string(),
        rows: rows.iter().map(|r| r.to_string()).collect(),
        cols: cols.to_vec(),
        values: None,
        description: None,
    }
}

fn chart(catalogue: &Catalogue, id: &str) -> ChartDescriptor {
    catalogue.get_chart(id).expect("builtin chart").clone()
}

#[test]
fn test_generation_is_deterministic() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_line");
    let data = dataset("Sales", &["A", "B", "C"], &[1.0, 2.0, 3.0]);
    let customisation = Customisation::default();

    let first = generate(&chart, &data, &customisation);
    let second = generate(&chart, &data, &customisation);
    assert_eq!(first, second);
}

#[test]
fn test_line_chart_medium_clean_example() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_line");
    let data = dataset("T", &["A", "B"], &[1.0, 2.0]);
    let code = generate(&chart, &data, &Customisation::default());

    assert!(code.contains("rows = ['A', 'B']"));
    assert!(code.contains("cols = [1, 2]"));
    assert!(code.contains("plt.style.use('default')"));
    assert!(code.contains("figure_size = (12.0, 8.0)"));
    assert!(code.contains("plt.figure(figsize=figure_size)"));
    assert!(code.contains("plt.title('T', fontsize=16, fontweight='bold', pad=20)"));
    assert!(code.contains("plt.savefig('visualization.png', dpi=300, bbox_inches='tight')"));
}

#[test]
fn test_bar_rotation_with_five_categories() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_bar");
    let data = dataset("Sales", &["A", "B", "C", "D", "E"], &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let code = generate(&chart, &data, &Customisation::default());

    assert!(code.contains("plt.xticks(rotation=45)"));
    assert!(!code.contains("rotation=0"));
}

#[test]
fn test_bar_rotation_with_three_categories() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_bar");
    let data = dataset("Sales", &["A", "B", "C"], &[1.0, 2.0, 3.0]);
    let code = generate(&chart, &data, &Customisation::default());

    assert!(code.contains("plt.xticks(rotation=0)"));
    assert!(!code.contains("rotation=45"));
}

#[test]
fn test_bar_value_labels_are_emitted() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_bar");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let code = generate(&chart, &data, &Customisation::default());

    assert!(code.contains("for bar, value in zip(bars, cols):"));
    assert!(code.contains("f'{value:,}'"));
}

#[test]
fn test_plotly_dimensions_match_selected_size() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "plotly_interactive");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let small = catalogue.get_size_preset("small").unwrap().clone();
    let customisation = Customisation::default().with_size(SizeSelection::Preset(small));

    let code = generate(&chart, &data, &customisation);
    assert!(code.contains("width=800,"));
    assert!(code.contains("height=600,"));
}

#[test]
fn test_plotly_dimensions_match_custom_size() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "plotly_interactive");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let customisation = Customisation::default().with_size(SizeSelection::custom(1000, 700));

    let code = generate(&chart, &data, &customisation);
    assert!(code.contains("width=1000,"));
    assert!(code.contains("height=700,"));
}

#[test]
fn test_plotly_uses_two_palette_entries() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "plotly_interactive");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let code = generate(&chart, &data, &Customisation::default());

    assert!(code.contains("line=dict(width=3, color='#1f77b4')"));
    assert!(code.contains("marker=dict(size=12, color='#ff7f0e'"));
    assert!(code.contains("template='plotly_white'"));
}

#[test]
fn test_unknown_chart_id_falls_back_to_default_body() {
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let unknown = ChartDescriptor {
        id: "nonexistent_chart".to_string(),
        name: "Unknown".to_string(),
        library: Library::Matplotlib,
        description: "not in the catalogue".to_string(),
        icon: "?".to_string(),
        category: Category::Basic,
    };

    let code = generate(&unknown, &data, &Customisation::default());
    assert!(code.contains("# Default chart"));
    assert!(code.contains("plt.plot(rows, cols)"));
    assert!(code.contains("import matplotlib.pyplot as plt"));
    assert!(!code.contains("# Create"));
}

#[test]
fn test_scatter_uses_weights_when_present() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_scatter");
    let mut data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    data.values = Some(vec![30.0, 60.0]);

    let code = generate(&chart, &data, &Customisation::default());
    assert!(code.contains("values = [30, 60]"));
    assert!(code.contains("s=values,"));
}

#[test]
fn test_scatter_falls_back_to_fixed_sizes_without_weights() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_scatter");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);

    let code = generate(&chart, &data, &Customisation::default());
    assert!(code.contains("s=[100] * len(cols),"));
    assert!(!code.contains("values = ["));
}

#[test]
fn test_heatmap_colormap_follows_palette() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "seaborn_heatmap");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let plasma = catalogue.get_palette("plasma").unwrap().clone();

    let code = generate(&chart, &data, &Customisation::default().with_palette(plasma));
    assert!(code.contains("cmap='plasma'"));

    let code = generate(&chart, &data, &Customisation::default());
    assert!(code.contains("cmap='viridis'"));
}

#[test]
fn test_heatmap_tick_labels_resolved_from_shape() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "seaborn_heatmap");

    let matched = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let code = generate(&chart, &matched, &Customisation::default());
    assert!(code.contains("data_matrix = np.array(cols).reshape(-1, 1)"));
    assert!(code.contains("xticklabels=False, yticklabels=rows,"));

    let mismatched = dataset("Sales", &["A", "B"], &[1.0, 2.0, 3.0]);
    let code = generate(&chart, &mismatched, &Customisation::default());
    assert!(code.contains("xticklabels=False, yticklabels=False,"));
}

#[test]
fn test_violin_palette_follows_colormap() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "seaborn_violin");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let magma = catalogue.get_palette("magma").unwrap().clone();

    let code = generate(&chart, &data, &Customisation::default().with_palette(magma));
    assert!(code.contains("sns.violinplot(data=df, x='Category', y='Values', palette='magma')"));
}

#[test]
fn test_dark_theme_selects_dark_styles() {
    let catalogue = Catalogue::builtin().unwrap();
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let dark = catalogue.get_theme("dark").unwrap().clone();
    let customisation = Customisation::default().with_theme(dark);

    let line = generate(&chart(&catalogue, "matplotlib_line"), &data, &customisation);
    assert!(line.contains("plt.style.use('dark_background')"));

    let plotly = generate(&chart(&catalogue, "plotly_interactive"), &data, &customisation);
    assert!(plotly.contains("template='plotly_dark'"));
}

#[test]
fn test_single_quotes_in_name_are_escaped() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_line");
    let data = dataset("Year's Sales", &["A", "B"], &[1.0, 2.0]);

    let code = generate(&chart, &data, &Customisation::default());
    assert!(code.contains("plt.title('Year\\'s Sales'"));
}

#[test]
fn test_newlines_in_labels_are_escaped() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_line");
    let data = Dataset::parse(r#"{"name": "Top\nLine", "rows": ["A\nB", "C\rD"], "cols": [1, 2]}"#)
        .unwrap();

    let code = generate(&chart, &data, &Customisation::default());
    assert!(code.contains(r"rows = ['A\nB', 'C\rD']"));
    assert!(code.contains(r"plt.title('Top\nLine'"));
    assert!(!code.contains("A\nB"));
}

#[test]
fn test_preamble_imports_and_frame_construction() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "seaborn_violin");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);

    let code = generate(&chart, &data, &Customisation::default());
    assert!(code.contains("import matplotlib.pyplot as plt"));
    assert!(code.contains("import seaborn as sns"));
    assert!(code.contains("import plotly.graph_objects as go"));
    assert!(code.contains("import pandas as pd"));
    assert!(code.contains("import numpy as np"));
    assert!(code.contains("df = pd.DataFrame({'Category': rows, 'Values': cols})"));
}

#[test]
fn test_fractional_figure_dimensions_are_preserved() {
    let catalogue = Catalogue::builtin().unwrap();
    let chart = chart(&catalogue, "matplotlib_line");
    let data = dataset("Sales", &["A", "B"], &[1.0, 2.0]);
    let customisation = Customisation::default().with_size(SizeSelection::custom(1250, 825));

    let code = generate(&chart, &data, &customisation);
    assert!(code.contains("figure_size = (12.5, 8.25)"));
}

#[test]
fn test_chart_kind_mapping() {
    assert_eq!(ChartKind::from_id("matplotlib_line"), ChartKind::MatplotlibLine);
    assert_eq!(ChartKind::from_id("seaborn_heatmap"), ChartKind::SeabornHeatmap);
    assert_eq!(ChartKind::from_id("plotly_interactive"), ChartKind::PlotlyInteractive);
    assert_eq!(ChartKind::from_id("bogus"), ChartKind::Unrecognised);
}
