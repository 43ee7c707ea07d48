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
use crate::customisation::Customisation;
use crate::dataset::Dataset;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    MatplotlibLine,
    MatplotlibBar,
    MatplotlibScatter,
    SeabornHeatmap,
    SeabornViolin,
    PlotlyInteractive,
    Unrecognised,
}
impl ChartKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "matplotlib_line" => ChartKind::MatplotlibLine,
            "matplotlib_bar" => ChartKind::MatplotlibBar,
            "matplotlib_scatter" => ChartKind::MatplotlibScatter,
            "seaborn_heatmap" => ChartKind::SeabornHeatmap,
            "seaborn_violin" => ChartKind::SeabornViolin,
            "plotly_interactive" => ChartKind::PlotlyInteractive,
            _ => ChartKind::Unrecognised,
        }
    }
}

// Generation is total: every input triple produces a script, with unknown
// chart ids routed to the default body rather than an error.
pub fn generate(
    chart: &ChartDescriptor,
    dataset: &Dataset,
    customisation: &Customisation,
) -> String {
    let kind = ChartKind::from_id(&chart.id);
    if kind == ChartKind::Unrecognised {
        warn!(chart_id = %chart.id, "Unrecognised chart id; using the default chart body");
    }
    let context = ScriptContext::new(dataset, customisation);
    let body = match kind {
        ChartKind::MatplotlibLine => context.line_body(),
        ChartKind::MatplotlibBar => context.bar_body(),
        ChartKind::MatplotlibScatter => context.scatter_body(),
        ChartKind::SeabornHeatmap => context.heatmap_body(),
        ChartKind::SeabornViolin => context.violin_body(),
        ChartKind::PlotlyInteractive => context.plotly_body(),
        ChartKind::Unrecognised => context.default_body(),
    };
    format!("{}{}", context.preamble(), body)
}

// All conditionals in the emitted script are resolved at generation time, so
// the output for a given (chart, dataset, customisation) triple is one fixed
// string of straight-line Python.
struct ScriptContext {
    name: String,
    rows: String,
    cols: String,
    values: Option<String>,
    line_colour: String,
    marker_colour: String,
    colormap: String,
    style: &'static str,
    plotly_template: &'static str,
    fig_width: String,
    fig_height: String,
    px_width: u32,
    px_height: u32,
    rotation: u32,
    sizes: String,
    xtick_labels: &'static str,
    ytick_labels: &'static str,
}
impl ScriptContext {
    fn new(dataset: &Dataset, customisation: &Customisation) -> Self {
        let weights = dataset.values.as_deref().filter(|v| !v.is_empty());
        let px_width = customisation.size.width();
        let px_height = customisation.size.height();
        ScriptContext {
            name: py_escape(&dataset.name),
            rows: py_label_list(&dataset.rows),
            cols: py_number_list(&dataset.cols),
            values: weights.map(py_number_list),
            line_colour: py_escape(customisation.palette.primary()),
            marker_colour: py_escape(customisation.palette.secondary()),
            colormap: py_escape(customisation.palette.colormap()),
            style: style_for_theme(&customisation.theme.id),
            plotly_template: plotly_template_for_theme(&customisation.theme.id),
            fig_width: py_float(f64::from(px_width) / 100.0),
            fig_height: py_float(f64::from(px_height) / 100.0),
            px_width,
            px_height,
            rotation: if dataset.rows.len() > 4 { 45 } else { 0 },
            sizes: if weights.is_some() {
                "values".to_string()
            } else {
                "[100] * len(cols)".to_string()
            },
            xtick_labels: if dataset.rows.len() == 1 {
                "rows"
            } else {
                "False"
            },
            ytick_labels: if dataset.rows.len() == dataset.cols.len() {
                "rows"
            } else {
                "False"
            },
        }
    }
    fn preamble(&self) -> String {
        let values_binding = match &self.values {
            Some(rendered) => format!("values = {rendered}\n"),
            None => String::new(),
        };
        format!(
            r#"import matplotlib.pyplot as plt
import seaborn as sns
import plotly.graph_objects as go
import pandas as pd
import numpy as np

# Data setup
rows = {rows}
cols = {cols}
{values_binding}df = pd.DataFrame({{'Category': rows, 'Values': cols}})

# Style and size
plt.style.use('{style}')
figure_size = ({width}, {height})

"#,
            rows = self.rows,
            cols = self.cols,
            style = self.style,
            width = self.fig_width,
            height = self.fig_height,
        )
    }
    fn line_body(&self) -> String {
        format!(
            r#"# Create line chart
plt.figure(figsize=figure_size)
plt.plot(rows, cols, marker='o', linewidth=3, markersize=8,
         color='{colour}', markerfacecolor='white', markeredgecolor='{colour}', markeredgewidth=2)
plt.title('{name}', fontsize=16, fontweight='bold', pad=20)
plt.xlabel('Categories', fontsize=12)
plt.ylabel('Values', fontsize=12)
plt.grid(True, alpha=0.3, linestyle='--')
plt.xticks(rotation={rotation})
plt.tight_layout()
plt.savefig('visualization.png', dpi=300, bbox_inches='tight')
plt.show()"#,
            colour = self.line_colour,
            name = self.name,
            rotation = self.rotation,
        )
    }
    fn bar_body(&self) -> String {
        format!(
            r#"# Create bar chart
plt.figure(figsize=figure_size)
bars = plt.bar(rows, cols, color='{colour}', alpha=0.8, edgecolor='white', linewidth=1.5)

# Add value labels on bars
for bar, value in zip(bars, cols):
    height = bar.get_height()
    plt.text(bar.get_x() + bar.get_width()/2., height + max(cols)*0.01,
            f'{{value:,}}', ha='center', va='bottom', fontweight='bold')

plt.title('{name}', fontsize=16, fontweight='bold', pad=20)
plt.xlabel('Categories', fontsize=12)
plt.ylabel('Values', fontsize=12)
plt.xticks(rotation={rotation})
plt.tight_layout()
plt.savefig('visualization.png', dpi=300, bbox_inches='tight')
plt.show()"#,
            colour = self.line_colour,
            name = self.name,
            rotation = self.rotation,
        )
    }
    fn scatter_body(&self) -> String {
        format!(
            r#"# Create scatter plot
plt.figure(figsize=figure_size)
x_values = range(len(rows))
plt.scatter(x_values, cols, s={sizes}, c='{colour}', alpha=0.7,
           edgecolors='white', linewidth=2)
plt.xticks(x_values, rows, rotation={rotation})

plt.title('{name}', fontsize=16, fontweight='bold', pad=20)
plt.xlabel('Categories', fontsize=12)
plt.ylabel('Values', fontsize=12)
plt.grid(True, alpha=0.3, linestyle='--')
plt.tight_layout()
plt.savefig('visualization.png', dpi=300, bbox_inches='tight')
plt.show()"#,
            sizes = self.sizes,
            colour = self.line_colour,
            name = self.name,
            rotation = self.rotation,
        )
    }
    // The matrix is always a single column; xtick_labels and ytick_labels
    // are resolved against that shape when the context is built.
    fn heatmap_body(&self) -> String {
        format!(
            r#"# Create heatmap
plt.figure(figsize=figure_size)
data_matrix = np.array(cols).reshape(-1, 1)
sns.heatmap(data_matrix, annot=True, cmap='{colormap}',
           xticklabels={xticks}, yticklabels={yticks},
           square=True, linewidths=0.5, cbar_kws={{"shrink": .8}})
plt.title('{name}', fontsize=16, fontweight='bold', pad=20)
plt.tight_layout()
plt.savefig('visualization.png', dpi=300, bbox_inches='tight')
plt.show()"#,
            colormap = self.colormap,
            xticks = self.xtick_labels,
            yticks = self.ytick_labels,
            name = self.name,
        )
    }
    fn violin_body(&self) -> String {
        format!(
            r#"# Create violin plot
plt.figure(figsize=figure_size)
sns.violinplot(data=df, x='Category', y='Values', palette='{colormap}')

plt.title('{name}', fontsize=16, fontweight='bold', pad=20)
plt.xticks(rotation={rotation})
plt.tight_layout()
plt.savefig('visualization.png', dpi=300, bbox_inches='tight')
plt.show()"#,
            colormap = self.colormap,
            name = self.name,
            rotation = self.rotation,
        )
    }
    fn plotly_body(&self) -> String {
        format!(
            r#"# Create interactive chart
fig = go.Figure()
fig.add_trace(go.Scatter(
    x=rows,
    y=cols,
    mode='lines+markers',
    name='{name}',
    line=dict(width=3, color='{line_colour}'),
    marker=dict(size=12, color='{marker_colour}',
               line=dict(width=2, color='white'))
))

fig.update_layout(
    title={{
        'text': '{name}',
        'x': 0.5,
        'xanchor': 'center',
        'font': {{'size': 18, 'family': 'Arial, sans-serif'}}
    }},
    xaxis_title='Categories',
    yaxis_title='Values',
    width={width},
    height={height},
    hovermode='closest',
    template='{template}'
)

fig.show()
# To save: fig.write_html("visualization.html")
# To save as image: fig.write_image("visualization.png")"#,
            name = self.name,
            line_colour = self.line_colour,
            marker_colour = self.marker_colour,
            width = self.px_width,
            height = self.px_height,
            template = self.plotly_template,
        )
    }
    fn default_body(&self) -> String {
        format!(
            r#"# Default chart
plt.figure()
plt.plot(rows, cols)
plt.title('{name}')
plt.tight_layout()
plt.savefig('visualization.png', dpi=300, bbox_inches='tight')
plt.show()"#,
            name = self.name,
        )
    }
}
fn style_for_theme(theme_id: &str) -> &'static str {
    match theme_id {
        "dark" => "dark_background",
        "minimal" => "grayscale",
        "vibrant" => "ggplot",
        _ => "default",
    }
}
fn plotly_template_for_theme(theme_id: &str) -> &'static str {
    if theme_id == "dark" {
        "plotly_dark"
    } else {
        "plotly_white"
    }
}
// Backslash first, so the escapes introduced here survive untouched.
fn py_escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
fn py_label_list(labels: &[String]) -> String {
    let quoted: Vec<String> = labels
        .iter()
        .map(|label| format!("'{}'", py_escape(label)))
        .collect();
    format!("[{}]", quoted.join(", "))
}
fn py_number_list(numbers: &[f64]) -> String {
    let rendered: Vec<String> = numbers.iter().map(f64::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
fn py_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
