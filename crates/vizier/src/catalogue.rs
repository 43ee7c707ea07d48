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

use crate::error::{CatalogueError, CatalogueResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_PALETTE_ID: &str = "default";
pub const DEFAULT_THEME_ID: &str = "clean";
pub const DEFAULT_SIZE_ID: &str = "medium";
pub const CUSTOM_SIZE_ID: &str = "custom";
pub const FALLBACK_COLOUR: &str = "#1f77b4";

static HEX_COLOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex colour pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    Matplotlib,
    Seaborn,
    Plotly,
}
impl Library {
    pub fn as_str(&self) -> &'static str {
        match self {
            Library::Matplotlib => "matplotlib",
            Library::Seaborn => "seaborn",
            Library::Plotly => "plotly",
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Statistical,
    Interactive,
}
impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Statistical => "statistical",
            Category::Interactive => "interactive",
        }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub id: String,
    pub name: String,
    pub library: Library,
    pub description: String,
    pub icon: String,
    pub category: Category,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub id: String,
    pub colours: Vec<String>,
}
impl Palette {
    pub fn primary(&self) -> &str {
        self.colours
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOUR)
    }
    pub fn secondary(&self) -> &str {
        self.colours
            .get(1)
            .map(String::as_str)
            .unwrap_or_else(|| self.primary())
    }
    // Palette ids double as matplotlib/seaborn colormap names; the default
    // palette is the one id without a matching colormap.
    pub fn colormap(&self) -> &str {
        if self.id == DEFAULT_PALETTE_ID {
            "viridis"
        } else {
            &self.id
        }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub id: String,
    pub description: String,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizePreset {
    pub name: String,
    pub id: String,
    pub width: u32,
    pub height: u32,
}
#[derive(Debug, Serialize, Deserialize)]
struct CatalogueConfig {
    charts: Vec<ChartDescriptor>,
    palettes: Vec<Palette>,
    themes: Vec<Theme>,
    sizes: Vec<SizePreset>,
}
#[derive(Debug)]
pub struct Catalogue {
    charts: Vec<ChartDescriptor>,
    palettes: Vec<Palette>,
    themes: Vec<Theme>,
    sizes: Vec<SizePreset>,
    chart_by_id: HashMap<String, ChartDescriptor>,
    charts_by_library: HashMap<Library, Vec<usize>>,
}
impl Catalogue {
    pub fn builtin() -> CatalogueResult<Self> {
        let embedded: &str = include_str!("config/catalogue.yml");
        Self::from_yaml_string(embedded)
    }
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> CatalogueResult<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|source| CatalogueError::ConfigFile {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        Self::from_yaml_string(&content)
    }
    pub fn from_yaml_string(yaml_content: &str) -> CatalogueResult<Self> {
        let config: CatalogueConfig = serde_yaml::from_str(yaml_content)?;
        let mut chart_by_id = HashMap::new();
        let mut charts_by_library: HashMap<Library, Vec<usize>> = HashMap::new();
        for (idx, chart) in config.charts.iter().enumerate() {
            if chart_by_id
                .insert(chart.id.clone(), chart.clone())
                .is_some()
            {
                return Err(CatalogueError::DuplicateChartId {
                    id: chart.id.clone(),
                });
            }
            charts_by_library
                .entry(chart.library)
                .or_default()
                .push(idx);
        }
        Ok(Catalogue {
            charts: config.charts,
            palettes: config.palettes,
            themes: config.themes,
            sizes: config.sizes,
            chart_by_id,
            charts_by_library,
        })
    }
    pub fn get_all_charts(&self) -> &[ChartDescriptor] {
        &self.charts
    }
    pub fn get_chart(&self, id: &str) -> Option<&ChartDescriptor> {
        self.chart_by_id.get(id)
    }
    pub fn get_charts_by_library(&self, library: Library) -> Vec<&ChartDescriptor> {
        if let Some(indices) = self.charts_by_library.get(&library) {
            indices.iter().map(|&idx| &self.charts[idx]).collect()
        } else {
            Vec::new()
        }
    }
    pub fn get_charts_by_category(&self, category: Category) -> Vec<&ChartDescriptor> {
        self.charts
            .iter()
            .filter(|chart| chart.category == category)
            .collect()
    }
    pub fn get_libraries(&self) -> Vec<String> {
        self.charts_by_library
            .keys()
            .map(|l| l.as_str().to_string())
            .collect()
    }
    pub fn get_all_palettes(&self) -> &[Palette] {
        &self.palettes
    }
    pub fn get_palette(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }
    pub fn get_all_themes(&self) -> &[Theme] {
        &self.themes
    }
    pub fn get_theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }
    pub fn get_all_size_presets(&self) -> &[SizePreset] {
        &self.sizes
    }
    pub fn get_size_preset(&self, id: &str) -> Option<&SizePreset> {
        self.sizes.iter().find(|s| s.id == id)
    }
    pub fn stats(&self) -> CatalogueStats {
        let mut basic_count = 0;
        let mut statistical_count = 0;
        let mut interactive_count = 0;
        for chart in &self.charts {
            match chart.category {
                Category::Basic => basic_count += 1,
                Category::Statistical => statistical_count += 1,
                Category::Interactive => interactive_count += 1,
            }
        }
        let libraries = self.get_libraries();
        CatalogueStats {
            total_charts: self.charts.len(),
            total_libraries: libraries.len(),
            libraries,
            total_palettes: self.palettes.len(),
            total_themes: self.themes.len(),
            total_size_presets: self.sizes.len(),
            basic_count,
            statistical_count,
            interactive_count,
        }
    }
    pub fn validate(&self) -> Result<(), String> {
        if self.charts.is_empty() {
            return Err("Catalogue has no charts".to_string());
        }
        let mut ids = std::collections::HashSet::new();
        for chart in &self.charts {
            if !ids.insert(&chart.id) {
                return Err(format!("Duplicate chart id: {}", chart.id));
            }
            if chart.id.is_empty() || chart.name.is_empty() {
                return Err("Chart with empty id or name".to_string());
            }
            if chart.description.is_empty() {
                return Err(format!("Chart '{}' has empty description", chart.id));
            }
        }
        let mut palette_ids = std::collections::HashSet::new();
        for palette in &self.palettes {
            if !palette_ids.insert(&palette.id) {
                return Err(format!("Duplicate palette id: {}", palette.id));
            }
            if palette.colours.is_empty() {
                return Err(format!("Palette '{}' has no colours", palette.id));
            }
            for colour in &palette.colours {
                if !HEX_COLOUR.is_match(colour) {
                    return Err(format!(
                        "Palette '{}' has invalid colour '{}'",
                        palette.id, colour
                    ));
                }
            }
        }
        let mut theme_ids = std::collections::HashSet::new();
        for theme in &self.themes {
            if !theme_ids.insert(&theme.id) {
                return Err(format!("Duplicate theme id: {}", theme.id));
            }
            if theme.id.is_empty() || theme.name.is_empty() {
                return Err("Theme with empty id or name".to_string());
            }
        }
        let mut size_ids = std::collections::HashSet::new();
        for size in &self.sizes {
            if !size_ids.insert(&size.id) {
                return Err(format!("Duplicate size preset id: {}", size.id));
            }
            if size.width == 0 || size.height == 0 {
                return Err(format!("Size preset '{}' has a zero dimension", size.id));
            }
        }
        if self.get_palette(DEFAULT_PALETTE_ID).is_none() {
            return Err(format!("Missing default palette '{DEFAULT_PALETTE_ID}'"));
        }
        if self.get_theme(DEFAULT_THEME_ID).is_none() {
            return Err(format!("Missing default theme '{DEFAULT_THEME_ID}'"));
        }
        if self.get_size_preset(DEFAULT_SIZE_ID).is_none() {
            return Err(format!("Missing default size preset '{DEFAULT_SIZE_ID}'"));
        }
        Ok(())
    }
}
#[derive(Debug)]
pub struct CatalogueStats {
    pub total_charts: usize,
    pub total_libraries: usize,
    pub libraries: Vec<String>,
    pub total_palettes: usize,
    pub total_themes: usize,
    pub total_size_presets: usize,
    pub basic_count: usize,
    pub statistical_count: usize,
    pub interactive_count: usize,
}
impl CatalogueStats {
    pub fn summary(&self) -> String {
        format!(
            "Catalogue Summary:\n\
            - Total Charts: {}\n\
            - Libraries: {} ({})\n\
            - Palettes: {}\n\
            - Themes: {}\n\
            - Size Presets: {}\n\
            - Categories: {} basic, {} statistical, {} interactive",
            self.total_charts,
            self.total_libraries,
            self.libraries.join(", "),
            self.total_palettes,
            self.total_themes,
            self.total_size_presets,
            self.basic_count,
            self.statistical_count,
            self.interactive_count
        )
    }
}
