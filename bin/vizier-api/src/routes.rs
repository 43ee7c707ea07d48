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

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use vizier::{ChartStudio, GenerateRequest, GenerateResponse};

pub fn build_router(studio: Arc<ChartStudio>) -> Router {
    Router::new()
        .route("/api/", get(handle_root))
        .route("/api/health", get(handle_health))
        .route("/api/visualization/charts", get(handle_charts))
        .route("/api/visualization/generate", post(handle_generate))
        .with_state(studio)
}

async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "Python Visualization Generator API",
        "status": "running"
    }))
}

async fn handle_health(State(studio): State<Arc<ChartStudio>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "charts": studio.get_available_charts().len(),
        "services": ["chart_generation"]
    }))
}

async fn handle_charts(State(studio): State<Arc<ChartStudio>>) -> Json<Value> {
    let catalogue = studio.catalogue();
    Json(json!({
        "charts": catalogue.get_all_charts(),
        "palettes": catalogue.get_all_palettes(),
        "themes": catalogue.get_all_themes(),
        "sizes": catalogue.get_all_size_presets()
    }))
}

// Generation always answers 200; failures travel in the body with success
// set to false.
async fn handle_generate(
    State(studio): State<Arc<ChartStudio>>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let started = Instant::now();
    let dataset = match studio.dataset_from_value(&request.dataset) {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!(error=%e, "dataset rejected");
            return Json(GenerateResponse::failed(e.to_string()));
        }
    };
    let customisation = match request
        .customization
        .as_ref()
        .map(|c| c.resolve(studio.catalogue()))
        .transpose()
    {
        Ok(customisation) => customisation,
        Err(e) => {
            warn!(error=%e, "customisation rejected");
            return Json(GenerateResponse::failed(e.to_string()));
        }
    };
    match studio.generate(&request.chart_type_id, &dataset, customisation.as_ref()) {
        Ok(visualisation) => {
            let elapsed = started.elapsed().as_secs_f64();
            info!(chart_id=%request.chart_type_id, elapsed, "chart code generated");
            Json(GenerateResponse::succeeded(
                visualisation.python_code,
                elapsed,
            ))
        }
        Err(e) => {
            warn!(error=%e, chart_id=%request.chart_type_id, "generation failed");
            Json(GenerateResponse::failed(e.to_string()))
        }
    }
}
