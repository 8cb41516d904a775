//! HTTP request handlers for the dashboard.
//!
//! Every handler runs a complete cycle on the blocking pool: the workbook is
//! read with synchronous I/O and never cached between requests.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::FilterOptions;
use crate::dashboard::{DashboardView, resolve_options, run_cycle};
use crate::models::FilterSelection;
use crate::presentation::render_page;

use super::request::DashboardQuery;
use super::response::{ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// Creates the router with all dashboard endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/options", get(options_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Turns the extracted query into a selection, or a 400 response.
fn selection_from_query(
    correlation_id: Uuid,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<FilterSelection, ApiErrorResponse> {
    match query {
        Ok(Query(query)) => Ok(query.into()),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Rejected dashboard query"
            );
            Err(ApiErrorResponse::bad_query(body_text))
        }
    }
}

/// Runs one dashboard cycle on the blocking pool and logs its outcome.
async fn cycle(
    state: &AppState,
    correlation_id: Uuid,
    selection: FilterSelection,
) -> Result<DashboardView, ApiErrorResponse> {
    let config = state.shared_config();
    let started = Instant::now();

    let view = tokio::task::spawn_blocking(move || run_cycle(&config, &selection))
        .await
        .map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Dashboard cycle failed"
            );
            ApiErrorResponse::cycle_failed(err.to_string())
        })?;

    info!(
        correlation_id = %correlation_id,
        source = %view.source.state,
        grade = view.options.grade.as_deref().unwrap_or(""),
        class = view.options.class.as_deref().unwrap_or(""),
        total_count = view.result.total_count,
        duration_us = started.elapsed().as_micros(),
        "Dashboard cycle completed"
    );

    Ok(view)
}

/// Handler for `GET /`: the rendered dashboard page.
async fn page_handler(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Rendering dashboard page");

    let result = match selection_from_query(correlation_id, query) {
        Ok(selection) => cycle(&state, correlation_id, selection).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(view) => {
            let config = state.config();
            Html(render_page(
                &view,
                &config.display,
                config.refresh.interval_secs,
            ))
            .into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for `GET /api/dashboard`: the view as JSON.
async fn dashboard_handler(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard request");

    let result = match selection_from_query(correlation_id, query) {
        Ok(selection) => cycle(&state, correlation_id, selection).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(view) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(view),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// Handler for `GET /api/options`: only the resolved dropdowns.
async fn options_handler(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let selection = match selection_from_query(correlation_id, query) {
        Ok(selection) => selection,
        Err(err) => return err.into_response(),
    };

    let config = state.shared_config();
    let options: Result<FilterOptions, _> =
        tokio::task::spawn_blocking(move || resolve_options(&config, &selection)).await;

    match options {
        Ok(options) => {
            info!(
                correlation_id = %correlation_id,
                grades = options.grades.len(),
                classes = options.classes.len(),
                "Resolved filter options"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(options),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Option lookup failed");
            ApiErrorResponse::cycle_failed(err.to_string()).into_response()
        }
    }
}

/// Handler for `GET /health`: liveness plus the last refresh report.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.last_refresh()))
}
