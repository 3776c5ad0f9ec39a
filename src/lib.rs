pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::repository::job_application_repository::{
    JobApplicationRepository, PgJobApplicationRepository,
};
use crate::services::job_application_service::JobApplicationService;

#[derive(Clone)]
pub struct AppState {
    pub job_application_service: JobApplicationService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgJobApplicationRepository::new(pool)))
    }

    pub fn with_repository(repository: Arc<dyn JobApplicationRepository>) -> Self {
        Self {
            job_application_service: JobApplicationService::new(repository),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/job-applications",
            get(routes::job_applications::list_job_applications)
                .post(routes::job_applications::create_job_application),
        )
        .route(
            "/api/job-applications/:id",
            get(routes::job_applications::get_job_application)
                .put(routes::job_applications::update_job_application)
                .delete(routes::job_applications::delete_job_application),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
