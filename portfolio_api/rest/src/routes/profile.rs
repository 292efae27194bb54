use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_profile_contracts::ProfileFeatureService;
use portfolio_models::profile::{Profile, Project};
use serde::Serialize;

use super::{error, internal_server_error};

pub fn router(service: Arc<impl ProfileFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/profile", routing::get(get_profile))
        .route("/api/projects", routing::get(get_projects))
        .route("/api/resume-download", routing::get(get_resume_download))
        .with_state(service)
}

#[derive(Serialize)]
struct ProfileResponse<'a> {
    success: bool,
    profile: &'a Profile,
}

async fn get_profile(service: State<Arc<impl ProfileFeatureService>>) -> Response {
    let profile = service.get_profile();
    Json(ProfileResponse {
        success: true,
        profile: &profile,
    })
    .into_response()
}

#[derive(Serialize)]
struct ProjectsResponse<'a> {
    success: bool,
    projects: &'a [Project],
}

async fn get_projects(service: State<Arc<impl ProfileFeatureService>>) -> Response {
    let profile = service.get_profile();
    Json(ProjectsResponse {
        success: true,
        projects: &profile.projects,
    })
    .into_response()
}

#[derive(Serialize)]
struct ResumeDownloadResponse {
    success: bool,
    download_path: String,
}

async fn get_resume_download(service: State<Arc<impl ProfileFeatureService>>) -> Response {
    match service.get_resume_download().await {
        Ok(Some(download)) => Json(ResumeDownloadResponse {
            success: true,
            download_path: download.download_path,
        })
        .into_response(),
        Ok(None) => error(StatusCode::NOT_FOUND, "Resume file not found"),
        Err(err) => internal_server_error(err),
    }
}
