//! API routes for kunturd

use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use kuntur_common::{Case, CaseError, CaseFilter, CaseUpdate, NewCase};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

/// Error body shape shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
}

fn not_found(id_caso: &str) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        format!("Caso {} no encontrado", id_caso),
    )
}

// ============================================================================
// Case Routes
// ============================================================================

pub fn case_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/casos", get(list_cases).post(create_case))
        .route("/api/casos/:id_caso", get(get_case).put(update_case))
}

async fn create_case(
    State(state): State<AppStateArc>,
    Json(draft): Json<NewCase>,
) -> Result<Json<Case>, ApiError> {
    let mut repo = state.repo.write().await;

    match repo.add_case(draft) {
        Ok(case) => Ok(Json(case)),
        Err(e @ CaseError::MissingField(_)) => {
            info!("  Rejected case report: {}", e);
            Err(api_error(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            error!("  Cannot persist case: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error al crear caso: {}", e),
            ))
        }
    }
}

async fn list_cases(
    State(state): State<AppStateArc>,
    Query(filter): Query<CaseFilter>,
) -> Json<Vec<Case>> {
    let repo = state.repo.read().await;
    Json(repo.all_cases(&filter))
}

async fn get_case(
    State(state): State<AppStateArc>,
    Path(id_caso): Path<String>,
) -> Result<Json<Case>, ApiError> {
    let repo = state.repo.read().await;
    repo.case_by_id(&id_caso)
        .map(Json)
        .ok_or_else(|| not_found(&id_caso))
}

async fn update_case(
    State(state): State<AppStateArc>,
    Path(id_caso): Path<String>,
    Json(update): Json<CaseUpdate>,
) -> Result<Json<Case>, ApiError> {
    let mut repo = state.repo.write().await;

    match repo.update_case(&id_caso, &update) {
        Ok(Some(case)) => Ok(Json(case)),
        Ok(None) => Err(not_found(&id_caso)),
        Err(e) => {
            error!("  Cannot persist update for {}: {}", id_caso, e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error al actualizar caso: {}", e),
            ))
        }
    }
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/healthcheck", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server;
    use axum::body::Body;
    use axum::http::{header, Request};
    use kuntur_common::{CaseRepository, JsonFileStore};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let repo = CaseRepository::open(JsonFileStore::new(dir.path().join("casos.json")));
        let app = server::app(Arc::new(AppState::new(repo)));
        (dir, app)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn put_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const FULL_REPORT: &str = r#"{
        "id_alarma": "AL23072504",
        "nombre_agente": "Juan Pérez",
        "cedula_agente": "1723456789",
        "nombre_victima": "María López",
        "cedula_victima": "1712345678",
        "informe_policial": "Robo a local comercial"
    }"#;

    #[tokio::test]
    async fn test_create_case_returns_generated_fields() {
        let (_dir, app) = test_app();

        let response = app.oneshot(post_json("/api/casos", FULL_REPORT)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["id_caso"], "CASO-0001");
        assert_eq!(json["estado"], "Abierto");
        assert!(json.get("fecha_creacion").is_some());
    }

    #[tokio::test]
    async fn test_create_case_missing_field_is_400() {
        let (_dir, app) = test_app();

        let response = app
            .clone()
            .oneshot(post_json("/api/casos", r#"{"id_alarma": "AL1"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        let detail = json["detail"].as_str().unwrap();
        assert!(detail.contains("nombre_agente"), "detail: {}", detail);

        // No partial write
        let response = app.oneshot(get_req("/api/casos")).await.unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_cases_with_alarm_filter() {
        let (_dir, app) = test_app();

        for alarm in ["A1", "A2", "A1"] {
            let body = FULL_REPORT.replace("AL23072504", alarm);
            let response = app.clone().oneshot(post_json("/api/casos", &body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(get_req("/api/casos?id_alarma=A1"))
            .await
            .unwrap();
        let json = body_json(response).await;
        let cases = json.as_array().unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0]["id_caso"], "CASO-0001");
        assert_eq!(cases[1]["id_caso"], "CASO-0003");
    }

    #[tokio::test]
    async fn test_get_case_by_id() {
        let (_dir, app) = test_app();

        app.clone().oneshot(post_json("/api/casos", FULL_REPORT)).await.unwrap();

        let response = app.clone().oneshot(get_req("/api/casos/CASO-0001")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id_alarma"], "AL23072504");

        let response = app.oneshot(get_req("/api/casos/CASO-9999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_case_keeps_immutable_fields() {
        let (_dir, app) = test_app();

        let created = body_json(
            app.clone()
                .oneshot(post_json("/api/casos", FULL_REPORT))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .clone()
            .oneshot(put_json(
                "/api/casos/CASO-0001",
                r#"{"id_caso": "CASO-7777", "estado": "Cerrado", "fecha_creacion": "1999-01-01T00:00:00Z"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["id_caso"], "CASO-0001");
        assert_eq!(json["estado"], "Cerrado");
        assert_eq!(json["fecha_creacion"], created["fecha_creacion"]);
        assert!(json.get("fecha_actualizacion").is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_case_is_404() {
        let (_dir, app) = test_app();

        let response = app
            .oneshot(put_json("/api/casos/CASO-0042", r#"{"estado": "Cerrado"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_healthcheck() {
        let (_dir, app) = test_app();

        let response = app.oneshot(get_req("/healthcheck")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_docs_page() {
        let (_dir, app) = test_app();

        let response = app.oneshot(get_req("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
