//! Routes for the Content bounded context.

use andara_content::application::{command_handlers, query_handlers};
use andara_content::domain::commands;
use andara_content::domain::events::ContentReloaded;
use andara_core::event::EventRecord;
use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /reload.
#[derive(Debug, Deserialize)]
pub struct ReloadContentRequest {
    /// Kind of content that was reloaded.
    pub content_type: String,
    /// Identifiers of the reloaded items.
    pub reloaded_ids: Vec<String>,
    /// What triggered the reload.
    pub source: String,
    /// The runtime instance that observed the reload.
    pub instance_id: Option<Uuid>,
    /// The agent that triggered the reload.
    pub agent_id: Option<Uuid>,
}

/// POST /reload
#[instrument(skip(state, request), fields(content_type = %request.content_type))]
async fn reload_content(
    State(state): State<AppState>,
    Json(request): Json<ReloadContentRequest>,
) -> Result<Json<ContentReloaded>, ApiError> {
    let command = commands::ReloadContent {
        correlation_id: Uuid::new_v4(),
        content_type: request.content_type,
        reloaded_ids: request.reloaded_ids,
        source: request.source,
        instance_id: request.instance_id,
        agent_id: request.agent_id,
    };

    info!(correlation_id = %command.correlation_id, "handling reload_content command");

    let event = command_handlers::handle_reload_content(
        &command,
        state.clock.as_ref(),
        state.id_generator.as_ref(),
    )?;

    Ok(Json(event))
}

/// POST /decode
#[instrument(skip_all, fields(event_type = %record.envelope.event_type))]
async fn decode_content_event(
    Json(record): Json<EventRecord>,
) -> Result<Json<query_handlers::ContentReloadedView>, ApiError> {
    let view = query_handlers::view_content_event(&record)?;
    Ok(Json(view))
}

/// Returns the router for the content context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reload", post(reload_content))
        .route("/decode", post(decode_content_event))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use andara_core::clock::Clock;
    use andara_core::id::IdGenerator;
    use andara_test_support::{FixedClock, SequenceIdGenerator, fixed_now};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app_state(event_ids: Vec<Uuid>) -> AppState {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_now()));
        let ids: Arc<dyn IdGenerator> = Arc::new(SequenceIdGenerator::new(event_ids));
        AppState::new(clock, ids)
    }

    async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_reload_returns_200_with_serialized_event() {
        // Arrange
        let event_id = Uuid::new_v4();
        let app = router().with_state(test_app_state(vec![event_id]));
        let body = serde_json::json!({
            "content_type": "Article",
            "reloaded_ids": ["a1", "a2"],
            "source": "fs-watcher"
        });

        // Act
        let (status, json) = post_json(app, "/reload", &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["eventId"], event_id.to_string());
        assert_eq!(json["eventType"], "ContentReloaded");
        assert_eq!(json["aggregateId"], "Article");
        assert_eq!(json["aggregateType"], "Content");
        assert_eq!(json["version"], 1);
        assert_eq!(json["payload"]["count"], 2);
        assert_eq!(json["metadata"]["instanceId"], "system");
        assert_eq!(json["metadata"]["agentId"], "system");
    }

    #[tokio::test]
    async fn test_reload_records_given_actor_ids() {
        // Arrange
        let instance_id = Uuid::new_v4();
        let agent_id = Uuid::new_v4();
        let app = router().with_state(test_app_state(vec![Uuid::new_v4()]));
        let body = serde_json::json!({
            "content_type": "Page",
            "reloaded_ids": [],
            "source": "admin-ui",
            "instance_id": instance_id,
            "agent_id": agent_id
        });

        // Act
        let (status, json) = post_json(app, "/reload", &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["payload"]["count"], 0);
        assert_eq!(json["metadata"]["instanceId"], instance_id.to_string());
        assert_eq!(json["metadata"]["agentId"], agent_id.to_string());
    }

    #[tokio::test]
    async fn test_reload_returns_400_for_blank_content_type() {
        // Arrange
        let app = router().with_state(test_app_state(vec![]));
        let body = serde_json::json!({
            "content_type": "",
            "reloaded_ids": ["a1"],
            "source": "fs-watcher"
        });

        // Act
        let (status, json) = post_json(app, "/reload", &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_argument");
    }

    #[tokio::test]
    async fn test_reload_returns_422_for_missing_reloaded_ids() {
        // Arrange
        let app = router().with_state(test_app_state(vec![]));
        let body = serde_json::json!({ "content_type": "Article", "source": "fs-watcher" });

        // Act
        let (status, _) = post_json(app, "/reload", &body).await;

        // Assert — Axum returns 422 for deserialization failures.
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_decode_returns_view_for_reloaded_event() {
        // Arrange
        let event_id = Uuid::new_v4();
        let app = router().with_state(test_app_state(vec![]));
        let body = serde_json::json!({
            "eventId": event_id,
            "eventType": "ContentReloaded",
            "timestamp": "2026-01-15T10:00:00Z",
            "aggregateId": "Article",
            "aggregateType": "Content",
            "version": 1,
            "payload": {
                "contentType": "Article",
                "reloadedIds": ["a1"],
                "source": "fs-watcher",
                "count": 1
            },
            "metadata": { "instanceId": "system", "agentId": "system" }
        });

        // Act
        let (status, json) = post_json(app, "/decode", &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["event_id"], event_id.to_string());
        assert_eq!(json["content_type"], "Article");
        assert_eq!(json["count"], 1);
        assert_eq!(json["instance_id"], Value::Null);
    }

    #[tokio::test]
    async fn test_decode_returns_422_for_corrupted_payload() {
        // Arrange
        let app = router().with_state(test_app_state(vec![]));
        let body = serde_json::json!({
            "eventId": Uuid::new_v4(),
            "eventType": "ContentReloaded",
            "timestamp": "2026-01-15T10:00:00Z",
            "aggregateId": "Article",
            "aggregateType": "Content",
            "version": 1,
            "payload": {
                "contentType": "Article",
                "reloadedIds": "a1",
                "source": "fs-watcher",
                "count": 1
            },
            "metadata": { "instanceId": "system", "agentId": "system" }
        });

        // Act
        let (status, json) = post_json(app, "/decode", &body).await;

        // Assert
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "unsupported_payload_type");
    }
}
