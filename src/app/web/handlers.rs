use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    Form,
};
use serde::Serialize;

use crate::app::intake::IntakeService;
use crate::app::web::templates::{DetailTemplate, InputTemplate};
use crate::core::FormFields;
use crate::domain::model::StoredPoll;
use crate::utils::error::{ErrorCategory, IntakeError, Result};

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "poll-intake",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Serialize)]
pub struct PollSummary {
    pub reg_idx: i64,
    pub id: String,
    pub elect_name: String,
    pub poll_duration: i64,
    pub created_at: String,
}

impl From<&StoredPoll> for PollSummary {
    fn from(poll: &StoredPoll) -> Self {
        Self {
            reg_idx: poll.record.reg_idx(),
            id: poll.id.to_string(),
            elect_name: poll.record.basic.elect_name.clone(),
            poll_duration: poll.record.basic.poll_duration,
            created_at: poll.created_at.to_string(),
        }
    }
}

pub async fn list_polls(State(service): State<IntakeService>) -> Result<Json<Vec<PollSummary>>> {
    let polls = service.list().await?;
    Ok(Json(polls.iter().map(PollSummary::from).collect()))
}

pub async fn input_form() -> Result<Html<String>> {
    Ok(Html(InputTemplate::default().render()?))
}

pub async fn submit_poll(
    State(service): State<IntakeService>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::from_pairs(pairs);

    match service.submit(&fields).await {
        Ok(stored) => {
            Redirect::to(&format!("/input/{}/", stored.record.reg_idx())).into_response()
        }
        Err(e) if e.is_validation() => {
            let page = InputTemplate {
                error: Some(format!("{} ({})", e.user_friendly_message(), e.recovery_suggestion())),
            };
            match page.render() {
                Ok(html) => (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response(),
                Err(render_err) => IntakeError::from(render_err).into_response(),
            }
        }
        Err(e) => e.into_response(),
    }
}

pub async fn poll_detail(
    State(service): State<IntakeService>,
    Path(poll_id): Path<i64>,
) -> Result<Html<String>> {
    let poll = service.detail(poll_id).await?;
    Ok(Html(DetailTemplate::new(poll).render()?))
}

pub async fn poll_json(
    State(service): State<IntakeService>,
    Path(poll_id): Path<i64>,
) -> Result<Json<StoredPoll>> {
    Ok(Json(service.detail(poll_id).await?))
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let status = match (self.category(), &self) {
            (_, IntakeError::NotFound { .. }) => StatusCode::NOT_FOUND,
            (ErrorCategory::Validation, _) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(
                "Request failed: {} (Category: {:?}, Severity: {:?})",
                self,
                self.category(),
                self.severity()
            );
        }

        let body = Json(serde_json::json!({
            "error": self.user_friendly_message(),
            "suggestion": self.recovery_suggestion(),
        }));
        (status, body).into_response()
    }
}
