use axum::{
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipeline::orchestrator::{run_pipeline, PipelineInput, PipelineOutput, RunOptions};
use crate::state::AppState;

/// Multipart form fields accepted by POST /pipeline.
const JOB_URL_FIELD: &str = "jobUrl";
const LINKEDIN_FIELD: &str = "linkedin";
const FILE_FIELD: &str = "file";

/// POST /pipeline
pub async fn handle_pipeline(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PipelineOutput>, AppError> {
    let multipart = multipart
        .map_err(|e| AppError::Validation(format!("Expected a multipart/form-data body: {e}")))?;
    let input = read_pipeline_form(multipart).await?;
    let run_id = Uuid::new_v4();
    info!(%run_id, job_url = %input.job_url, "Pipeline request accepted");

    let output = run_pipeline(&state.enrichment, input, RunOptions::default(), run_id).await?;
    Ok(Json(output))
}

async fn read_pipeline_form(mut multipart: Multipart) -> Result<PipelineInput, AppError> {
    let mut job_url = None;
    let mut linkedin_url = None;
    let mut document = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_URL_FIELD => job_url = Some(field_text(field, JOB_URL_FIELD).await?),
            LINKEDIN_FIELD => linkedin_url = Some(field_text(field, LINKEDIN_FIELD).await?),
            FILE_FIELD => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read '{FILE_FIELD}': {e}")))?;
                document = Some(bytes);
            }
            _ => {}
        }
    }

    Ok(PipelineInput {
        document: required(document, FILE_FIELD)?,
        job_url: required(job_url, JOB_URL_FIELD)?,
        linkedin_url: required(linkedin_url, LINKEDIN_FIELD)?,
    })
}

async fn field_text(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, AppError> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read '{name}': {e}")))?;
    Ok(text.trim().to_string())
}

fn required<T: FormValue>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value
        .filter(|v| !v.is_blank())
        .ok_or_else(|| AppError::Validation(format!("Form field '{name}' is required")))
}

trait FormValue {
    fn is_blank(&self) -> bool;
}

impl FormValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl FormValue for Bytes {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InterviewParams {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub response: String,
}

/// POST /interview
/// Fields may come from the query string or a JSON body; the body wins.
pub async fn handle_interview(
    State(state): State<AppState>,
    Query(query): Query<InterviewParams>,
    body: Option<Json<InterviewParams>>,
) -> Result<Json<InterviewResponse>, AppError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let question = body
        .question
        .or(query.question)
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::Validation("'question' is required".to_string()))?;
    let answer = body
        .answer
        .or(query.answer)
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| AppError::Validation("'answer' is required".to_string()))?;

    let response = state
        .enrichment
        .interview_dialogue(&question, &answer)
        .await?;
    Ok(Json(InterviewResponse { response }))
}
