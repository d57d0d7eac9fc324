// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    catalog::Catalog,
    error::AppError,
    models::quiz::{PublicQuestion, QuizSubmission, score_submission},
};

/// Returns the quiz questions without their answers.
pub async fn list_questions(State(catalog): State<Arc<Catalog>>) -> impl IntoResponse {
    let questions: Vec<PublicQuestion> = catalog.questions.iter().map(PublicQuestion::from).collect();
    Json(questions)
}

/// Scores a quiz submission against the catalog's answer key.
///
/// * Rejects malformed bodies and wrong answer counts with 400.
/// * Returns the score, the total and a feedback message.
pub async fn submit_quiz(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Json<QuizSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    let result = score_submission(&catalog.answer_key(), &req.answers)?;
    tracing::info!("Quiz scored {}/{}", result.score, result.total);

    Ok(Json(result))
}
