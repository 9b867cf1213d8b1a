use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    auth::AccessToken,
    error::AppError,
    models::{
        question::{Question, QuestionId},
        user::UserId,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_question))
        .route("/all", get(all_questions))
        .route("/all/:user_id", get(questions_by_user))
        .route("/edit/:question_id", put(edit_question))
        .route("/delete/:question_id", delete(delete_question))
}

#[derive(Debug, Deserialize)]
struct QuestionRequest {
    content: String,
}

async fn create_question(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Json(body): Json<QuestionRequest>,
) -> Result<(StatusCode, Json<Question>), AppError> {
    let question = state.questions.create_question(&token, &body.content).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

async fn all_questions(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> Result<Json<Vec<Question>>, AppError> {
    Ok(Json(state.questions.list_all_questions(&token).await?))
}

async fn edit_question(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(question_id): Path<String>,
    Json(body): Json<QuestionRequest>,
) -> Result<Json<Question>, AppError> {
    let question = state
        .questions
        .edit_question(&token, &QuestionId(question_id), &body.content)
        .await?;
    Ok(Json(question))
}

async fn delete_question(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(question_id): Path<String>,
) -> Result<Json<Question>, AppError> {
    let question = state
        .questions
        .delete_question(&token, &QuestionId(question_id))
        .await?;
    Ok(Json(question))
}

async fn questions_by_user(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Question>>, AppError> {
    let questions = state
        .questions
        .list_questions_by_user(&token, &UserId(user_id))
        .await?;
    Ok(Json(questions))
}
