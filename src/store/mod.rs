//! Persistence collaborators used by the question gateway.
//!
//! The traits keep the gateway independent of the database so it can be
//! exercised against in-memory fakes; [`sqlite::SqliteStore`] is the
//! production implementation.

pub mod sqlite;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        question::{Question, QuestionId},
        session::Session,
        user::{User, UserId},
    },
};

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>, AppError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, id: &UserId) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn insert(&self, question: Question) -> Result<Question, AppError>;
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, AppError>;
    async fn update(&self, question: &Question) -> Result<(), AppError>;
    async fn delete(&self, question: &Question) -> Result<(), AppError>;
    async fn find_all(&self) -> Result<Vec<Question>, AppError>;
    async fn find_all_by_owner(&self, owner: &User) -> Result<Vec<Question>, AppError>;
}
