//! Question access gateway.
//!
//! Every operation first resolves the caller's session, then applies the
//! ownership and role rules before handing off to the question store.

use std::sync::Arc;

use tracing::{info, warn};

use super::clock::{Clock, IdGenerator};
use crate::{
    error::AppError,
    models::{
        question::{Question, QuestionId},
        session::Session,
        user::UserId,
    },
    store::{QuestionStore, SessionStore, UserStore},
};

#[derive(Clone)]
pub struct QuestionService {
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    questions: Arc<dyn QuestionStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl QuestionService {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
        questions: Arc<dyn QuestionStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            sessions,
            users,
            questions,
            clock,
            ids,
        }
    }

    /// `action` ends up in the signed-out message, e.g. "post a question".
    async fn resolve_active_session(
        &self,
        token: &str,
        action: &'static str,
    ) -> Result<Session, AppError> {
        let session = self
            .sessions
            .find_session_by_token(token)
            .await?
            .ok_or(AppError::Unauthenticated)?;
        if !session.is_active() {
            return Err(AppError::SessionExpired(action));
        }
        Ok(session)
    }

    pub async fn create_question(&self, token: &str, content: &str) -> Result<Question, AppError> {
        let session = self.resolve_active_session(token, "post a question").await?;
        let question = Question {
            id: self.ids.next_id(),
            content: content.to_string(),
            created_at: self.clock.now(),
            owner: session.user.id,
        };
        let stored = self.questions.insert(question).await?;
        info!(question = %stored.id, owner = %stored.owner, "question created");
        Ok(stored)
    }

    pub async fn list_all_questions(&self, token: &str) -> Result<Vec<Question>, AppError> {
        self.resolve_active_session(token, "get all questions")
            .await?;
        self.questions.find_all().await
    }

    pub async fn edit_question(
        &self,
        token: &str,
        question_id: &QuestionId,
        content: &str,
    ) -> Result<Question, AppError> {
        let session = self
            .resolve_active_session(token, "edit the question")
            .await?;
        let mut question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or(AppError::QuestionNotFound)?;

        // Admins get no bypass here.
        if question.owner != session.user.id {
            warn!(question = %question.id, user = %session.user.id, "edit refused for non-owner");
            return Err(AppError::Forbidden(
                "Only the question owner can edit the question",
            ));
        }

        question.content = content.to_string();
        self.questions.update(&question).await?;
        info!(question = %question.id, "question edited");
        Ok(question)
    }

    pub async fn delete_question(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<Question, AppError> {
        let session = self
            .resolve_active_session(token, "delete the question")
            .await?;
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or(AppError::QuestionNotFound)?;

        let is_owner = question.owner == session.user.id;
        if !is_owner && !session.user.role.is_admin() {
            warn!(question = %question.id, user = %session.user.id, "delete refused");
            return Err(AppError::Forbidden(
                "Only the question owner or admin can delete the question",
            ));
        }

        self.questions.delete(&question).await?;
        info!(
            question = %question.id,
            user = %session.user.id,
            role = %session.user.role,
            "question deleted"
        );
        Ok(question)
    }

    pub async fn list_questions_by_user(
        &self,
        token: &str,
        user_id: &UserId,
    ) -> Result<Vec<Question>, AppError> {
        self.resolve_active_session(token, "get all questions posted by a specific user")
            .await?;
        let user = self
            .users
            .find_user_by_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        self.questions.find_all_by_owner(&user).await
    }
}
