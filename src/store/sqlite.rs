use async_trait::async_trait;
use sqlx::Row;

use super::{QuestionStore, SessionStore, UserStore};
use crate::{
    db::DbPool,
    error::AppError,
    models::{
        question::{Question, QuestionId},
        session::Session,
        user::{User, UserId},
    },
};

#[derive(Clone)]
pub struct SqliteStore {
    db: DbPool,
}

impl SqliteStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionStore for SqliteStore {
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query(
            "SELECT a.access_token, a.login_at, a.logout_at, u.uuid, u.username, u.role \
             FROM user_auth a JOIN users u ON u.uuid = a.user_uuid \
             WHERE a.access_token = ?",
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Session {
            token: row.try_get("access_token")?,
            user: User {
                id: row.try_get("uuid")?,
                username: row.try_get("username")?,
                role: row.try_get("role")?,
            },
            login_at: row.try_get("login_at")?,
            logout_at: row.try_get("logout_at")?,
        }))
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn find_user_by_id(&self, id: &UserId) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT uuid, username, role FROM users WHERE uuid = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl QuestionStore for SqliteStore {
    async fn insert(&self, question: Question) -> Result<Question, AppError> {
        sqlx::query("INSERT INTO question (uuid, content, date, user_uuid) VALUES (?, ?, ?, ?)")
            .bind(&question.id)
            .bind(&question.content)
            .bind(question.created_at)
            .bind(&question.owner)
            .execute(&self.db)
            .await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, AppError> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT uuid, content, date, user_uuid FROM question WHERE uuid = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(question)
    }

    async fn update(&self, question: &Question) -> Result<(), AppError> {
        // Only the content is mutable; owner and timestamp stay as created.
        let result = sqlx::query("UPDATE question SET content = ? WHERE uuid = ?")
            .bind(&question.content)
            .bind(&question.id)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::QuestionNotFound);
        }
        Ok(())
    }

    async fn delete(&self, question: &Question) -> Result<(), AppError> {
        // A row removed since the lookup must not count as a second delete.
        let result = sqlx::query("DELETE FROM question WHERE uuid = ?")
            .bind(&question.id)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::QuestionNotFound);
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Question>, AppError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT uuid, content, date, user_uuid FROM question ORDER BY date, rowid",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(questions)
    }

    async fn find_all_by_owner(&self, owner: &User) -> Result<Vec<Question>, AppError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT uuid, content, date, user_uuid FROM question \
             WHERE user_uuid = ? ORDER BY date, rowid",
        )
        .bind(&owner.id)
        .fetch_all(&self.db)
        .await?;
        Ok(questions)
    }
}
