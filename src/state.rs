use std::sync::Arc;

use crate::{
    db::DbPool,
    services::{
        clock::{SystemClock, UuidGenerator},
        question::QuestionService,
    },
    store::sqlite::SqliteStore,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub questions: QuestionService,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        let store = Arc::new(SqliteStore::new(db.clone()));
        let questions = QuestionService::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
        );
        Self { db, questions }
    }
}
