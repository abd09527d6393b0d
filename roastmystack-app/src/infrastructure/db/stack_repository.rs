use super::entities::stack;
use crate::application::StackStore;
use crate::domain::StackSelection;
use async_trait::async_trait;
use roastmystack_errors::AppError;
use sea_orm::{entity::*, DatabaseConnection, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct StackRepository {
    db: DatabaseConnection,
}

impl StackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Unset categories go in as NULL; blank strings are normalized away.
    pub async fn create(&self, selection: &StackSelection) -> Result<stack::Model, DbErr> {
        let active = stack::ActiveModel {
            id: Set(Uuid::new_v4()),
            frontend: Set(normalize(&selection.frontend)),
            backend: Set(normalize(&selection.backend)),
            database: Set(normalize(&selection.database)),
            auth: Set(normalize(&selection.auth)),
            hosting: Set(normalize(&selection.hosting)),
            styling: Set(normalize(&selection.styling)),
            misc: Set(normalize(&selection.misc)),
            created_at: Set(Some(chrono::Utc::now())),
        };
        active.insert(&self.db).await
    }
}

fn normalize(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl StackStore for StackRepository {
    async fn insert(&self, selection: &StackSelection) -> Result<Uuid, AppError> {
        let row = self
            .create(selection)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(row.id)
    }
}
