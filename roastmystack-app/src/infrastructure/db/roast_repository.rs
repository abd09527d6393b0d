use super::entities::{roast, stack, Roast};
use crate::application::RoastStore;
use crate::domain::{RoastWithStack, StackSelection};
use async_trait::async_trait;
use roastmystack_errors::AppError;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct RoastRepository {
    db: DatabaseConnection,
}

impl RoastRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, stack_id: Uuid, content: &str) -> Result<roast::Model, DbErr> {
        let active = roast::ActiveModel {
            id: Set(Uuid::new_v4()),
            stack_id: Set(stack_id),
            content: Set(content.to_string()),
            is_public: Set(true),
            created_at: Set(Some(chrono::Utc::now())),
        };
        active.insert(&self.db).await
    }

    pub async fn find_by_id_with_stack(
        &self,
        id: Uuid,
    ) -> Result<Option<RoastWithStack>, DbErr> {
        let row = Roast::find_by_id(id)
            .find_also_related(super::entities::Stack)
            .one(&self.db)
            .await?;

        match row {
            // A roast whose stack row is gone is unrenderable; treat it the
            // same as a missing roast.
            Some((roast_row, Some(stack_row))) => Ok(Some(join(roast_row, stack_row))),
            _ => Ok(None),
        }
    }

    pub async fn list_recent(&self, limit: u64) -> Result<Vec<RoastWithStack>, DbErr> {
        let rows = Roast::find()
            .filter(roast::Column::IsPublic.eq(true))
            .order_by_desc(roast::Column::CreatedAt)
            .limit(limit)
            .find_also_related(super::entities::Stack)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(roast_row, stack_row)| stack_row.map(|s| join(roast_row, s)))
            .collect())
    }
}

fn join(roast_row: roast::Model, stack_row: stack::Model) -> RoastWithStack {
    RoastWithStack {
        id: roast_row.id,
        stack_id: roast_row.stack_id,
        content: roast_row.content,
        is_public: roast_row.is_public,
        created_at: roast_row.created_at,
        stack: StackSelection {
            frontend: stack_row.frontend,
            backend: stack_row.backend,
            database: stack_row.database,
            auth: stack_row.auth,
            hosting: stack_row.hosting,
            styling: stack_row.styling,
            misc: stack_row.misc,
        },
    }
}

#[async_trait]
impl RoastStore for RoastRepository {
    async fn insert(&self, stack_id: Uuid, content: &str) -> Result<Uuid, AppError> {
        let row = self
            .create(stack_id, content)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(row.id)
    }

    async fn find_with_stack(&self, id: Uuid) -> Result<Option<RoastWithStack>, AppError> {
        self.find_by_id_with_stack(id)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))
    }

    async fn list_recent_public(&self, limit: u64) -> Result<Vec<RoastWithStack>, AppError> {
        self.list_recent(limit)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))
    }
}
