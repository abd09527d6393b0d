use crate::domain::{RoastWithStack, StackSelection};
use async_trait::async_trait;
use roastmystack_errors::AppError;
use uuid::Uuid;

/// External text-generation service. One prompt in, one roast out; retried
/// calls produce a new, possibly different, roast.
#[async_trait]
pub trait RoastGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Persistence for stack submissions. Insert returns the store-assigned id.
#[async_trait]
pub trait StackStore: Send + Sync {
    async fn insert(&self, stack: &StackSelection) -> Result<Uuid, AppError>;
}

/// Persistence and retrieval for roasts.
#[async_trait]
pub trait RoastStore: Send + Sync {
    async fn insert(&self, stack_id: Uuid, content: &str) -> Result<Uuid, AppError>;

    /// Single roast joined with its owning stack. `Ok(None)` when the id
    /// was never issued.
    async fn find_with_stack(&self, id: Uuid) -> Result<Option<RoastWithStack>, AppError>;

    /// Newest public roasts first.
    async fn list_recent_public(&self, limit: u64) -> Result<Vec<RoastWithStack>, AppError>;
}
