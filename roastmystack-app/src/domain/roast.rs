use crate::domain::StackSelection;
use serde::{Deserialize, Serialize};

/// A persisted roast joined with the stack it critiques.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoastWithStack {
    pub id: uuid::Uuid,
    pub stack_id: uuid::Uuid,
    pub content: String,
    pub is_public: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub stack: StackSelection,
}
