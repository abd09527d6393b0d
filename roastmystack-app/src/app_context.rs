use crate::application::{RenderRoast, SubmitRoast};
use crate::config::AppConfig;
use crate::infrastructure::db::{RoastRepository, StackRepository};
use crate::infrastructure::openai::OpenAiClient;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Wires configuration, the database connection and the generation client
/// into the two use cases the API serves.
#[derive(Clone)]
pub struct AppContext {
    pub submit_roast: Arc<SubmitRoast>,
    pub render_roast: Arc<RenderRoast>,
}

impl AppContext {
    pub fn new(config: &AppConfig, db: DatabaseConnection) -> Self {
        let stacks = Arc::new(StackRepository::new(db.clone()));
        let roasts = Arc::new(RoastRepository::new(db));
        let generator = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));

        Self {
            submit_roast: Arc::new(SubmitRoast::new(
                stacks,
                roasts.clone(),
                generator,
                config.pipeline.clone(),
            )),
            render_roast: Arc::new(RenderRoast::new(roasts, config.pipeline.clone())),
        }
    }
}
