use crate::application::{RoastGenerator, RoastStore, StackStore};
use crate::config::PipelineConfig;
use crate::domain::StackSelection;
use crate::infrastructure::openai::build_roast_prompt;
use roastmystack_errors::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// The submission pipeline: validate, persist the stack, generate, persist
/// the roast. Each step either advances or fails the whole request; steps
/// run sequentially because each depends on the previous one's output.
///
/// A stack row persisted before a later step fails is left in place. The
/// orphan is an accepted artifact, not reconciled or garbage-collected.
pub struct SubmitRoast {
    stacks: Arc<dyn StackStore>,
    roasts: Arc<dyn RoastStore>,
    generator: Arc<dyn RoastGenerator>,
    config: PipelineConfig,
}

impl SubmitRoast {
    pub fn new(
        stacks: Arc<dyn StackStore>,
        roasts: Arc<dyn RoastStore>,
        generator: Arc<dyn RoastGenerator>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            stacks,
            roasts,
            generator,
            config,
        }
    }

    /// Runs the pipeline and returns the new roast's id.
    pub async fn execute(&self, stack: StackSelection) -> Result<Uuid, AppError> {
        self.validate(&stack)?;

        let stack_id = self.stacks.insert(&stack).await?;
        tracing::info!(%stack_id, "stack persisted");

        let prompt = build_roast_prompt(&stack);
        let content = self.generator.generate(&prompt).await?;
        if content.trim().is_empty() {
            return Err(AppError::Generation(
                "generation service returned empty content".to_string(),
            ));
        }

        let roast_id = self.roasts.insert(stack_id, &content).await?;
        tracing::info!(%roast_id, %stack_id, "roast persisted");

        Ok(roast_id)
    }

    fn validate(&self, stack: &StackSelection) -> Result<(), AppError> {
        use crate::domain::Category;

        let mut missing = Vec::new();
        if stack.get(Category::Frontend).is_none() {
            missing.push("frontend");
        }
        if stack.get(Category::Backend).is_none() {
            missing.push("backend");
        }
        if self.config.require_database && stack.get(Category::Database).is_none() {
            missing.push("database");
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        if let Some(misc) = stack.misc.as_deref() {
            if misc.chars().count() > StackSelection::MAX_MISC_LEN {
                return Err(AppError::Validation(format!(
                    "misc must be at most {} characters",
                    StackSelection::MAX_MISC_LEN
                )));
            }
        }

        Ok(())
    }
}
