use crate::application::RoastStore;
use crate::config::PipelineConfig;
use crate::domain::RoastWithStack;
use crate::infrastructure::og::render_preview_svg;
use roastmystack_errors::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Read side of the pipeline: fetch one roast (with its stack) for page and
/// preview rendering, or list recent public roasts. Read-only; identical
/// input yields identical output for an unchanged row.
pub struct RenderRoast {
    roasts: Arc<dyn RoastStore>,
    config: PipelineConfig,
}

impl RenderRoast {
    pub fn new(roasts: Arc<dyn RoastStore>, config: PipelineConfig) -> Self {
        Self { roasts, config }
    }

    pub async fn fetch(&self, id: Uuid) -> Result<RoastWithStack, AppError> {
        self.roasts
            .find_with_stack(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list_recent(&self, limit: u64) -> Result<Vec<RoastWithStack>, AppError> {
        self.roasts.list_recent_public(limit).await
    }

    /// The 1200x630 social-preview image for a roast, as SVG bytes.
    pub fn preview_image(&self, roast: &RoastWithStack) -> String {
        render_preview_svg(roast, self.config.excerpt_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StackSelection;
    use async_trait::async_trait;

    struct OneRoastStore {
        roast: RoastWithStack,
    }

    #[async_trait]
    impl RoastStore for OneRoastStore {
        async fn insert(&self, _stack_id: Uuid, _content: &str) -> Result<Uuid, AppError> {
            unimplemented!("read-only fake")
        }

        async fn find_with_stack(&self, id: Uuid) -> Result<Option<RoastWithStack>, AppError> {
            Ok((id == self.roast.id).then(|| self.roast.clone()))
        }

        async fn list_recent_public(&self, _limit: u64) -> Result<Vec<RoastWithStack>, AppError> {
            Ok(vec![self.roast.clone()])
        }
    }

    fn sample_roast() -> RoastWithStack {
        RoastWithStack {
            id: Uuid::new_v4(),
            stack_id: Uuid::new_v4(),
            content: "\"Brave Choices\"\n\nA roast body.".to_string(),
            is_public: true,
            created_at: None,
            stack: StackSelection {
                frontend: Some("React".to_string()),
                backend: Some("Express".to_string()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn fetch_returns_the_joined_row() {
        let roast = sample_roast();
        let render = RenderRoast::new(
            Arc::new(OneRoastStore {
                roast: roast.clone(),
            }),
            PipelineConfig::default(),
        );
        let fetched = render.fetch(roast.id).await.unwrap();
        assert_eq!(fetched.id, roast.id);
        assert_eq!(fetched.content, roast.content);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let render = RenderRoast::new(
            Arc::new(OneRoastStore {
                roast: sample_roast(),
            }),
            PipelineConfig::default(),
        );
        let err = render.fetch(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn preview_image_is_deterministic() {
        let roast = sample_roast();
        let render = RenderRoast::new(
            Arc::new(OneRoastStore {
                roast: roast.clone(),
            }),
            PipelineConfig::default(),
        );
        assert_eq!(render.preview_image(&roast), render.preview_image(&roast));
    }
}
