use serde::{Deserialize, Serialize};

/// One technology category in a stack submission. The order of
/// [`Category::ORDER`] is the fixed display order for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Database,
    Auth,
    Hosting,
    Styling,
    Misc,
}

impl Category {
    pub const ORDER: [Category; 7] = [
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::Auth,
        Category::Hosting,
        Category::Styling,
        Category::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Database => "database",
            Category::Auth => "auth",
            Category::Hosting => "hosting",
            Category::Styling => "styling",
            Category::Misc => "misc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Database => "Database",
            Category::Auth => "Auth",
            Category::Hosting => "Hosting",
            Category::Styling => "Styling",
            Category::Misc => "Extras",
        }
    }
}

/// A user's technology choices, one free-text label per category.
/// Immutable once submitted; unset categories stay `None` all the way
/// down to the database row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StackSelection {
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub auth: Option<String>,
    pub hosting: Option<String>,
    pub styling: Option<String>,
    pub misc: Option<String>,
}

impl StackSelection {
    /// Hard cap on the free-text `misc` field, in characters.
    pub const MAX_MISC_LEN: usize = 50;

    /// The value for a category, or `None` when unset or blank.
    pub fn get(&self, category: Category) -> Option<&str> {
        let value = match category {
            Category::Frontend => &self.frontend,
            Category::Backend => &self.backend,
            Category::Database => &self.database,
            Category::Auth => &self.auth,
            Category::Hosting => &self.hosting,
            Category::Styling => &self.styling,
            Category::Misc => &self.misc,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Non-empty categories in fixed display order.
    pub fn entries(&self) -> Vec<(Category, &str)> {
        Category::ORDER
            .iter()
            .filter_map(|&c| self.get(c).map(|v| (c, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_unset() {
        let stack = StackSelection {
            frontend: Some("React".to_string()),
            backend: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(stack.get(Category::Frontend), Some("React"));
        assert_eq!(stack.get(Category::Backend), None);
    }

    #[test]
    fn entries_follow_category_order() {
        let stack = StackSelection {
            misc: Some("Docker".to_string()),
            frontend: Some("Vue".to_string()),
            hosting: Some("Fly.io".to_string()),
            ..Default::default()
        };
        let entries = stack.entries();
        assert_eq!(
            entries,
            vec![
                (Category::Frontend, "Vue"),
                (Category::Hosting, "Fly.io"),
                (Category::Misc, "Docker"),
            ]
        );
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let stack: StackSelection =
            serde_json::from_str(r#"{"frontend":"React","backend":"Express"}"#).unwrap();
        assert_eq!(stack.get(Category::Frontend), Some("React"));
        assert_eq!(stack.get(Category::Database), None);
    }
}
