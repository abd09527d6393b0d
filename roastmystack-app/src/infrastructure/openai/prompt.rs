use crate::domain::{Category, StackSelection};

/// Builds the instruction prompt for one stack submission. Pure and
/// deterministic: the same selection always yields the same string.
///
/// Frontend and backend always appear ("Not specified" when blank, though
/// validation upstream rejects that for submissions); the optional
/// categories are omitted entirely when unset.
pub fn build_roast_prompt(stack: &StackSelection) -> String {
    let mut prompt = String::from(
        "You are a brutally honest but hilarious senior developer who roasts tech stacks for fun. \
         Your tone is sarcastic, clever, and confidently opinionated. Think stand-up comic meets tech Twitter.\n\
         \n\
         Here's the stack to roast:\n",
    );

    let frontend = stack.get(Category::Frontend).unwrap_or("Not specified");
    let backend = stack.get(Category::Backend).unwrap_or("Not specified");
    prompt.push_str(&format!("- Frontend: {}\n", sanitize_label(frontend)));
    prompt.push_str(&format!("- Backend: {}\n", sanitize_label(backend)));

    for (category, heading) in [
        (Category::Database, "Database"),
        (Category::Auth, "Auth"),
        (Category::Hosting, "Hosting"),
        (Category::Styling, "Styling"),
        (Category::Misc, "Additional tools"),
    ] {
        if let Some(value) = stack.get(category) {
            prompt.push_str(&format!("- {}: {}\n", heading, sanitize_label(value)));
        }
    }

    prompt.push_str(
        "\nFormat your response EXACTLY like this:\n\
         \n\
         \"TITLE IN QUOTES\"\n\
         \n\
         Your actual roast text goes here. Make it witty, original, and less than 150 words total.\n\
         \n\
         Important formatting instructions:\n\
         1. First line: Put your bold, catchy title in double quotes\n\
         2. Second line: Leave completely blank\n\
         3. Third line: A one-liner comment about the overall stack, witty, sarcastic, and opinionated\n\
         4. Fourth line and beyond: Your actual roast content\n\
         5. Keep your roast to 1-2 paragraphs max\n\
         6. Be spicy and sarcastic, but don't be mean-spirited\n\
         \n\
         Do not include any explanations, disclaimers or additional text.",
    );

    prompt
}

/// Stack labels are user-controlled free text that ends up inside the
/// prompt. Strip control characters, cap the length, and defang markup.
fn sanitize_label(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .take(100)
        .collect::<String>()
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("```", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(frontend: Option<&str>, backend: Option<&str>) -> StackSelection {
        StackSelection {
            frontend: frontend.map(String::from),
            backend: backend.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn deterministic_for_equal_input() {
        let s = StackSelection {
            frontend: Some("React".to_string()),
            backend: Some("Express".to_string()),
            database: Some("PostgreSQL".to_string()),
            ..Default::default()
        };
        assert_eq!(build_roast_prompt(&s), build_roast_prompt(&s));
    }

    #[test]
    fn required_fields_fall_back_to_not_specified() {
        let prompt = build_roast_prompt(&stack(None, Some("Django")));
        assert!(prompt.contains("- Frontend: Not specified"));
        assert!(prompt.contains("- Backend: Django"));
    }

    #[test]
    fn optional_categories_are_omitted_when_unset() {
        let prompt = build_roast_prompt(&stack(Some("React"), Some("Express")));
        assert!(!prompt.contains("- Database:"));
        assert!(!prompt.contains("- Auth:"));
        assert!(!prompt.contains("- Additional tools:"));
    }

    #[test]
    fn misc_renders_as_additional_tools() {
        let mut s = stack(Some("React"), Some("Express"));
        s.misc = Some("Docker, Redis".to_string());
        let prompt = build_roast_prompt(&s);
        assert!(prompt.contains("- Additional tools: Docker, Redis"));
    }

    #[test]
    fn labels_are_sanitized() {
        let s = stack(Some("<script>React</script>"), Some("Express"));
        let prompt = build_roast_prompt(&s);
        assert!(prompt.contains("&lt;script&gt;React&lt;/script&gt;"));
        assert!(!prompt.contains("<script>"));
    }

    #[test]
    fn formatting_instructions_always_present() {
        let prompt = build_roast_prompt(&stack(Some("Vue"), Some("Rails")));
        assert!(prompt.contains("\"TITLE IN QUOTES\""));
        assert!(prompt.contains("less than 150 words"));
    }
}
