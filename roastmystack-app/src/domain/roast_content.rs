/// Roast text split into the parts the pages and the preview image need.
///
/// Generated content is expected to start with a quoted title line, then a
/// blank line, then body paragraphs. The model does not always cooperate,
/// so parsing is lenient: the first non-blank line is the title, everything
/// after it is the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRoast {
    pub title: String,
    /// Body lines as generated, internal blank lines preserved.
    pub body: Vec<String>,
}

pub fn format_roast_content(content: &str) -> FormattedRoast {
    let mut lines = content.lines().map(str::trim_end);

    let title_line = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line,
            None => {
                return FormattedRoast {
                    title: String::new(),
                    body: Vec::new(),
                }
            }
        }
    };

    let body: Vec<String> = lines
        .skip_while(|line| line.trim().is_empty())
        .map(str::to_string)
        .collect();

    FormattedRoast {
        title: clean_title(title_line),
        body,
    }
}

/// Short teaser for previews and descriptions: the first one or two body
/// lines, cut to `limit` characters with a trailing ellipsis when truncated.
pub fn preview_excerpt(body: &[String], limit: usize) -> Option<String> {
    let joined = body
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        return None;
    }

    if joined.chars().count() <= limit {
        Some(joined)
    } else {
        let mut cut: String = joined.chars().take(limit).collect();
        cut.push_str("...");
        Some(cut)
    }
}

/// Strips a leading markdown heading marker and surrounding double quotes.
fn clean_title(line: &str) -> String {
    let trimmed = line.trim().trim_start_matches('#').trim_start();
    trimmed.trim_matches('"').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "\"React and Express: Betting on Callback Hell\"\n\nAh, the classic combo.\nBold choice for 2025.\n\nGood luck with that.";

    #[test]
    fn splits_title_and_body() {
        let formatted = format_roast_content(CONTENT);
        assert_eq!(formatted.title, "React and Express: Betting on Callback Hell");
        assert_eq!(
            formatted.body,
            vec![
                "Ah, the classic combo.",
                "Bold choice for 2025.",
                "",
                "Good luck with that.",
            ]
        );
    }

    #[test]
    fn strips_heading_marker_from_title() {
        let formatted = format_roast_content("# \"Spicy Title\"\n\nbody");
        assert_eq!(formatted.title, "Spicy Title");
    }

    #[test]
    fn skips_leading_blank_lines() {
        let formatted = format_roast_content("\n\nTitle\nbody");
        assert_eq!(formatted.title, "Title");
        assert_eq!(formatted.body, vec!["body"]);
    }

    #[test]
    fn empty_content_yields_empty_parts() {
        let formatted = format_roast_content("");
        assert!(formatted.title.is_empty());
        assert!(formatted.body.is_empty());
    }

    #[test]
    fn excerpt_joins_first_two_lines() {
        let body = vec![
            "First line.".to_string(),
            "Second line.".to_string(),
            "Third line never shows.".to_string(),
        ];
        assert_eq!(
            preview_excerpt(&body, 100).as_deref(),
            Some("First line. Second line.")
        );
    }

    #[test]
    fn excerpt_truncates_with_ellipsis() {
        // Two lines concatenating to 130 chars get cut at the limit.
        let body = vec!["a".repeat(65), "b".repeat(64)];
        let excerpt = preview_excerpt(&body, 100).unwrap();
        assert_eq!(excerpt.chars().count(), 103);
        assert!(excerpt.ends_with("..."));

        let wider = preview_excerpt(&body, 120).unwrap();
        assert_eq!(wider.chars().count(), 123);
    }

    #[test]
    fn excerpt_at_limit_keeps_no_ellipsis() {
        let body = vec!["x".repeat(100)];
        let excerpt = preview_excerpt(&body, 100).unwrap();
        assert_eq!(excerpt.chars().count(), 100);
        assert!(!excerpt.ends_with("..."));
    }

    #[test]
    fn excerpt_of_empty_body_is_none() {
        assert_eq!(preview_excerpt(&[], 100), None);
        assert_eq!(preview_excerpt(&["   ".to_string()], 100), None);
    }
}
