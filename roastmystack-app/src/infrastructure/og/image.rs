use super::icons::lookup_tech_icon;
use crate::domain::{format_roast_content, preview_excerpt, Category, RoastWithStack};

pub const PREVIEW_WIDTH: u32 = 1200;
pub const PREVIEW_HEIGHT: u32 = 630;

const MARGIN: i32 = 80;
const TITLE_Y: i32 = 200;
const TITLE_LINE_HEIGHT: i32 = 62;
const TITLE_WRAP_CHARS: usize = 38;
const EXCERPT_WRAP_CHARS: usize = 70;
const BADGE_HEIGHT: i32 = 52;
const BADGE_GAP: i32 = 16;
const ICON_SIZE: i32 = 36;
const LABEL_CHAR_WIDTH: i32 = 12;

/// Social-preview card for one roast: title, a short excerpt, and a badge
/// per non-empty stack category. Fixed 1200x630 canvas, deterministic
/// output for an unchanged row.
pub fn render_preview_svg(roast: &RoastWithStack, excerpt_limit: usize) -> String {
    let formatted = format_roast_content(&roast.content);
    let excerpt = preview_excerpt(&formatted.body, excerpt_limit);

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = PREVIEW_WIDTH,
        h = PREVIEW_HEIGHT,
    ));
    svg.push_str(
        "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\
         <stop offset=\"0%\" stop-color=\"#1e293b\"/>\
         <stop offset=\"100%\" stop-color=\"#0f172a\"/>\
         </linearGradient></defs>",
    );
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"url(#bg)\"/>",
        PREVIEW_WIDTH, PREVIEW_HEIGHT
    ));

    // Brand line
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"96\" font-family=\"sans-serif\" font-size=\"30\" font-weight=\"700\" fill=\"#f97316\">RoastMyStack</text>",
        MARGIN
    ));

    let mut y = TITLE_Y;
    for line in wrap_text(&formatted.title, TITLE_WRAP_CHARS, 2) {
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"48\" font-weight=\"800\" fill=\"#f8fafc\">{}</text>",
            MARGIN,
            y,
            escape_xml(&line)
        ));
        y += TITLE_LINE_HEIGHT;
    }

    if let Some(excerpt) = excerpt {
        y += 20;
        for line in wrap_text(&excerpt, EXCERPT_WRAP_CHARS, 2) {
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"26\" fill=\"#cbd5e1\">{}</text>",
                MARGIN,
                y,
                escape_xml(&line)
            ));
            y += 38;
        }
    }

    render_badges(&mut svg, roast);

    svg.push_str("</svg>");
    svg
}

fn render_badges(svg: &mut String, roast: &RoastWithStack) {
    let mut x = MARGIN;
    let mut y = 470;

    for (category, label) in roast.stack.entries() {
        let icon = lookup_tech_icon(label);
        let icon_width = if icon.url().is_some() {
            ICON_SIZE + 12
        } else {
            0
        };
        let label_chars = label.chars().count().min(40) as i32;
        let width = 24 + icon_width + label_chars * LABEL_CHAR_WIDTH + 24;

        // Wrap onto a second badge row; anything past that is dropped.
        if x + width > PREVIEW_WIDTH as i32 - MARGIN {
            x = MARGIN;
            y += BADGE_HEIGHT + BADGE_GAP;
            if y + BADGE_HEIGHT > PREVIEW_HEIGHT as i32 - 20 {
                break;
            }
        }

        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{h}\" rx=\"26\" fill=\"rgba(255,255,255,0.06)\" stroke=\"{color}\" stroke-width=\"2\"/>",
            h = BADGE_HEIGHT,
            color = category_color(category),
        ));

        let mut text_x = x + 24;
        if let Some(url) = icon.url() {
            svg.push_str(&format!(
                "<image x=\"{}\" y=\"{}\" width=\"{s}\" height=\"{s}\" href=\"{}\"/>",
                text_x,
                y + (BADGE_HEIGHT - ICON_SIZE) / 2,
                escape_xml(url),
                s = ICON_SIZE,
            ));
            text_x += ICON_SIZE + 12;
        }
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"24\" fill=\"#e2e8f0\">{}</text>",
            text_x,
            y + 34,
            escape_xml(label)
        ));

        x += width + BADGE_GAP;
    }
}

/// Border tint per category, same palette the product uses elsewhere.
fn category_color(category: Category) -> &'static str {
    match category {
        Category::Frontend => "rgba(255,107,107,0.5)",
        Category::Backend => "rgba(129,230,217,0.5)",
        Category::Database => "rgba(144,190,255,0.5)",
        Category::Auth => "rgba(233,168,255,0.5)",
        Category::Hosting => "rgba(255,213,128,0.5)",
        Category::Styling => "rgba(132,204,145,0.5)",
        Category::Misc => "rgba(200,200,200,0.5)",
    }
}

/// Greedy word wrap; the final permitted line swallows the remainder.
fn wrap_text(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if candidate_len > max_chars && !current.is_empty() {
            if lines.len() + 1 == max_lines {
                current.push(' ');
                current.push_str(word);
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StackSelection;
    use uuid::Uuid;

    fn roast(stack: StackSelection) -> RoastWithStack {
        RoastWithStack {
            id: Uuid::nil(),
            stack_id: Uuid::nil(),
            content: "\"A Bold Stack\"\n\nFirst body line here.\nSecond body line.".to_string(),
            is_public: true,
            created_at: None,
            stack,
        }
    }

    #[test]
    fn canvas_is_fixed_1200_by_630() {
        let svg = render_preview_svg(&roast(StackSelection::default()), 100);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"1200\" height=\"630\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn identical_input_renders_identical_bytes() {
        let r = roast(StackSelection {
            frontend: Some("React".to_string()),
            backend: Some("Express".to_string()),
            ..Default::default()
        });
        assert_eq!(render_preview_svg(&r, 100), render_preview_svg(&r, 100));
    }

    #[test]
    fn known_tech_gets_an_icon_badge() {
        let r = roast(StackSelection {
            frontend: Some("React".to_string()),
            backend: Some("Express".to_string()),
            ..Default::default()
        });
        let svg = render_preview_svg(&r, 100);
        assert!(svg.contains("react-original.svg"));
        assert!(svg.contains(">React</text>"));
    }

    #[test]
    fn unknown_tech_renders_label_only() {
        let r = roast(StackSelection {
            frontend: Some("FooFramework".to_string()),
            backend: Some("BarServer".to_string()),
            ..Default::default()
        });
        let svg = render_preview_svg(&r, 100);
        assert!(svg.contains(">FooFramework</text>"));
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let r = roast(StackSelection {
            frontend: Some("C<>&".to_string()),
            backend: Some("Express".to_string()),
            ..Default::default()
        });
        let svg = render_preview_svg(&r, 100);
        assert!(svg.contains("C&lt;&gt;&amp;"));
    }

    #[test]
    fn wrap_respects_line_budget() {
        let wrapped = wrap_text("one two three four five six seven eight", 10, 2);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[0], "one two");
        assert_eq!(wrapped[1], "three four five six seven eight");
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("short title", 38, 2), vec!["short title"]);
    }
}
