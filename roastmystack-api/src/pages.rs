use roastmystack_app::domain::{format_roast_content, RoastWithStack};
use roastmystack_app::infrastructure::og::lookup_tech_icon;
use url::Url;

/// Server-rendered share page for one roast: title, badges, body, and
/// OpenGraph metadata pointing at the preview image.
pub fn render_roast_page(roast: &RoastWithStack, base_url: &Url) -> String {
    let formatted = format_roast_content(&roast.content);
    let title = escape_html(&formatted.title);
    let body_html = formatted
        .body
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");

    let page_url = join_url(base_url, &format!("roasts/{}", roast.id));
    let image_url = join_url(base_url, &format!("roasts/{}/preview-image", roast.id));
    let description = escape_html(&stack_description(roast));
    let badges = render_badges(roast);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | RoastMyStack</title>
    <meta name="description" content="{description}">
    <meta property="og:title" content="{title} | RoastMyStack">
    <meta property="og:description" content="{description}">
    <meta property="og:type" content="website">
    <meta property="og:url" content="{page_url}">
    <meta property="og:image" content="{image_url}">
    <meta property="og:image:width" content="1200">
    <meta property="og:image:height" content="630">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:image" content="{image_url}">
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="roast">
            <h1 class="roast__title">{title}</h1>
            <div class="roast__badges">{badges}</div>
            <div class="roast__content"><p>{body_html}</p></div>
            <div class="roast__actions">
                <a href="/" class="roast__button--primary">Roast your own stack</a>
            </div>
        </div>
    </main>
</body>
</html>"#,
    )
}

/// "Tech stack roast for React, Express, PostgreSQL" from the three core
/// categories, for meta descriptions.
fn stack_description(roast: &RoastWithStack) -> String {
    use roastmystack_app::domain::Category;

    let parts: Vec<&str> = [Category::Frontend, Category::Backend, Category::Database]
        .iter()
        .filter_map(|&c| roast.stack.get(c))
        .collect();
    if parts.is_empty() {
        "A tech stack roast".to_string()
    } else {
        format!("Tech stack roast for {}", parts.join(", "))
    }
}

fn render_badges(roast: &RoastWithStack) -> String {
    let mut html = String::new();
    for (category, label) in roast.stack.entries() {
        let icon_html = match lookup_tech_icon(label).url() {
            Some(url) => format!(r#"<img src="{}" alt="" width="20" height="20">"#, url),
            None => String::new(),
        };
        html.push_str(&format!(
            r#"<span class="badge badge--{}">{}{}</span>"#,
            category.as_str(),
            icon_html,
            escape_html(label)
        ));
    }
    html
}

fn join_url(base_url: &Url, path: &str) -> String {
    base_url
        .join(path)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| format!("{}{}", base_url, path))
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const CSS: &str = r#"
:root {
    --base: #0f172a;
    --surface: #1e293b;
    --overlay: #334155;
    --muted: #64748b;
    --subtle: #94a3b8;
    --text: #e2e8f0;
    --flame: #f97316;
    --title: #f8fafc;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.roast {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.5rem; margin: 2rem 0;
}
.roast__title { color: var(--title); font-size: 1.6rem; margin-bottom: 1rem; padding-bottom: 0.75rem; border-bottom: 2px solid var(--overlay); }
.roast__badges { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.25rem; }
.badge {
    display: inline-flex; align-items: center; gap: 0.4rem;
    padding: 0.35rem 0.75rem; border-radius: 999px;
    background: rgba(255,255,255,0.06); border: 1px solid var(--overlay);
    font-size: 0.85rem;
}
.badge--frontend { border-color: rgba(255,107,107,0.5); }
.badge--backend { border-color: rgba(129,230,217,0.5); }
.badge--database { border-color: rgba(144,190,255,0.5); }
.badge--auth { border-color: rgba(233,168,255,0.5); }
.badge--hosting { border-color: rgba(255,213,128,0.5); }
.badge--styling { border-color: rgba(132,204,145,0.5); }
.badge--misc { border-color: rgba(200,200,200,0.5); }
.roast__content { line-height: 1.8; font-size: 1.05rem; }
.roast__content p { margin-bottom: 1rem; }
.roast__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.roast__button--primary {
    padding: 0.75rem 1.5rem; background: var(--flame); color: var(--base);
    border: none; border-radius: 8px; font-weight: 600; cursor: pointer;
    text-decoration: none; display: inline-block;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use roastmystack_app::domain::StackSelection;
    use uuid::Uuid;

    fn sample() -> RoastWithStack {
        RoastWithStack {
            id: Uuid::nil(),
            stack_id: Uuid::nil(),
            content: "\"Callback Hell\"\n\nEnjoy the pyramid of doom.".to_string(),
            is_public: true,
            created_at: None,
            stack: StackSelection {
                frontend: Some("React".to_string()),
                backend: Some("Express".to_string()),
                database: Some("PostgreSQL".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn page_carries_title_body_and_og_image() {
        let base = Url::parse("https://roastmystack.example/").unwrap();
        let page = render_roast_page(&sample(), &base);
        assert!(page.contains("<h1 class=\"roast__title\">Callback Hell</h1>"));
        assert!(page.contains("Enjoy the pyramid of doom."));
        assert!(page.contains(
            "https://roastmystack.example/roasts/00000000-0000-0000-0000-000000000000/preview-image"
        ));
        assert!(page.contains("Tech stack roast for React, Express, PostgreSQL"));
    }

    #[test]
    fn page_is_identical_across_renders() {
        let base = Url::parse("https://roastmystack.example/").unwrap();
        assert_eq!(
            render_roast_page(&sample(), &base),
            render_roast_page(&sample(), &base)
        );
    }

    #[test]
    fn labels_are_escaped() {
        let mut roast = sample();
        roast.stack.frontend = Some("<img onerror=x>".to_string());
        let base = Url::parse("https://roastmystack.example/").unwrap();
        let page = render_roast_page(&roast, &base);
        assert!(!page.contains("<img onerror"));
        assert!(page.contains("&lt;img onerror=x&gt;"));
    }
}
