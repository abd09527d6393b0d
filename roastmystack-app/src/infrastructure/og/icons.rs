//! Best-effort icon lookup for technology labels.
//!
//! Any string is a valid technology name; labels without a known icon get
//! an explicit [`TechIcon::NoMatch`] and render as label-only badges. The
//! lookup never fails.

/// Result of an icon lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechIcon {
    Url(&'static str),
    NoMatch,
}

impl TechIcon {
    pub fn url(&self) -> Option<&'static str> {
        match self {
            TechIcon::Url(url) => Some(url),
            TechIcon::NoMatch => None,
        }
    }
}

pub fn lookup_tech_icon(label: &str) -> TechIcon {
    let normalized: String = label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if normalized.is_empty() {
        return TechIcon::NoMatch;
    }
    let key = resolve_alias(&normalized);
    match icon_url(key) {
        Some(url) => TechIcon::Url(url),
        None => TechIcon::NoMatch,
    }
}

/// Common label spellings that map onto another entry's icon.
fn resolve_alias(normalized: &str) -> &str {
    match normalized {
        "nextauthjs" => "nextjs",
        "nuxtjs" => "nuxt",
        "vanillajs" => "javascript",
        "rubyonrails" => "rails",
        "springboot" => "spring",
        "supabaseauth" => "supabase",
        "firebaseauth" => "firebase",
        "tailwind" => "tailwindcss",
        "amazonwebservices" => "aws",
        "googlecloud" => "gcp",
        "materialui" => "mui",
        other => other,
    }
}

fn icon_url(key: &str) -> Option<&'static str> {
    let url = match key {
        // Frontend
        "react" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
        "vue" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vuejs/vuejs-original.svg",
        "angular" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/angularjs/angularjs-original.svg",
        "svelte" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/svelte/svelte-original.svg",
        "nextjs" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nextjs/nextjs-original.svg",
        "nuxt" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nuxtjs/nuxtjs-original.svg",
        "jquery" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/jquery/jquery-original.svg",
        "javascript" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
        // No dedicated Remix icon upstream
        "remix" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
        // Backend
        "nodejs" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
        "express" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/express/express-original.svg",
        "django" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg",
        "flask" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flask/flask-original.svg",
        "rails" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rails/rails-plain.svg",
        "laravel" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/laravel/laravel-plain.svg",
        "spring" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/spring/spring-original.svg",
        "fastapi" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/fastapi/fastapi-original.svg",
        "go" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/go/go-original.svg",
        // Database
        "postgresql" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg",
        "mysql" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
        "mongodb" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
        "supabase" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/supabase/supabase-original.svg",
        "firebase" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/firebase/firebase-plain.svg",
        "dynamodb" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original.svg",
        "sqlite" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/sqlite/sqlite-original.svg",
        "redis" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/redis/redis-original.svg",
        "couchdb" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/couchdb/couchdb-original.svg",
        // Auth
        "oauth" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/oauth/oauth-original.svg",
        // Hosting
        "aws" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original.svg",
        "digitalocean" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/digitalocean/digitalocean-original.svg",
        "railway" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/railway/railway-original.svg",
        "vercel" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vercel/vercel-original.svg",
        "netlify" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/netlify/netlify-original.svg",
        "gcp" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/googlecloud/googlecloud-original.svg",
        "azure" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/azure/azure-original.svg",
        "heroku" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/heroku/heroku-original.svg",
        // Styling
        "tailwindcss" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tailwindcss/tailwindcss-plain.svg",
        "bootstrap" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bootstrap/bootstrap-original.svg",
        "sass" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/sass/sass-original.svg",
        "mui" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/materialui/materialui-original.svg",
        _ => return None,
    };
    Some(url)
}
