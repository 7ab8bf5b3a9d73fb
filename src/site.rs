use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use include_dir::{include_dir, Dir};
use reqwest::Url;

use crate::routes::AppState;

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

pub const FALLBACK_SITE_URL: &str = "https://example.com";

/// Canonical site metadata.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub url: Url,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(parse_site_url(None))
    }
}

impl SiteConfig {
    pub fn new(url: Url) -> Self {
        Self {
            name: "UI Prompt Atelier".into(),
            short_name: "Prompt Atelier".into(),
            description: "UI Prompt Atelier is a Gemini-powered prompt builder for creating production-ready prompts for UI-building agents.".into(),
            keywords: [
                "UI prompt builder",
                "Gemini",
                "Rust",
                "prompt engineering",
                "design systems",
                "frontend development",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            url,
        }
    }

    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }
}

/// Accepts full URLs or bare hosts; anything unparseable yields the fallback.
pub fn parse_site_url(raw: Option<&str>) -> Url {
    let fallback = || Url::parse(FALLBACK_SITE_URL).expect("fallback site URL is valid");
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback();
    };
    Url::parse(raw)
        .or_else(|_| Url::parse(&format!("https://{raw}")))
        .unwrap_or_else(|_| fallback())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

pub fn render_index(site: &SiteConfig) -> String {
    let template = ASSETS
        .get_file("index.html")
        .and_then(|f| f.contents_utf8())
        .unwrap_or_default();
    template
        .replace("{{title}}", &escape_html(&site.name))
        .replace("{{short_name}}", &escape_html(&site.short_name))
        .replace("{{description}}", &escape_html(&site.description))
        .replace("{{keywords}}", &escape_html(&site.keywords.join(", ")))
        .replace("{{canonical}}", &escape_html(&format!("{}/", site.origin())))
}

pub fn render_sitemap(site: &SiteConfig) -> String {
    let last_modified = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}/</loc>
    <lastmod>{}</lastmod>
    <changefreq>weekly</changefreq>
    <priority>1</priority>
  </url>
</urlset>
"#,
        escape_html(&site.origin()),
        last_modified
    )
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.site))
}

pub async fn sitemap(State(state): State<AppState>) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], render_sitemap(&state.site)).into_response()
}

pub async fn icon() -> Response {
    match ASSETS.get_file("icon.svg") {
        Some(file) => ([(header::CONTENT_TYPE, "image/svg+xml")], file.contents()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
