//! Standalone Document
//!
//! Wraps a page's accumulated markup in a self-contained HTML document.
//! Preview, export and publish all use the same output.

use crate::config;
use crate::models::{MediaFile, Page, Settings, WorkspaceState};
use crate::placeholder::escape_xml;

/// Color tokens for one theme
struct Palette {
    bg: &'static str,
    fg: &'static str,
    muted: &'static str,
    card: &'static str,
    border: &'static str,
    accent: &'static str,
    accent_fg: &'static str,
}

const LIGHT: Palette = Palette {
    bg: "#ffffff",
    fg: "#0f172a",
    muted: "#475569",
    card: "#f8fafc",
    border: "#e2e8f0",
    accent: "#4f46e5",
    accent_fg: "#ffffff",
};

const DARK: Palette = Palette {
    bg: "#0b1020",
    fg: "#e5e7eb",
    muted: "#94a3b8",
    card: "#111827",
    border: "#1f2937",
    accent: "#6366f1",
    accent_fg: "#ffffff",
};

/// Theme-independent rules; colors come from the `:root` variables
const BASE_RULES: &str = "*{box-sizing:border-box}\
body{margin:0;padding:24px;background:var(--bg);color:var(--fg);font-family:system-ui,-apple-system,'Segoe UI',Roboto,sans-serif;line-height:1.5}\
.blk{background:var(--card);border:1px solid var(--border);border-radius:14px;padding:18px;margin:0 auto 14px;max-width:1080px}\
.muted{color:var(--muted)}\
.btn{display:inline-block;padding:8px 14px;border-radius:10px;border:1px solid var(--border);background:transparent;color:var(--fg);text-decoration:none;cursor:pointer;font:inherit}\
.btn.acc{background:var(--accent);border-color:var(--accent);color:var(--accent-fg)}\
.blk-actions{display:none}\
input{padding:8px 10px;border-radius:10px;border:1px solid var(--border);background:var(--bg);color:var(--fg);font:inherit}\
img{display:block;max-width:100%}\
@media (max-width:720px){.blk [style*='grid-template-columns']{grid-template-columns:1fr !important}}";

fn root_rule(palette: &Palette) -> String {
    format!(
        ":root{{--bg:{};--fg:{};--muted:{};--card:{};--border:{};--accent:{};--accent-fg:{}}}",
        palette.bg, palette.fg, palette.muted, palette.card, palette.border, palette.accent, palette.accent_fg
    )
}

/// Title for exported documents: brand name, or `Landing` when blank
pub fn document_title(settings: &Settings) -> &str {
    let brand = settings.brand_name.trim();
    if brand.is_empty() {
        config::FALLBACK_TITLE
    } else {
        brand
    }
}

/// Complete HTML document for `page`
///
/// Output depends only on the arguments. `settings.favicon` is resolved
/// against `media`; an unknown id simply omits the icon link.
pub fn render_standalone_document(page: &Page, settings: &Settings, media: &[MediaFile]) -> String {
    let palette = if settings.is_light() { &LIGHT } else { &DARK };
    let favicon = if settings.favicon.is_empty() {
        None
    } else {
        media.iter().find(|file| file.id == settings.favicon)
    };

    let mut out = String::with_capacity(page.html.len() + 2048);
    out.push_str("<!DOCTYPE html>\n<html lang=\"");
    out.push_str(&escape_xml(lang_or_default(settings)));
    out.push_str("\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    out.push_str(&escape_xml(document_title(settings)));
    out.push_str("</title>\n");
    if let Some(icon) = favicon {
        out.push_str("<link rel=\"icon\" href=\"");
        out.push_str(&escape_xml(&icon.data_url));
        out.push_str("\">\n");
    }
    out.push_str("<style>");
    out.push_str(&root_rule(palette));
    out.push_str(BASE_RULES);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&page.html);
    out.push_str("\n</body>\n</html>\n");
    out
}

fn lang_or_default(settings: &Settings) -> &str {
    let lang = settings.language.trim();
    if lang.is_empty() {
        config::DEFAULT_LANGUAGE
    } else {
        lang
    }
}

/// Document for the active page (first page when the id dangles)
pub fn render_current_page(state: &WorkspaceState) -> Option<String> {
    state
        .current_page()
        .map(|page| render_standalone_document(page, &state.settings, &state.media))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Page {
        Page {
            id: "home".to_string(),
            name: "Beranda".to_string(),
            html: html.to_string(),
        }
    }

    fn section<'a>(doc: &'a str, open: &str, close: &str) -> &'a str {
        let start = doc.find(open).unwrap() + open.len();
        let end = doc[start..].find(close).unwrap() + start;
        &doc[start..end]
    }

    fn without_style(doc: &str) -> String {
        let start = doc.find("<style>").unwrap();
        let end = doc.find("</style>").unwrap();
        format!("{}{}", &doc[..start], &doc[end..])
    }

    #[test]
    fn test_render_is_pure() {
        let settings = Settings::default();
        let p = page("<section>hi</section>");
        assert_eq!(
            render_standalone_document(&p, &settings, &[]),
            render_standalone_document(&p, &settings, &[])
        );
    }

    #[test]
    fn test_scaffold_and_body() {
        let doc = render_standalone_document(&page("<p>x</p>"), &Settings::default(), &[]);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<meta charset=\"utf-8\">"));
        assert!(doc.contains("name=\"viewport\""));
        assert_eq!(section(&doc, "<title>", "</title>"), "Page Builder");
        assert_eq!(section(&doc, "<body>\n", "\n</body>"), "<p>x</p>");
        assert!(!doc.contains("rel=\"icon\""));
    }

    #[test]
    fn test_theme_changes_only_color_tokens() {
        let p = page("<p>x</p>");
        let mut light = Settings::default();
        light.theme = "light".to_string();
        let mut other = Settings::default();
        other.theme = "solarized".to_string();

        let light_doc = render_standalone_document(&p, &light, &[]);
        let dark_doc = render_standalone_document(&p, &Settings::default(), &[]);
        let other_doc = render_standalone_document(&p, &other, &[]);

        assert_ne!(light_doc, dark_doc);
        assert_eq!(dark_doc, other_doc);
        assert_eq!(without_style(&light_doc), without_style(&dark_doc));
        assert!(light_doc.contains("--bg:#ffffff"));
        assert!(dark_doc.contains("--bg:#0b1020"));
    }

    #[test]
    fn test_title_fallback_and_escaping() {
        let mut settings = Settings::default();
        settings.brand_name = "   ".to_string();
        let doc = render_standalone_document(&page(""), &settings, &[]);
        assert_eq!(section(&doc, "<title>", "</title>"), "Landing");

        settings.brand_name = "Kopi & <Teh>".to_string();
        let doc = render_standalone_document(&page(""), &settings, &[]);
        assert_eq!(section(&doc, "<title>", "</title>"), "Kopi &amp; &lt;Teh&gt;");
    }

    #[test]
    fn test_favicon_resolved_from_media() {
        let icon = MediaFile {
            id: "media-7".to_string(),
            name: "icon.png".to_string(),
            data_url: "data:image/png;base64,iVBO".to_string(),
            mime: "image/png".to_string(),
        };
        let mut settings = Settings::default();
        settings.favicon = "media-7".to_string();

        let doc = render_standalone_document(&page(""), &settings, std::slice::from_ref(&icon));
        assert!(doc.contains("<link rel=\"icon\" href=\"data:image/png;base64,iVBO\">"));

        settings.favicon = "media-404".to_string();
        let doc = render_standalone_document(&page(""), &settings, &[icon]);
        assert!(!doc.contains("rel=\"icon\""));
    }
}
