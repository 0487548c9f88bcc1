//! Landing page renderer.

use std::fmt::Write;

use trevarn_catalog::{Catalog, Language, PageEntry};

use crate::strings::Strings;
use crate::style::INDEX_CSS;

const ARROW_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" fill="none">
                        <path d="M4 10h12M12 6l4 4-4 4" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
                    </svg>"#;

/// Render the complete index page for `lang`.
///
/// `pages` must already be in display order. Titles and descriptions are
/// escaped; icons and markup fragments are emitted as-is.
pub fn render_index(lang: Language, pages: &[PageEntry], catalog: &Catalog) -> String {
    let strings = Strings::for_language(lang);
    let cards = render_cards(lang, pages, catalog);

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="icon" type="image/svg+xml" href="/favicon.svg">
<title>{page_title}</title>
<link href="https://fonts.googleapis.com/css2?family=IBM+Plex+Sans:wght@300;400;500;600;700&family=Inter:wght@300;400;500;600&display=swap" rel="stylesheet">
<style>
{css}</style>
</head>
<body>

<div class="nav-bar">
    <a href="{home}" class="nav-logo">
        <svg viewBox="0 0 64 36" width="40" fill="none" xmlns="http://www.w3.org/2000/svg">
            <polyline points="2.3,34.1 4.8,16.2 11.2,13.5 13.8,34.5 17.5,33.5 23.2,4.8 28.8,6.5 34.5,34.2 37.2,33.8 43.8,2.8 56.2,0.5 62.5,34.8" stroke="#4A6FA5" stroke-width="1.8" fill="none" stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    </a>
    <div class="nav-right">
        <a href="/trevarn-brand-guidelines.pdf" class="pdf-download" title="{pdf_title}" download>
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"></path>
                <polyline points="14 2 14 8 20 8"></polyline>
                <line x1="12" y1="18" x2="12" y2="12"></line>
                <polyline points="9 15 12 18 15 15"></polyline>
            </svg>
        </a>
        <a href="{switch_href}" class="lang-switch">{switch_label}</a>
    </div>
</div>

<div class="hero">
    <div class="hero-inner">
        <div class="hero-label">{hero_label}</div>
        <div class="hero-lockup">
            <svg viewBox="0 0 420 50" width="380" fill="none" xmlns="http://www.w3.org/2000/svg">
                <polyline points="2.3,40.1 5.6,19.0 13.2,15.8 16.5,40.6 20.6,39.4 27.3,5.6 33.9,7.6 40.6,40.3 43.8,39.8 51.5,3.3 66.1,0.6 73.6,41.0" stroke="#4A6FA5" stroke-width="2.4" fill="none" stroke-linecap="round" stroke-linejoin="round"/>
                <text x="92" y="36" font-family="Inter, sans-serif" font-weight="600" font-size="32" letter-spacing="0.12em" fill="#FFFFFF">TREVARN</text>
            </svg>
        </div>
        <p class="hero-statement">
            {hero_statement}
        </p>
        <p class="hero-sub">
            {hero_sub}
        </p>
    </div>
</div>

<div class="main">
    <div class="main-inner">
        <div class="section-header">
            <div class="section-title">{section_title}</div>
            <div class="section-count">{count} {sections_label}</div>
        </div>
        <div class="cards">{cards}
        </div>
    </div>
</div>

<div class="footer">
    <div class="footer-mark">
        <svg viewBox="0 0 64 38" width="48" xmlns="http://www.w3.org/2000/svg">
            <polygon points="2.3,34.1 4.8,16.2 11.2,13.5 13.8,34.5" fill="#4A6FA5"/>
            <polygon points="17.5,33.5 23.2,4.8 28.8,6.5 34.5,34.2" fill="#4A6FA5"/>
            <polygon points="37.2,33.8 43.8,2.8 56.2,0.5 62.5,34.8" fill="#4A6FA5"/>
        </svg>
    </div>
    <p class="footer-text">
        Trevarn Brand Identity System &middot; {month} 2026<br>
        <a href="https://trevarn.com">trevarn.com</a>
    </p>
</div>

</body>
</html>"##,
        lang = lang.code(),
        page_title = escape_html(strings.page_title),
        css = INDEX_CSS,
        home = lang.root_path(),
        pdf_title = escape_html(strings.pdf_title),
        switch_href = strings.lang_switch_href,
        switch_label = strings.lang_switch_label,
        hero_label = escape_html(strings.hero_label),
        hero_statement = strings.hero_statement,
        hero_sub = escape_html(strings.hero_sub),
        section_title = escape_html(strings.section_title),
        count = pages.len(),
        sections_label = strings.sections_label,
        cards = cards,
        month = strings.footer_month,
    )
}

fn render_cards(lang: Language, pages: &[PageEntry], catalog: &Catalog) -> String {
    let mut cards = String::new();

    for (i, page) in pages.iter().enumerate() {
        let meta = catalog.metadata(&page.filename);

        // Writing into a String cannot fail.
        let _ = write!(
            cards,
            r#"
            <a href="{href}" class="card">
                <div class="card-icon">{icon}</div>
                <div class="card-content">
                    <div class="card-num">{num:02}</div>
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
                <div class="card-arrow">
                    {arrow}
                </div>
            </a>"#,
            href = escape_html(&catalog.href(lang, &page.filename)),
            icon = meta.icon,
            num = i + 1,
            title = escape_html(&page.title),
            description = escape_html(meta.description(lang)),
            arrow = ARROW_SVG,
        );
    }

    cards
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(filename: &str, title: &str) -> PageEntry {
        PageEntry {
            filename: filename.to_string(),
            title: title.to_string(),
        }
    }

    fn sample_pages() -> Vec<PageEntry> {
        vec![
            page("trevarn-name.html", "The Name"),
            page("trevarn-origins.html", "Mark Origins"),
        ]
    }

    #[test]
    fn renders_english_cards_in_order() {
        let html = render_index(Language::En, &sample_pages(), &Catalog::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Trevarn — Brand Guidelines</title>"));
        assert!(html.contains(r#"<a href="/trevarn-name.html" class="card">"#));
        assert!(html.contains(r#"<div class="card-num">01</div>"#));
        assert!(html.contains(r#"<div class="card-num">02</div>"#));
        assert!(html.contains(r#"<div class="section-count">2 sections</div>"#));
        assert!(html.contains(r#"<a href="/FR/" class="lang-switch">FR</a>"#));
        assert!(html.contains("January 2026"));

        let name = html.find("The Name").unwrap();
        let origins = html.find("Mark Origins").unwrap();
        assert!(name < origins);
    }

    #[test]
    fn renders_french_links_and_descriptions() {
        let pages = vec![page("trevarn-name.html", "Le Nom")];

        let html = render_index(Language::Fr, &pages, &Catalog::default());

        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains(r#"<a href="/FR/trevarn-fr-name.html" class="card">"#));
        assert!(html.contains("<h3>Le Nom</h3>"));
        assert!(html.contains("<p>Étymologie, prononciation"));
        assert!(html.contains(r#"<a href="/" class="lang-switch">EN</a>"#));
        assert!(html.contains(r#"<a href="/FR/" class="nav-logo">"#));
        assert!(html.contains("Janvier 2026"));
    }

    #[test]
    fn escapes_titles_and_descriptions() {
        let pages = vec![page("trevarn-x.html", "<script>alert('x')</script>")];

        let html = render_index(Language::En, &pages, &Catalog::default());

        assert!(!html.contains("<script>"));
        assert!(html.contains("<h3>&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;</h3>"));
        // Descriptions pass through the same escaping.
        let html = render_index(Language::En, &sample_pages(), &Catalog::default());
        assert!(html.contains("Vera Molnár&#x27;s algorithmic art"));
    }

    #[test]
    fn unknown_pages_use_placeholder_metadata() {
        let pages = vec![page("trevarn-icons.html", "Icons")];

        let html = render_index(Language::En, &pages, &Catalog::default());

        assert!(html.contains(r#"<div class="card-icon">•</div>"#));
        assert!(html.contains("<p></p>"));
    }

    #[test]
    fn empty_catalog_renders_zero_count() {
        let html = render_index(Language::Fr, &[], &Catalog::default());

        assert!(html.contains(r#"<div class="section-count">0 sections</div>"#));
        assert!(html.contains("<div class=\"cards\">\n        </div>"));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn output_is_deterministic() {
        let catalog = Catalog::default();

        let first = render_index(Language::En, &sample_pages(), &catalog);
        let second = render_index(Language::En, &sample_pages(), &catalog);

        assert_eq!(first, second);
    }

    #[test]
    fn pads_numbers_to_two_digits() {
        let pages: Vec<_> = (0..12)
            .map(|i| page(&format!("trevarn-p{i}.html"), "P"))
            .collect();

        let html = render_index(Language::En, &pages, &Catalog::default());

        assert!(html.contains(r#"<div class="card-num">09</div>"#));
        assert!(html.contains(r#"<div class="card-num">12</div>"#));
    }

    #[test]
    fn escape_html_covers_quotes() {
        assert_eq!(escape_html(r#"a & "b" <c>"#), "a &amp; &quot;b&quot; &lt;c&gt;");
    }
}
