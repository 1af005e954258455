//! HTML rendering for the hedgehog catalog.
//!
//! Every view is a pure function from its data to a complete page, built
//! with [maud](https://maud.lambda.xyz/) so that all dynamic values are
//! escaped at compile-time-checked insertion points.

pub mod detail;
pub mod form;
pub mod list;

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#faf8f5;--fg:#2b2118;--fg2:#5c4d3f;--fg3:#9a8b7c;--accent:#8a5a2b;--accent-hover:#6d4520;--danger:#b3261e;--border:rgba(138,90,43,.2);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
header.site{max-width:760px;width:100%;display:flex;align-items:center;justify-content:space-between;margin-bottom:1.5rem}
header.site a.site-name{font-size:1.4rem;font-weight:800;letter-spacing:-.03em;color:var(--fg);text-decoration:none}
main{max-width:760px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
h1{font-size:1.6rem;letter-spacing:-.02em;margin-bottom:1rem}

.button{display:inline-block;padding:.45rem 1rem;background:var(--accent);color:#fff;border:none;border-radius:6px;font-size:.9rem;font-weight:500;cursor:pointer;text-decoration:none}
.button:hover{background:var(--accent-hover);text-decoration:none}
.button.secondary{background:none;color:var(--accent);border:1px solid var(--border)}
.button.danger{background:var(--danger)}

.hedgehog-list{display:flex;flex-direction:column;gap:.75rem}
.hedgehog-card{display:flex;gap:1rem;padding:1rem;border:1px solid var(--border);border-radius:10px;align-items:flex-start}
.hedgehog-thumb{width:88px;height:88px;border-radius:8px;object-fit:cover;flex-shrink:0;background:var(--border)}
.hedgehog-info{flex:1;min-width:0}
.hedgehog-name{font-weight:600;font-size:1.1rem;color:var(--fg)}
.binomial{font-style:italic;color:var(--fg2)}
.hedgehog-excerpt{color:var(--fg2);font-size:.95rem;margin-top:.25rem;word-break:break-word}
.hedgehog-actions{display:flex;gap:.75rem;margin-top:.5rem;font-size:.9rem}

.detail-image{width:100%;max-height:360px;object-fit:cover;border-radius:10px;margin-bottom:1rem}
.detail-description{white-space:pre-wrap;word-break:break-word;font-size:1.05rem;line-height:1.75;margin:1rem 0}
.detail-meta{font-size:.8rem;color:var(--fg3)}
.empty-state{padding:2rem 1rem;text-align:center;color:var(--fg3);border:1px dashed var(--border);border-radius:10px}

form.hedgehog-form{display:flex;flex-direction:column;gap:1rem}
.form-field label{display:block;font-weight:600;font-size:.9rem;margin-bottom:.25rem}
.form-field input,.form-field textarea{width:100%;padding:.5rem .65rem;border:1px solid var(--border);border-radius:6px;font:inherit;background:#fff;color:var(--fg)}
.form-field textarea{min-height:160px;resize:vertical}
.form-field.has-error input,.form-field.has-error textarea{border-color:var(--danger)}
.field-error{color:var(--danger);font-size:.85rem;margin-top:.25rem}
.form-actions{display:flex;gap:.75rem;align-items:center}

.footer{text-align:center;margin-top:1.5rem;font-size:.8rem;color:var(--fg3)}

@media(prefers-color-scheme:dark){
:root{--bg:#16120e;--fg:#efe7de;--fg2:#c2b4a5;--fg3:#857565;--accent:#d39b5f;--accent-hover:#e6b37d;--border:rgba(211,155,95,.25)}
.form-field input,.form-field textarea{background:#1f1914}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#faf8f5;color:#2b2118;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#5c4d3f;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#8a5a2b}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles only, no scripts. Record images may be served over plain
/// HTTP, so `http:` is allowed for images. Forms may only post back here.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: http: data:; form-action 'self'; frame-ancestors 'none'";

/// Render the full HTML page shell around `body_content`.
pub fn page_shell(title: &str, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · " (site_name) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="site" {
                    a class="site-name" href="/" { (site_name) }
                    a class="button" href="/new" { "Add a hedgehog" }
                }
                main { (body_content) }
                footer class="footer" { (site_name) " catalog" }
            }
        }
    }
}

/// Render a standalone error page.
pub fn error_page(title: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="robots" content="noindex";
                style { (PreEscaped(ERROR_CSS)) }
            }
            body {
                main class="error-page" {
                    h1 { (title) }
                    p { (message) }
                    a href="/" { "Back to the catalog" }
                }
            }
        }
    }
}

/// Only http(s) URLs may be placed in `src`/`href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Shorten text to at most `max_chars` characters, appending "..." if cut.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", s[..end].trim_end()),
        None => s.to_string(),
    }
}

/// Format a timestamp as "Mon DD, YYYY HH:MM UTC" plus its ISO form.
pub fn format_timestamp(ts: &DateTime<Utc>) -> (String, String) {
    let display = ts.format("%b %d, %Y %H:%M UTC").to_string();
    let iso = ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    (display, iso)
}
