//! Single-record detail view.

use maud::{Markup, html};

use hedgehog_core::HedgehogRecord;

use super::{format_timestamp, is_safe_url, page_shell};

/// Render one record, or an explicit empty state when there is none.
pub fn render(record: Option<&HedgehogRecord>, site_name: &str) -> Markup {
    let Some(record) = record else {
        let body = html! {
            div class="empty-state" {
                p { "No hedgehog found." }
                p { a href="/" { "Back to all hedgehogs" } }
            }
        };
        return page_shell("Hedgehog not found", site_name, body);
    };

    let (created, created_iso) = format_timestamp(&record.created_at);
    let (updated, updated_iso) = format_timestamp(&record.updated_at);

    let body = html! {
        article {
            @if is_safe_url(&record.image_url) {
                img class="detail-image" src=(record.image_url) alt=(record.common_name);
            }
            h1 { (record.common_name) }
            div class="binomial" { (record.binomial_name) }
            p class="detail-description" { (record.description) }
            p class="detail-meta" {
                "Added " time datetime=(created_iso) { (created) }
                " · updated " time datetime=(updated_iso) { (updated) }
            }
            div class="form-actions" {
                a class="button" href={ "/edit/" (record.id.as_str()) } { "Edit" }
                a class="button danger" href={ "/destroy/" (record.id.as_str()) } { "Delete" }
                a class="button secondary" href="/" { "Back" }
            }
        }
    };

    page_shell(&record.common_name, site_name, body)
}
