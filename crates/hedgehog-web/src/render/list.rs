//! Catalog list view.

use maud::{Markup, html};

use hedgehog_core::HedgehogRecord;

use super::{excerpt, is_safe_url, page_shell};

/// Characters of description shown per list entry.
const EXCERPT_CHARS: usize = 160;

/// Render every record as a card with view/edit/delete actions.
pub fn render(records: &[HedgehogRecord], site_name: &str) -> Markup {
    let body = html! {
        h1 { "All hedgehogs" }
        @if records.is_empty() {
            div class="empty-state" {
                p { "No hedgehogs yet." }
                p { a href="/new" { "Add the first one" } }
            }
        } @else {
            div class="hedgehog-list" {
                @for record in records {
                    (card(record))
                }
            }
        }
    };

    page_shell("All hedgehogs", site_name, body)
}

fn card(record: &HedgehogRecord) -> Markup {
    let href = format!("/{}", record.id);

    html! {
        article class="hedgehog-card" {
            @if is_safe_url(&record.image_url) {
                img class="hedgehog-thumb" src=(record.image_url) alt=(record.common_name) loading="lazy";
            }
            div class="hedgehog-info" {
                a class="hedgehog-name" href=(href) { (record.common_name) }
                div class="binomial" { (record.binomial_name) }
                p class="hedgehog-excerpt" { (excerpt(&record.description, EXCERPT_CHARS)) }
                div class="hedgehog-actions" {
                    a href=(href) { "View" }
                    a href={ "/edit/" (record.id.as_str()) } { "Edit" }
                    a href={ "/destroy/" (record.id.as_str()) } { "Delete" }
                }
            }
        }
    }
}
