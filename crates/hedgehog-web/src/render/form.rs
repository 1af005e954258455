//! New and edit forms.
//!
//! Both forms read the flash keys produced by a failed write
//! (`commonNameError`, `binomialNameError`, `descriptionError`,
//! `imageURLError`) and show each message under its input.

use maud::{Markup, html};

use hedgehog_core::{Field, HedgehogFields, HedgehogRecord};

use super::page_shell;
use crate::flash::FlashMessages;

/// Render the empty "new hedgehog" form posting to `/create`.
pub fn new_form(flash: &FlashMessages, site_name: &str) -> Markup {
    let body = html! {
        h1 { "Add a hedgehog" }
        (form("/create", &HedgehogFields::default(), flash, "Create"))
    };
    page_shell("Add a hedgehog", site_name, body)
}

/// Render the edit form prefilled from `record`, posting to `/{id}`.
pub fn edit_form(record: Option<&HedgehogRecord>, flash: &FlashMessages, site_name: &str) -> Markup {
    let Some(record) = record else {
        let body = html! {
            div class="empty-state" {
                p { "No hedgehog found to edit." }
                p { a href="/" { "Back to all hedgehogs" } }
            }
        };
        return page_shell("Hedgehog not found", site_name, body);
    };

    let action = format!("/{}", record.id);
    let body = html! {
        h1 { "Edit " (record.common_name) }
        (form(&action, &record.fields(), flash, "Save changes"))
    };
    page_shell(&format!("Edit {}", record.common_name), site_name, body)
}

fn form(action: &str, values: &HedgehogFields, flash: &FlashMessages, submit: &str) -> Markup {
    html! {
        form class="hedgehog-form" method="post" action=(action) {
            @for field in Field::ALL {
                (field_row(field, field.value(values).unwrap_or_default(), flash.get(field.flash_key())))
            }
            div class="form-actions" {
                button class="button" type="submit" { (submit) }
                a class="button secondary" href="/" { "Cancel" }
            }
        }
    }
}

fn field_row(field: Field, value: &str, error: Option<&str>) -> Markup {
    let key = field.form_key();
    let class = if error.is_some() {
        "form-field has-error"
    } else {
        "form-field"
    };

    html! {
        div class=(class) {
            label for=(key) { (field.label()) }
            @if field == Field::Description {
                textarea id=(key) name=(key) { (value) }
            } @else {
                input id=(key) name=(key) type="text" value=(value);
            }
            @if let Some(message) = error {
                p class="field-error" { (message) }
            }
        }
    }
}
