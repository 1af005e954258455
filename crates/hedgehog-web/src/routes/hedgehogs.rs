//! CRUD handlers for hedgehog records.
//!
//! Reads render a page; writes redirect. A failed validation never reaches
//! the error page: its messages are flashed to the session and the browser
//! is sent back to the form it came from.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use hedgehog_core::{HedgehogFields, RecordId, StoreError};

use crate::error::WebError;
use crate::flash::{Flash, FlashMessages, Session};
use crate::render::{detail, form, list};
use crate::state::AppState;

/// `GET /`
pub async fn index(State(state): State<AppState>, flash: Flash) -> Result<Response, WebError> {
    let records = state.store.list_all()?;
    let markup = list::render(&records, &state.config.site_name);
    Ok(flash.session.attach(markup))
}

/// `GET /new`
pub async fn new_form(State(state): State<AppState>, flash: Flash) -> Response {
    let markup = form::new_form(&flash.messages, &state.config.site_name);
    flash.session.attach(markup)
}

/// `POST /create`
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<HedgehogFields>,
) -> Result<Response, WebError> {
    match state.store.create(&fields) {
        Ok(record) => {
            tracing::info!(id = %record.id, common_name = %record.common_name, "hedgehog created");
            Ok(session.attach(Redirect::to("/")))
        }
        Err(StoreError::Validation(errors)) => {
            tracing::info!(failed_fields = errors.len(), "hedgehog not created: {errors}");
            state.flash.set(&session, FlashMessages::from(&errors)).await;
            Ok(session.attach(Redirect::to("/new")))
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /{id}`
///
/// An unknown id renders the detail page's empty state rather than a 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    flash: Flash,
) -> Result<Response, WebError> {
    let id = RecordId::from(id);
    let record = state.store.find_by_id(&id)?;
    if record.is_none() {
        tracing::debug!(id = %id, "hedgehog not found");
    }
    let markup = detail::render(record.as_ref(), &state.config.site_name);
    Ok(flash.session.attach(markup))
}

/// `GET /edit/{id}`
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    flash: Flash,
) -> Result<Response, WebError> {
    let id = RecordId::from(id);
    let record = state.store.find_by_id(&id)?;
    if record.is_none() {
        tracing::debug!(id = %id, "hedgehog not found for edit");
    }
    let markup = form::edit_form(record.as_ref(), &flash.messages, &state.config.site_name);
    Ok(flash.session.attach(markup))
}

/// `POST /{id}`
///
/// The store rejects unknown ids before validating, so both redirect
/// targets below only ever carry ids the store itself issued.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    session: Session,
    Form(fields): Form<HedgehogFields>,
) -> Result<Response, WebError> {
    let id = RecordId::from(id);
    match state.store.update(&id, &fields) {
        Ok(record) => {
            tracing::info!(id = %record.id, "hedgehog updated");
            Ok(session.attach(Redirect::to(&format!("/{}", record.id))))
        }
        Err(StoreError::Validation(errors)) => {
            tracing::info!(id = %id, failed_fields = errors.len(), "hedgehog not updated: {errors}");
            state.flash.set(&session, FlashMessages::from(&errors)).await;
            Ok(session.attach(Redirect::to(&format!("/edit/{id}"))))
        }
        Err(StoreError::NotFound(_)) => {
            tracing::warn!(id = %id, "update for unknown hedgehog");
            Ok(session.attach(Redirect::to("/")))
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /destroy/{id}`
///
/// Always redirects home; a missing record or failed delete is only logged.
pub async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let id = RecordId::from(id);
    match state.store.delete(&id) {
        Ok(()) => tracing::info!(id = %id, "hedgehog deleted"),
        Err(StoreError::NotFound(_)) => tracing::debug!(id = %id, "hedgehog already gone"),
        Err(err) => tracing::error!(id = %id, error = %err, "hedgehog not deleted"),
    }
    Redirect::to("/")
}
