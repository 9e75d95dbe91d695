// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use hanzicards_core::error::Fallible;
use hanzicards_core::note::NoteFields;
use hanzicards_core::note::build_notes;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cmd::preview::template::index_body;
use crate::cmd::preview::template::note_body;
use crate::cmd::preview::template::page_template;
use crate::collection::Collection;
use crate::utils::CACHE_CONTROL_IMMUTABLE;

pub struct PreviewConfig {
    pub directory: Option<String>,
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
struct ServerState {
    notes: Arc<Vec<NoteFields>>,
}

pub async fn start_server(config: PreviewConfig) -> Fallible<()> {
    let collection = Collection::new(config.directory)?;
    let notes: Vec<NoteFields> = build_notes(&collection.tables, &collection.config)?;
    if notes.is_empty() {
        println!("No notes to preview.");
        return Ok(());
    }

    log::info!(
        "Previewing {} notes from {}",
        notes.len(),
        collection.directory.display()
    );
    let state = ServerState {
        notes: Arc::new(notes),
    };
    let app = Router::new();
    let app = app.route("/", get(index_handler));
    let app = app.route("/note/{ordinal}", get(note_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn index_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let page = page_template("Notes", index_body(&state.notes));
    (StatusCode::OK, Html(page.into_string()))
}

async fn note_handler(
    State(state): State<ServerState>,
    Path(ordinal): Path<usize>,
) -> (StatusCode, Html<String>) {
    let notes = &state.notes;
    let Some(idx) = notes.iter().position(|note| note.ordinal == ordinal) else {
        return not_found_handler().await;
    };
    let previous = idx.checked_sub(1).map(|i| notes[i].ordinal);
    let next = notes.get(idx + 1).map(|note| note.ordinal);
    let note = &notes[idx];
    let page = page_template(&note.headword, note_body(note, previous, next));
    (StatusCode::OK, Html(page.into_string()))
}

async fn style_handler() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => log::debug!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => log::warn!("Failed to listen for Ctrl+C: {e}"),
    }
}
