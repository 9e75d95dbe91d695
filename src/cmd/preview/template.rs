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

use hanzicards_core::note::NoteFields;
use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

pub fn page_template(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · hanzicards" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (body)
            }
        }
    }
}

pub fn index_body(notes: &[NoteFields]) -> Markup {
    html! {
        h1 { "Notes" }
        ol class="note-index" {
            @for note in notes {
                li value=(note.ordinal) {
                    a href=(format!("/note/{}", note.ordinal)) { (note.headword) }
                }
            }
        }
    }
}

pub fn note_body(note: &NoteFields, previous: Option<usize>, next: Option<usize>) -> Markup {
    html! {
        nav {
            a href="/" { "Index" }
            @if let Some(ordinal) = previous {
                " "
                a href=(format!("/note/{ordinal}")) { "Previous" }
            }
            @if let Some(ordinal) = next {
                " "
                a href=(format!("/note/{ordinal}")) { "Next" }
            }
        }
        div class="card" {
            div class="hanzi" { (note.headword) }
            div class="meta" {
                span class="ordinal" { "#" (note.ordinal) }
                @if !note.frequency.is_empty() {
                    span class="frequency" { "Frequency: " (note.frequency) }
                }
                @if !note.strokes.is_empty() {
                    span class="strokes" { "Strokes: " (note.strokes) }
                }
            }
            div class="entries" { (PreEscaped(&note.entry)) }
            @if !note.comment.is_empty() {
                div class="comment" { (note.comment) }
            }
            div class="components" { (PreEscaped(&note.components)) }
            div class="audio" { code { (note.audio) } }
            div class="guid" { code { (note.guid.to_hex()) } }
        }
    }
}
