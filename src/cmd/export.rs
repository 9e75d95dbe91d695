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

use std::fs::write;

use hanzicards_core::error::Fallible;
use hanzicards_core::note::NoteFields;
use hanzicards_core::note::build_notes;

use crate::collection::Collection;

pub fn export_collection(directory: Option<String>, output: Option<String>) -> Fallible<()> {
    let notes: Vec<NoteFields> = export_notes(directory)?;
    let json = serde_json::to_string_pretty(&notes)?;
    match output {
        Some(path) => {
            write(&path, json)?;
            log::info!("Wrote {} notes to {path}", notes.len());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn export_notes(directory: Option<String>) -> Fallible<Vec<NoteFields>> {
    let collection = Collection::new(directory)?;
    build_notes(&collection.tables, &collection.config)
}
