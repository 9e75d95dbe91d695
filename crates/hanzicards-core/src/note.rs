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

use serde::Deserialize;
use serde::Serialize;

use crate::decompose::DEFAULT_MAX_DEPTH;
use crate::decompose::Decomposer;
use crate::entry::EntryTable;
use crate::error::Fallible;
use crate::tree::render_tree;
use crate::types::note_hash::NoteHash;
use crate::types::tables::Tables;

/// The fields of one note, in the order the packaging layer expects them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteFields {
    /// One-based position in the card order. Also the sort field.
    pub ordinal: usize,
    pub headword: String,
    pub frequency: String,
    pub strokes: String,
    /// Decomposition tree markup.
    pub components: String,
    /// Entry markup.
    pub entry: String,
    pub comment: String,
    /// Audio reference, e.g. `[sound:ultimate_1.mp3]`.
    pub audio: String,
    /// Identity of the note. Depends on the headword only.
    pub guid: NoteHash,
}

/// Options for building notes. Read from `hanzicards.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoteConfig {
    /// Depth limit for decompositions.
    pub max_depth: usize,
    /// Skip headwords that have no entry.
    pub skip_empty: bool,
    /// Prefix of the audio file names.
    pub audio_prefix: String,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            skip_empty: true,
            audio_prefix: "ultimate".to_string(),
        }
    }
}

/// Format a frequency in scientific notation with two decimals and a
/// signed exponent, e.g. `1.23E-4`.
pub fn format_frequency(value: f64) -> String {
    let formatted = format!("{value:.2E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}E+{exponent}")
        }
        _ => formatted,
    }
}

pub fn audio_reference(prefix: &str, ordinal: usize) -> String {
    format!("[sound:{prefix}_{ordinal}.mp3]")
}

/// Build the notes for every headword in the card order.
pub fn build_notes(tables: &Tables, config: &NoteConfig) -> Fallible<Vec<NoteFields>> {
    let entries = EntryTable::build(&tables.order, &tables.dictionary, &tables.radicals)?;
    let decomposer = Decomposer::new(&tables.components).with_max_depth(config.max_depth);
    let mut notes = Vec::new();
    for (idx, headword) in tables.order.iter().enumerate() {
        let ordinal = idx + 1;
        let entry = entries.markup(headword);
        if config.skip_empty && entry.is_empty() {
            log::debug!("Skipping {headword}: no entry.");
            continue;
        }
        let tree = decomposer.decompose(headword)?;
        notes.push(NoteFields {
            ordinal,
            headword: headword.clone(),
            frequency: tables
                .frequencies
                .get(headword)
                .map(|f| format_frequency(*f))
                .unwrap_or_default(),
            strokes: tables
                .strokes
                .get(headword)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            components: render_tree(&tree, &entries).into_string(),
            entry: entry.to_string(),
            comment: entries.comment(headword).to_string(),
            audio: audio_reference(&config.audio_prefix, ordinal),
            guid: NoteHash::of_headword(headword),
        });
    }
    log::info!(
        "Built {} notes from {} headwords.",
        notes.len(),
        tables.order.len()
    );
    Ok(notes)
}
