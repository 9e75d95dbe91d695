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

use std::collections::HashMap;
use std::collections::HashSet;
use std::iter::once;

use maud::html;

use crate::error::Fallible;
use crate::pinyin::render_pinyin;
use crate::pinyin::tone_class;
use crate::types::dictionary::Dictionary;
use crate::types::dictionary::Radical;
use crate::types::dictionary::Reading;

/// A reading prepared for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedReading {
    /// Pinyin with tone marks.
    pub pronunciation: String,
    /// Tone of the last syllable, used as a CSS class suffix.
    pub tone_class: String,
    /// The meanings, comma-separated.
    pub definition: String,
}

/// The display content of a headword's dictionary entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedEntry {
    readings: Vec<RenderedReading>,
}

impl RenderedEntry {
    pub fn from_readings(readings: &[Reading]) -> Fallible<Self> {
        let readings = readings
            .iter()
            .map(|reading| {
                Ok(RenderedReading {
                    pronunciation: render_pinyin(&reading.pronunciation)?,
                    tone_class: tone_class(&reading.pronunciation),
                    definition: reading.meanings.join(", "),
                })
            })
            .collect::<Fallible<Vec<_>>>()?;
        Ok(Self { readings })
    }

    pub fn readings(&self) -> &[RenderedReading] {
        &self.readings
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// One `div.entry` per reading, separated by newlines.
    pub fn to_markup(&self) -> String {
        self.readings
            .iter()
            .map(|reading| {
                let markup = html! {
                    div class="entry" {
                        div class=(format!("pinyin tone-{}", reading.tone_class)) {
                            (reading.pronunciation)
                        }
                        " "
                        div class="definition" { (reading.definition) }
                    }
                };
                markup.into_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pre-rendered entry markup and comments for every headword that gets a
/// card. Components without a card have no entry.
#[derive(Clone, Debug, Default)]
pub struct EntryTable {
    markup: HashMap<String, String>,
    comments: HashMap<String, String>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the entries of the given headwords.
    ///
    /// Radicals replace the entry of the headword they name, and of each of
    /// their variants, with a short plain-text entry.
    pub fn build(
        headwords: &[String],
        dictionary: &Dictionary,
        radicals: &[Radical],
    ) -> Fallible<Self> {
        let mut table = EntryTable::new();
        for headword in headwords {
            let entry = RenderedEntry::from_readings(dictionary.readings(headword))?;
            if !entry.is_empty() {
                table.insert(headword, entry.to_markup());
            }
        }
        let known: HashSet<&str> = headwords.iter().map(String::as_str).collect();
        for radical in radicals {
            let text = html! { (radical.entry_text()) }.into_string();
            let forms = once(radical.simplified.as_str()).chain(radical.variants());
            for form in forms {
                if known.contains(form) {
                    log::debug!("Using radical entry for {form}");
                    table.insert(form, text.clone());
                    table.set_comment(form, radical.comment.clone());
                }
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, component: impl Into<String>, markup: impl Into<String>) {
        self.markup.insert(component.into(), markup.into());
    }

    pub fn set_comment(&mut self, component: impl Into<String>, comment: impl Into<String>) {
        self.comments.insert(component.into(), comment.into());
    }

    /// The entry markup of a component, or the empty string.
    pub fn markup(&self, component: &str) -> &str {
        self.markup.get(component).map(String::as_str).unwrap_or("")
    }

    pub fn has_entry(&self, component: &str) -> bool {
        !self.markup(component).is_empty()
    }

    pub fn comment(&self, component: &str) -> &str {
        self.comments.get(component).map(String::as_str).unwrap_or("")
    }
}
