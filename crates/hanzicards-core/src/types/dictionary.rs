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

use serde::Deserialize;
use serde::Serialize;

/// One reading of a headword: a numbered-pinyin pronunciation and its
/// meanings, in dictionary order.
///
/// Serialized as a `[pronunciation, [meaning, ...]]` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<String>)", into = "(String, Vec<String>)")]
pub struct Reading {
    pub pronunciation: String,
    pub meanings: Vec<String>,
}

impl Reading {
    pub fn new(pronunciation: impl Into<String>, meanings: Vec<String>) -> Self {
        Self {
            pronunciation: pronunciation.into(),
            meanings,
        }
    }
}

impl From<(String, Vec<String>)> for Reading {
    fn from((pronunciation, meanings): (String, Vec<String>)) -> Self {
        Self {
            pronunciation,
            meanings,
        }
    }
}

impl From<Reading> for (String, Vec<String>) {
    fn from(reading: Reading) -> Self {
        (reading.pronunciation, reading.meanings)
    }
}

/// Read-only map from simplified headword to its readings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, Vec<Reading>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading to a headword.
    pub fn insert(&mut self, headword: impl Into<String>, reading: Reading) {
        self.entries.entry(headword.into()).or_default().push(reading);
    }

    /// The readings of a headword. Empty if the headword is absent.
    pub fn readings(&self, headword: &str) -> &[Reading] {
        self.entries
            .get(headword)
            .map(|readings| readings.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, headword: &str) -> bool {
        !self.readings(headword).is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Reading])> {
        self.entries
            .iter()
            .map(|(headword, readings)| (headword.as_str(), readings.as_slice()))
    }
}

/// A Kangxi radical, with the variant forms it takes inside characters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Radical {
    pub simplified: String,
    pub pronunciation: String,
    pub meanings: Vec<String>,
    /// Variant forms, separated by commas (full-width or ASCII).
    #[serde(default)]
    pub variants: String,
    #[serde(default)]
    pub comment: String,
}

impl Radical {
    /// The plain-text entry shown for the radical and its variants.
    pub fn entry_text(&self) -> String {
        format!(
            "{}: ({}) {}",
            self.pronunciation,
            self.simplified,
            self.meanings.join(", ")
        )
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants
            .split(['，', ','])
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
