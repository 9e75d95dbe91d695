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

/// Read-only map from a character to its immediate sub-components, in the
/// order the source lists them. A missing or empty entry marks a leaf.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentTable {
    components: HashMap<String, Vec<String>>,
}

impl ComponentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: impl Into<String>, components: Vec<String>) {
        self.components.insert(character.into(), components);
    }

    /// The immediate sub-components of a character.
    pub fn components(&self, character: &str) -> &[String] {
        self.components
            .get(character)
            .map(|c| c.as_slice())
            .unwrap_or_default()
    }

    pub fn is_leaf(&self, character: &str) -> bool {
        self.components(character).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.components
            .iter()
            .map(|(c, subs)| (c.as_str(), subs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ComponentTable
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ComponentTable::new();
        for (character, components) in iter {
            table.insert(character, components.into_iter().map(Into::into).collect());
        }
        table
    }
}
