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

use crate::types::components::ComponentTable;
use crate::types::dictionary::Dictionary;
use crate::types::dictionary::Radical;

/// The read-only snapshots a set of notes is built from.
#[derive(Clone, Debug, Default)]
pub struct Tables {
    /// Headwords in card order.
    pub order: Vec<String>,
    pub dictionary: Dictionary,
    pub components: ComponentTable,
    /// Relative word frequency.
    pub frequencies: HashMap<String, f64>,
    pub strokes: HashMap<String, u32>,
    pub radicals: Vec<Radical>,
}
