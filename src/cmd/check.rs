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

use hanzicards_core::decompose::Decomposer;
use hanzicards_core::error::Fallible;
use hanzicards_core::error::fail;
use hanzicards_core::pinyin::UNPLACED_TONE;
use hanzicards_core::pinyin::render_pinyin;
use hanzicards_core::types::tables::Tables;

use crate::collection::Collection;

pub fn check_collection(directory: Option<String>) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let problems = find_problems(&collection.tables, collection.config.max_depth);
    if problems.is_empty() {
        println!("Collection is valid.");
        Ok(())
    } else {
        for problem in &problems {
            println!("{problem}");
        }
        fail(format!("{} problems found.", problems.len()))
    }
}

/// Pronunciations that do not render cleanly, and decompositions that do
/// not terminate.
fn find_problems(tables: &Tables, max_depth: usize) -> Vec<String> {
    let mut problems = Vec::new();

    let mut headwords: Vec<(&str, &str)> = tables
        .dictionary
        .iter()
        .flat_map(|(headword, readings)| {
            readings
                .iter()
                .map(move |r| (headword, r.pronunciation.as_str()))
        })
        .collect();
    headwords.sort();
    for (headword, pronunciation) in headwords {
        match render_pinyin(pronunciation) {
            Ok(rendered) if rendered.contains(UNPLACED_TONE) => problems.push(format!(
                "{headword}: cannot place tone mark in '{pronunciation}'."
            )),
            Ok(_) => {}
            Err(e) => problems.push(format!("{headword}: {}", e.message())),
        }
    }

    let decomposer = Decomposer::new(&tables.components).with_max_depth(max_depth);
    let mut characters: Vec<&str> = tables.components.iter().map(|(c, _)| c).collect();
    characters.sort();
    for character in characters {
        if let Err(e) = decomposer.decompose(character) {
            problems.push(format!("{character}: {}", e.message()));
        }
    }

    for headword in &tables.order {
        if !tables.dictionary.contains(headword) {
            log::warn!("{headword} has no dictionary entry.");
        }
    }

    problems
}
