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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use hanzicards_core::decompose::DecompositionNode;
use hanzicards_core::decompose::Decomposer;
use hanzicards_core::entry::EntryTable;
use hanzicards_core::error::Fallible;
use hanzicards_core::tree::render_tree;

use crate::collection::Collection;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum DecomposeFormat {
    /// The card markup.
    Html,
    /// An indented outline. Components with their own card are starred.
    Outline,
}

impl Display for DecomposeFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecomposeFormat::Html => write!(f, "html"),
            DecomposeFormat::Outline => write!(f, "outline"),
        }
    }
}

pub fn print_decomposition(
    headword: &str,
    directory: Option<String>,
    format: DecomposeFormat,
) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let tables = &collection.tables;
    let entries = EntryTable::build(&tables.order, &tables.dictionary, &tables.radicals)?;
    let tree = Decomposer::new(&tables.components)
        .with_max_depth(collection.config.max_depth)
        .decompose(headword)?;
    let output = match format {
        DecomposeFormat::Html => render_tree(&tree, &entries).into_string(),
        DecomposeFormat::Outline => outline(&tree, &entries),
    };
    println!("{output}");
    Ok(())
}

fn outline(tree: &DecompositionNode, entries: &EntryTable) -> String {
    let mut lines = Vec::new();
    outline_lines(tree, entries, 0, &mut lines);
    lines.join("\n")
}

fn outline_lines(
    node: &DecompositionNode,
    entries: &EntryTable,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let marker = if entries.has_entry(node.component()) {
        " *"
    } else {
        ""
    };
    lines.push(format!(
        "{}{}{marker}",
        "  ".repeat(depth),
        node.component()
    ));
    for child in node.children() {
        outline_lines(child, entries, depth + 1, lines);
    }
}
