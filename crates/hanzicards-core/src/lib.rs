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

//! hanzicards-core: study-card content for Chinese characters and words.
//!
//! This library provides:
//! - Rendering numbered pinyin with tone marks
//! - Recursive decomposition of words and characters into components
//! - Rendering decomposition trees as collapsible HTML
//! - Assembling the fields of each note

pub mod decompose;
pub mod entry;
pub mod error;
pub mod note;
pub mod pinyin;
pub mod tree;
pub mod types;

// Re-exports for convenience
pub use decompose::{DecompositionNode, Decomposer, decompose};
pub use entry::{EntryTable, RenderedEntry};
pub use error::{ErrorReport, Fallible, fail};
pub use note::{NoteConfig, NoteFields, build_notes};
pub use pinyin::render_pinyin;
pub use tree::{ComponentView, build_view, render_tree};
pub use types::components::ComponentTable;
pub use types::dictionary::{Dictionary, Radical, Reading};
pub use types::note_hash::NoteHash;
pub use types::tables::Tables;
