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
use std::path::PathBuf;

use hanzicards_core::error::Fallible;
use tempfile::tempdir;

use crate::collection::COMPONENTS_FILE;
use crate::collection::CONFIG_FILE;
use crate::collection::DICTIONARY_FILE;
use crate::collection::FREQUENCY_FILE;
use crate::collection::ORDER_FILE;
use crate::collection::RADICALS_FILE;
use crate::collection::STROKES_FILE;

pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir = tempdir()?.keep();
    Ok(dir.canonicalize()?)
}

/// A small collection: 好 and 你好 have entries, 女 has one through its
/// radical, 子 has none.
pub fn create_test_collection() -> Fallible<String> {
    let dir = create_tmp_directory()?;
    write(dir.join(ORDER_FILE), r#"["好", "女", "子", "你好"]"#)?;
    write(
        dir.join(DICTIONARY_FILE),
        r#"{
            "好": [["hao3", ["good", "well"]], ["hao4", ["to be fond of"]]],
            "你好": [["ni3 hao3", ["hello", "hi"]]]
        }"#,
    )?;
    write(
        dir.join(COMPONENTS_FILE),
        r#"{"好": ["女", "子"], "你": ["亻", "尔"]}"#,
    )?;
    write(dir.join(FREQUENCY_FILE), r#"{"你好": 0.000123}"#)?;
    write(dir.join(STROKES_FILE), r#"{"好": 6, "女": 3, "子": 3}"#)?;
    write(
        dir.join(RADICALS_FILE),
        r#"[{"simplified": "女", "pronunciation": "nǚ", "meanings": ["woman"], "variants": "", "comment": "A kneeling woman."}]"#,
    )?;
    write(dir.join(CONFIG_FILE), "audio_prefix = \"hanzi\"\n")?;
    Ok(dir.display().to_string())
}
