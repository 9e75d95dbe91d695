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

use std::env::current_dir;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use hanzicards_core::error::ErrorReport;
use hanzicards_core::error::Fallible;
use hanzicards_core::error::fail;
use hanzicards_core::note::NoteConfig;
use hanzicards_core::types::tables::Tables;
use serde::de::DeserializeOwned;

pub const ORDER_FILE: &str = "order.json";
pub const DICTIONARY_FILE: &str = "dictionary.json";
pub const COMPONENTS_FILE: &str = "components.json";
pub const FREQUENCY_FILE: &str = "frequency.json";
pub const STROKES_FILE: &str = "strokes.json";
pub const RADICALS_FILE: &str = "radicals.json";
pub const CONFIG_FILE: &str = "hanzicards.toml";

/// A directory of table snapshots, loaded into memory.
pub struct Collection {
    pub directory: PathBuf,
    pub tables: Tables,
    pub config: NoteConfig,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        if !directory.exists() {
            return fail("directory does not exist.");
        }
        let directory = directory.canonicalize()?;
        log::debug!("Loading collection from {}", directory.display());

        let tables = Tables {
            order: read_json(&directory, ORDER_FILE)?,
            dictionary: read_json(&directory, DICTIONARY_FILE)?,
            components: read_json(&directory, COMPONENTS_FILE)?,
            frequencies: read_optional_json(&directory, FREQUENCY_FILE)?,
            strokes: read_optional_json(&directory, STROKES_FILE)?,
            radicals: read_optional_json(&directory, RADICALS_FILE)?,
        };
        log::debug!(
            "Loaded {} headwords, {} dictionary entries, {} decompositions.",
            tables.order.len(),
            tables.dictionary.len(),
            tables.components.len()
        );

        let config_path = directory.join(CONFIG_FILE);
        let config: NoteConfig = if config_path.exists() {
            toml::from_str(&read_to_string(&config_path)?).map_err(|e| {
                ErrorReport::new(format!("Failed to parse {CONFIG_FILE}: {e}"))
            })?
        } else {
            NoteConfig::default()
        };

        Ok(Self {
            directory,
            tables,
            config,
        })
    }
}

fn read_json<T: DeserializeOwned>(directory: &Path, name: &str) -> Fallible<T> {
    let path = directory.join(name);
    if !path.exists() {
        return fail(format!("missing {name} in {}.", directory.display()));
    }
    let text = read_to_string(&path)?;
    serde_json::from_str(&text)
        .map_err(|e| ErrorReport::new(format!("Failed to parse {name}: {e}")))
}

fn read_optional_json<T: DeserializeOwned + Default>(directory: &Path, name: &str) -> Fallible<T> {
    if directory.join(name).exists() {
        read_json(directory, name)
    } else {
        log::debug!("No {name}, using an empty table.");
        Ok(T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::helper::create_test_collection;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_non_existent_directory() {
        let result = Collection::new(Some("./derpherp".to_string()));
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: directory does not exist.".to_string())
        );
    }

    #[test]
    fn test_missing_required_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join(ORDER_FILE), "[]")?;
        let result = Collection::new(Some(dir.display().to_string()));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_load() -> Fallible<()> {
        let dir = create_test_collection()?;
        let collection = Collection::new(Some(dir))?;
        assert_eq!(collection.tables.order, vec!["好", "女", "子", "你好"]);
        assert_eq!(collection.tables.strokes.get("好"), Some(&6));
        assert_eq!(collection.tables.radicals.len(), 1);
        assert_eq!(collection.config.audio_prefix, "hanzi");
        Ok(())
    }

    #[test]
    fn test_bad_config() -> Fallible<()> {
        let dir = create_test_collection()?;
        write(PathBuf::from(&dir).join(CONFIG_FILE), "unknown = true")?;
        let result = Collection::new(Some(dir));
        assert!(result.is_err());
        Ok(())
    }
}
