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

//! Recursive decomposition of words into characters, and of characters
//! into their components.

use crate::error::Fallible;
use crate::error::fail;
use crate::types::components::ComponentTable;

/// Decompositions deeper than this are assumed to come from a broken table.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// A component and its immediate sub-components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecompositionNode {
    component: String,
    children: Vec<DecompositionNode>,
}

impl DecompositionNode {
    pub fn new(component: impl Into<String>, children: Vec<DecompositionNode>) -> Self {
        Self {
            component: component.into(),
            children,
        }
    }

    pub fn leaf(component: impl Into<String>) -> Self {
        Self::new(component, Vec::new())
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn children(&self) -> &[DecompositionNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The leaf components, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        if self.is_leaf() {
            leaves.push(&self.component);
        }
        for child in &self.children {
            child.collect_leaves(leaves);
        }
    }

    /// Number of levels in the tree. A lone leaf has depth one.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DecompositionNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Builds decomposition trees from a component table.
///
/// The table is expected to be acyclic. A cycle, or a chain of components
/// longer than `max_depth`, is reported as an error.
pub struct Decomposer<'a> {
    table: &'a ComponentTable,
    max_depth: usize,
}

impl<'a> Decomposer<'a> {
    pub fn new(table: &'a ComponentTable) -> Self {
        Self {
            table,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Decompose a headword.
    ///
    /// A multi-character word is split into its characters, and the word
    /// itself is never looked up in the table. A single character is
    /// expanded directly.
    pub fn decompose(&self, headword: &str) -> Fallible<DecompositionNode> {
        let mut chars = headword.chars();
        match (chars.next(), chars.next()) {
            (None, _) => fail("cannot decompose an empty headword."),
            (Some(_), None) => self.expand(headword, &mut Vec::new()),
            (Some(_), Some(_)) => {
                let children = headword
                    .chars()
                    .map(|c| self.expand(&c.to_string(), &mut Vec::new()))
                    .collect::<Fallible<Vec<_>>>()?;
                Ok(DecompositionNode::new(headword, children))
            }
        }
    }

    fn expand(&self, component: &str, path: &mut Vec<String>) -> Fallible<DecompositionNode> {
        if path.iter().any(|ancestor| ancestor == component) {
            return fail(format!(
                "malformed component table: cycle {} -> {component}",
                path.join(" -> ")
            ));
        }
        if path.len() >= self.max_depth {
            let root = path.first().map(String::as_str).unwrap_or(component);
            return fail(format!(
                "malformed component table: decomposition of '{root}' is deeper than {} levels",
                self.max_depth
            ));
        }
        path.push(component.to_string());
        let children = self
            .table
            .components(component)
            .iter()
            .map(|sub| self.expand(sub, path))
            .collect::<Fallible<Vec<_>>>()?;
        path.pop();
        Ok(DecompositionNode::new(component, children))
    }
}

/// Decompose a headword with the default depth limit.
pub fn decompose(headword: &str, table: &ComponentTable) -> Fallible<DecompositionNode> {
    Decomposer::new(table).decompose(headword)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample_table() -> ComponentTable {
        [
            ("好", vec!["女", "子"]),
            ("妈", vec!["女", "马"]),
            ("品", vec!["口", "口", "口"]),
            ("你", vec!["亻", "尔"]),
            ("尔", vec!["⺈", "小"]),
            ("子", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_character_without_entry() -> Fallible<()> {
        let table = ComponentTable::new();
        assert_eq!(decompose("女", &table)?, DecompositionNode::leaf("女"));
        Ok(())
    }

    #[test]
    fn test_character_with_empty_entry() -> Fallible<()> {
        let node = decompose("子", &sample_table())?;
        assert!(node.is_leaf());
        Ok(())
    }

    #[test]
    fn test_word_without_entries() -> Fallible<()> {
        let table = ComponentTable::new();
        let node = decompose("他们", &table)?;
        assert_eq!(
            node,
            DecompositionNode::new(
                "他们",
                vec![DecompositionNode::leaf("他"), DecompositionNode::leaf("们")]
            )
        );
        Ok(())
    }

    #[test]
    fn test_nested() -> Fallible<()> {
        let node = decompose("你好", &sample_table())?;
        let expected = DecompositionNode::new(
            "你好",
            vec![
                DecompositionNode::new(
                    "你",
                    vec![
                        DecompositionNode::leaf("亻"),
                        DecompositionNode::new(
                            "尔",
                            vec![DecompositionNode::leaf("⺈"), DecompositionNode::leaf("小")],
                        ),
                    ],
                ),
                DecompositionNode::new(
                    "好",
                    vec![DecompositionNode::leaf("女"), DecompositionNode::leaf("子")],
                ),
            ],
        );
        assert_eq!(node, expected);
        assert_eq!(node.depth(), 4);
        Ok(())
    }

    #[test]
    fn test_order_and_duplicates_kept() -> Fallible<()> {
        let node = decompose("品", &sample_table())?;
        assert_eq!(node.leaves(), vec!["口", "口", "口"]);
        Ok(())
    }

    #[test]
    fn test_word_is_not_looked_up() -> Fallible<()> {
        let table: ComponentTable = [("你好", vec!["X"])].into_iter().collect();
        let node = decompose("你好", &table)?;
        assert_eq!(node.leaves(), vec!["你", "好"]);
        Ok(())
    }

    #[test]
    fn test_leaves_are_exactly_the_undecomposed_components() -> Fallible<()> {
        let table = sample_table();
        let node = decompose("你好妈品", &table)?;
        let leaves: HashSet<&str> = node.leaves().into_iter().collect();
        for leaf in &leaves {
            assert!(table.is_leaf(leaf));
        }
        let mut stack = vec![&node];
        while let Some(n) = stack.pop() {
            if !n.is_leaf() {
                assert!(!table.is_leaf(n.component()) || n.component() == "你好妈品");
            }
            stack.extend(n.children());
        }
        Ok(())
    }

    #[test]
    fn test_shared_component_is_not_a_cycle() -> Fallible<()> {
        let table: ComponentTable = [("A", vec!["B", "C"]), ("B", vec!["D"]), ("C", vec!["D"])]
            .into_iter()
            .collect();
        let node = decompose("A", &table)?;
        assert_eq!(node.leaves(), vec!["D", "D"]);
        Ok(())
    }

    #[test]
    fn test_cycle_is_reported() {
        let table: ComponentTable = [("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]
            .into_iter()
            .collect();
        let err = decompose("A", &table).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error: malformed component table: cycle A -> B -> C -> A"
        );
    }

    #[test]
    fn test_self_cycle_inside_word() {
        let table: ComponentTable = [("口", vec!["口"])].into_iter().collect();
        assert!(decompose("品口", &table).is_err());
    }

    #[test]
    fn test_depth_limit() -> Fallible<()> {
        let table: ComponentTable = [("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["D"])]
            .into_iter()
            .collect();
        assert!(Decomposer::new(&table).with_max_depth(3).decompose("A").is_err());
        let node = Decomposer::new(&table).with_max_depth(4).decompose("A")?;
        assert_eq!(node.depth(), 4);
        Ok(())
    }

    #[test]
    fn test_zero_depth_limit() {
        let table = ComponentTable::new();
        let err = Decomposer::new(&table)
            .with_max_depth(0)
            .decompose("好")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "error: malformed component table: decomposition of '好' is deeper than 0 levels"
        );
        assert!(
            Decomposer::new(&table)
                .with_max_depth(0)
                .decompose("你好")
                .is_err()
        );
    }

    #[test]
    fn test_empty_headword() {
        assert!(decompose("", &ComponentTable::new()).is_err());
    }
}
