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

//! Rendering of decomposition trees.
//!
//! Rendering happens in two steps. [`build_view`] decides the shape of the
//! output: which components are shown expanded and which are tucked behind
//! a disclosure toggle. [`ComponentView::to_markup`] then turns that shape
//! into HTML.
//!
//! The root, and any component without an entry of its own, is shown
//! inline. A component below the root that has its own entry already has a
//! card, so it starts collapsed.

use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::decompose::DecompositionNode;
use crate::entry::EntryTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentView {
    /// Always visible.
    Inline {
        label: String,
        entry: String,
        children: Vec<ComponentView>,
    },
    /// The label is visible, the entry and children are hidden until
    /// expanded.
    Collapsed {
        label: String,
        entry: String,
        children: Vec<ComponentView>,
    },
}

impl ComponentView {
    pub fn label(&self) -> &str {
        match self {
            ComponentView::Inline { label, .. } | ComponentView::Collapsed { label, .. } => label,
        }
    }

    pub fn entry(&self) -> &str {
        match self {
            ComponentView::Inline { entry, .. } | ComponentView::Collapsed { entry, .. } => entry,
        }
    }

    pub fn children(&self) -> &[ComponentView] {
        match self {
            ComponentView::Inline { children, .. }
            | ComponentView::Collapsed { children, .. } => children,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self, ComponentView::Collapsed { .. })
    }

    /// Serialize the view. Entry markup is inserted verbatim; labels are
    /// escaped.
    pub fn to_markup(&self) -> Markup {
        match self {
            ComponentView::Inline {
                label,
                entry,
                children,
            } => html! {
                div class="component" {
                    div class="component-hanzi" { (label) }
                    div class="component-entry" { (PreEscaped(entry)) }
                    @for child in children {
                        (child.to_markup())
                    }
                }
            },
            ComponentView::Collapsed {
                label,
                entry,
                children,
            } => html! {
                details class="component" {
                    summary class="component-hanzi" { (label) }
                    div class="component-entry" { (PreEscaped(entry)) }
                    @for child in children {
                        (child.to_markup())
                    }
                }
            },
        }
    }
}

/// Decide how each node of the tree is displayed.
pub fn build_view(node: &DecompositionNode, entries: &EntryTable) -> ComponentView {
    view_at(node, entries, 0)
}

fn view_at(node: &DecompositionNode, entries: &EntryTable, depth: usize) -> ComponentView {
    let label = node.component().to_string();
    let entry = entries.markup(node.component()).to_string();
    let children = node
        .children()
        .iter()
        .map(|child| view_at(child, entries, depth + 1))
        .collect();
    if depth == 0 || entry.is_empty() {
        ComponentView::Inline {
            label,
            entry,
            children,
        }
    } else {
        ComponentView::Collapsed {
            label,
            entry,
            children,
        }
    }
}

/// Render a decomposition tree as nested HTML.
pub fn render_tree(node: &DecompositionNode, entries: &EntryTable) -> Markup {
    build_view(node, entries).to_markup()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use crate::error::Fallible;
    use crate::types::components::ComponentTable;

    fn entries() -> EntryTable {
        let mut entries = EntryTable::new();
        entries.insert("好", "<b>good</b>");
        entries.insert("女", "<b>woman</b>");
        entries
    }

    fn table() -> ComponentTable {
        [("好", vec!["女", "子"]), ("女", vec!["𡿨", "一"])]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_root_is_inline_even_with_entry() -> Fallible<()> {
        let tree = decompose("好", &table())?;
        let view = build_view(&tree, &entries());
        assert!(!view.is_collapsed());
        assert_eq!(view.entry(), "<b>good</b>");
        Ok(())
    }

    #[test]
    fn test_child_with_entry_is_collapsed() -> Fallible<()> {
        let tree = decompose("好", &table())?;
        let view = build_view(&tree, &entries());
        let children = view.children();
        assert_eq!(children[0].label(), "女");
        assert!(children[0].is_collapsed());
        assert_eq!(children[1].label(), "子");
        assert!(!children[1].is_collapsed());
        // Dead-end components below a collapsed one stay inline.
        assert!(children[0].children().iter().all(|c| !c.is_collapsed()));
        Ok(())
    }

    #[test]
    fn test_word_root() -> Fallible<()> {
        let tree = decompose("好好", &table())?;
        let view = build_view(&tree, &entries());
        assert!(!view.is_collapsed());
        assert_eq!(view.entry(), "");
        assert!(view.children().iter().all(ComponentView::is_collapsed));
        Ok(())
    }

    #[test]
    fn test_leaf_markup() {
        let tree = DecompositionNode::leaf("子");
        let markup = render_tree(&tree, &EntryTable::new()).into_string();
        assert_eq!(
            markup,
            "<div class=\"component\"><div class=\"component-hanzi\">子</div><div class=\"component-entry\"></div></div>"
        );
    }

    #[test]
    fn test_nested_markup() -> Fallible<()> {
        let table: ComponentTable = [("好", vec!["女", "子"])].into_iter().collect();
        let tree = decompose("好", &table)?;
        let markup = render_tree(&tree, &entries()).into_string();
        assert_eq!(
            markup,
            concat!(
                "<div class=\"component\">",
                "<div class=\"component-hanzi\">好</div>",
                "<div class=\"component-entry\"><b>good</b></div>",
                "<details class=\"component\">",
                "<summary class=\"component-hanzi\">女</summary>",
                "<div class=\"component-entry\"><b>woman</b></div>",
                "</details>",
                "<div class=\"component\">",
                "<div class=\"component-hanzi\">子</div>",
                "<div class=\"component-entry\"></div>",
                "</div>",
                "</div>",
            )
        );
        Ok(())
    }

    #[test]
    fn test_label_is_escaped() {
        let tree = DecompositionNode::leaf("<");
        let markup = render_tree(&tree, &EntryTable::new()).into_string();
        assert!(markup.contains("<div class=\"component-hanzi\">&lt;</div>"));
    }

    #[test]
    fn test_rendering_is_deterministic() -> Fallible<()> {
        let tree = decompose("你好女", &table())?;
        let first = render_tree(&tree, &entries()).into_string();
        let second = render_tree(&tree, &entries()).into_string();
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_no_node_dropped() -> Fallible<()> {
        let tree = decompose("好好", &table())?;
        let markup = render_tree(&tree, &entries()).into_string();
        assert_eq!(markup.matches("class=\"component\"").count(), 11);
        Ok(())
    }
}
