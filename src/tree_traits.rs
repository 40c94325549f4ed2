//! Text rendering of display trees.

use termtree::Tree;

use crate::domain::DisplayCategory;

/// Marker appended to categories promoted to the home section.
pub const HOME_BADGE: &str = "★";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for DisplayCategory {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();
        Tree::new(node_label(self)).with_leaves(leaves)
    }
}

/// A forest has no single root, so it is rendered under a caller-chosen label.
impl TreeNodeConvert for (&str, &[DisplayCategory]) {
    fn to_tree_string(&self) -> Tree<String> {
        let (root, categories) = *self;
        let leaves: Vec<_> = categories.iter().map(|c| c.to_tree_string()).collect();
        Tree::new(root.to_string()).with_leaves(leaves)
    }
}

fn node_label(category: &DisplayCategory) -> String {
    if category.show_on_home {
        format!("{} [{}] {}", category.name, category.order, HOME_BADGE)
    } else {
        format!("{} [{}]", category.name, category.order)
    }
}

/// Number of nodes in the forest.
pub fn count_nodes(categories: &[DisplayCategory]) -> usize {
    categories
        .iter()
        .map(|c| 1 + count_nodes(&c.children))
        .sum()
}

/// Number of levels in the forest; 0 when empty.
pub fn depth(categories: &[DisplayCategory]) -> usize {
    categories
        .iter()
        .map(|c| 1 + depth(&c.children))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, order: i64, home: bool, children: Vec<DisplayCategory>) -> DisplayCategory {
        DisplayCategory {
            id: order,
            name: name.to_string(),
            image: String::new(),
            order,
            show_on_home: home,
            children,
        }
    }

    #[test]
    fn test_renders_nested_tree_with_home_badge() {
        let forest = vec![node("Shoes", 1, true, vec![node("Boots", 11, false, vec![])])];

        let rendered = ("categories", forest.as_slice()).to_tree_string().to_string();

        assert!(rendered.starts_with("categories\n"));
        assert!(rendered.contains("Shoes [1] ★"));
        assert!(rendered.contains("Boots [11]"));
        assert!(!rendered.contains("Boots [11] ★"));
    }

    #[test]
    fn test_count_and_depth() {
        let forest = vec![
            node("a", 1, true, vec![node("b", 2, false, vec![node("c", 3, false, vec![])])]),
            node("d", 4, true, vec![]),
        ];

        assert_eq!(count_nodes(&forest), 4);
        assert_eq!(depth(&forest), 3);
        assert_eq!(depth(&[]), 0);
    }
}
