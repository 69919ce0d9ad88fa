//! Box-drawing text dumps of trees.

mod print_tree;

pub use print_tree::{print_tree, PrintChild};

/// Types that can render themselves as an indented tree dump.
pub trait Printable {
    /// Render with every continuation line prefixed by `tab`.
    fn to_string_with_tab(&self, tab: Option<&str>) -> String;
}
