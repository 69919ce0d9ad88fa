/// Renders one child subtree given the indentation its own children use.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Join child renderings below a parent line with `├─` / `└─` branches.
///
/// Returns an empty string when there are no children.
pub fn print_tree(tab: Option<&str>, children: &[&PrintChild<'_>]) -> String {
    let tab = tab.unwrap_or("");
    let mut out = String::new();

    let Some(last) = children.len().checked_sub(1) else {
        return out;
    };

    for (i, child_fn) in children.iter().enumerate() {
        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if is_last { "└─" } else { "├─" };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        out.push(' ');
        out.push_str(&child);
    }

    out
}
