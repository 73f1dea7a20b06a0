use super::tree::RbTree;
use super::tree_iter::{NodeView, Side};
use super::Color;
use std::fmt;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";

/// How `RbTree::render_lines` lays out each node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap red nodes in red and black nodes in bold terminal escapes
    pub ansi: bool,
    pub show_values: bool,
    /// Spaces of indentation per level of depth
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            ansi: false,
            show_values: true,
            indent: 4,
        }
    }
}

impl RenderOptions {
    fn line(&self, view: &NodeView) -> String {
        let pad = " ".repeat(view.depth * self.indent);
        let side = match view.side {
            Side::Root => "root",
            Side::Left => "L",
            Side::Right => "R",
        };
        let label = if self.show_values {
            format!("[{}] {}", view.key, view.value)
        } else {
            format!("[{}]", view.key)
        };
        if self.ansi {
            let escape = match view.color {
                Color::Red => RED,
                Color::Black => BOLD,
            };
            format!(
                "{}{} {}{}{} ({})",
                pad, side, escape, label, RESET, view.color
            )
        } else {
            format!("{}{} {} ({})", pad, side, label, view.color)
        }
    }
}

impl RbTree {
    /// One line per node in pre-order, indented by depth, e.g. `    L [1] One (R)`.
    /// The output depends only on the tree contents and shape, so renders of
    /// the same state can be diffed
    pub fn render_lines(&self, options: &RenderOptions) -> Vec<String> {
        self.structure().map(|view| options.line(&view)).collect()
    }

    /// `render_lines` with default options, each line ended by a newline
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.render_lines(&RenderOptions::default()) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for RbTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
