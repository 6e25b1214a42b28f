//! Show command - Print a tree file as an indented outline

use std::{fmt::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    tree::{Branch, Node},
};

#[derive(Parser, Debug)]
#[command(about = "Print the question tree as an outline")]
pub struct ShowArgs {
    /// Tree file to print
    pub tree: PathBuf,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let root = App::new().codec(&args.tree).try_load()?;
    print!("{}", render_outline(&root));
    Ok(())
}

/// Render `root` with one node per line, children indented under their
/// question and prefixed by the answer that leads to them.
pub fn render_outline(root: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0, None);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize, via: Option<Branch>) {
    let indent = "  ".repeat(depth);
    let label = via.map(|b| format!("{b}: ")).unwrap_or_default();
    let marker = if node.is_leaf() { "→ " } else { "" };
    let _ = writeln!(out, "{indent}{label}{marker}{}", node.value);

    if node.is_leaf() {
        return;
    }
    for branch in [Branch::Yes, Branch::No] {
        match node.child(branch) {
            Some(child) => write_node(out, child, depth + 1, Some(branch)),
            None => {
                let _ = writeln!(out, "{indent}  {branch}: (nothing)");
            }
        }
    }
}
