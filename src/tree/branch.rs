//! Yes/no branch selectors and dotted tree paths

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step down the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Yes,
    No,
}

impl Branch {
    /// Branch taken for a yes/no answer
    pub fn from_answer(answer: bool) -> Self {
        if answer { Branch::Yes } else { Branch::No }
    }

    /// Key used for this branch in tree documents
    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Yes => "yes",
            Branch::No => "no",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a sequence of branches as a dotted path rooted at `root`.
///
/// ```
/// use twenty_questions::tree::{Branch, render_path};
///
/// assert_eq!(render_path(&[Branch::Yes, Branch::No]), "root.yes.no");
/// assert_eq!(render_path(&[]), "root");
/// ```
pub fn render_path(steps: &[Branch]) -> String {
    let mut path = String::from("root");
    for step in steps {
        path.push('.');
        path.push_str(step.as_str());
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answer() {
        assert_eq!(Branch::from_answer(true), Branch::Yes);
        assert_eq!(Branch::from_answer(false), Branch::No);
    }

    #[test]
    fn test_render_nested_path() {
        let steps = [Branch::No, Branch::No, Branch::Yes];
        assert_eq!(render_path(&steps), "root.no.no.yes");
    }
}
