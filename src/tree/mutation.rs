//! Learning: replace a wrong guess with a new distinguishing question

use super::node::Node;
use crate::{Error, Result};

/// What the player taught the game after a wrong guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    /// The animal the player was actually thinking of
    pub animal: String,
    /// Question that separates `animal` from the wrong guess
    pub question: String,
    /// Answer to `question` for `animal`
    pub answer_for_animal: bool,
}

impl Lesson {
    /// Build a lesson, trimming both texts.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyAnswer` if the animal or the question is blank.
    pub fn new(
        animal: impl Into<String>,
        question: impl Into<String>,
        answer_for_animal: bool,
    ) -> Result<Self> {
        let animal = non_blank(animal.into(), "animal")?;
        let question = non_blank(question.into(), "question")?;
        Ok(Self {
            animal,
            question,
            answer_for_animal,
        })
    }
}

fn non_blank(text: String, field: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyAnswer {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Rewrite `node` in place as the lesson's question.
///
/// The old value moves into a new leaf and the lesson's animal becomes its
/// sibling; `answer_for_animal` decides which of the two sits on the yes
/// branch. The node keeps its position, so parents need no update. Any
/// previous children of `node` are dropped.
///
/// Re-teaching the name that was just guessed is accepted and produces two
/// leaves with the same label.
///
/// # Examples
///
/// ```
/// use twenty_questions::tree::{Lesson, Node, graft};
///
/// let mut node = Node::new("Cat");
/// graft(&mut node, Lesson::new("Lion", "Does it roar?", true)?);
///
/// assert_eq!(node.value, "Does it roar?");
/// assert_eq!(node.yes.as_ref().unwrap().value, "Lion");
/// assert_eq!(node.no.as_ref().unwrap().value, "Cat");
/// # Ok::<(), twenty_questions::Error>(())
/// ```
pub fn graft(node: &mut Node, lesson: Lesson) {
    let old_guess = Node::new(std::mem::take(&mut node.value));
    let new_animal = Node::new(lesson.animal);

    let (yes, no) = if lesson.answer_for_animal {
        (new_animal, old_guess)
    } else {
        (old_guess, new_animal)
    };

    node.value = lesson.question;
    node.yes = Some(Box::new(yes));
    node.no = Some(Box::new(no));
}
