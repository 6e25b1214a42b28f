//! Traversal state machine for one game round.
//!
//! A session walks the tree from the root, one yes/no answer at a time.
//! Reaching a leaf turns the walk into a guess; a rejected guess turns it
//! into a lesson, which rewrites the leaf in place and persists the tree.
//!
//! ```text
//!            answer(..)            leaf reached
//!   Playing ───────────▶ Playing ──────────────▶ AwaitingConfirmation
//!      ▲                                             │          │
//!      │ learn(..) + persist          confirm(false) │          │ confirm(true)
//!      └──────────────────────── Learning ◀──────────┘          ▼
//!                                                              Won
//! ```
//!
//! `reset()` is valid in every state and returns to the root.

use std::fmt;

use crate::{
    Error, Result,
    store::TreeStore,
    tree::{Branch, Lesson, Node, graft},
};

/// Where a session is in its round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// The current node is a question
    Playing,
    /// The current node is a leaf and its guess awaits a verdict
    AwaitingConfirmation,
    /// The guess was wrong; waiting for the lesson
    Learning,
    /// The guess was right
    Won,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Playing => "playing",
            SessionState::AwaitingConfirmation => "awaiting confirmation",
            SessionState::Learning => "learning",
            SessionState::Won => "won",
        };
        f.write_str(name)
    }
}

/// Something the scoring layer may want to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    QuestionAsked,
    Won,
    LearningTriggered,
}

/// What the player should be shown next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    Question(&'a str),
    Guess(&'a str),
    Lesson { wrong_guess: &'a str },
    Won { animal: &'a str },
}

/// One player's walk through the tree.
///
/// The session owns its [`TreeStore`]; concurrent players each need their
/// own store and session.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use twenty_questions::{
///     adapters::InMemoryRepository,
///     session::{GameSession, SessionState},
///     store::TreeStore,
///     tree::{Lesson, Node, TreeCodec},
/// };
///
/// let codec = TreeCodec::new(Arc::new(InMemoryRepository::new()), "tree.json");
/// let root = Node::question("Does it bark?", Node::new("Dog"), Node::new("Cat"));
/// let mut session = GameSession::new(TreeStore::with_root(codec, root))?;
///
/// session.answer(false)?;
/// assert_eq!(session.state(), SessionState::AwaitingConfirmation);
///
/// session.confirm(false)?;
/// session.learn(Lesson::new("Lion", "Does it roar?", true)?)?;
/// assert_eq!(session.state(), SessionState::Playing);
/// # Ok::<(), twenty_questions::Error>(())
/// ```
pub struct GameSession {
    store: TreeStore,
    steps: Vec<Branch>,
    state: SessionState,
}

impl GameSession {
    /// Start a session at the root of the store's tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the store holds no tree.
    pub fn new(store: TreeStore) -> Result<Self> {
        if store.root().is_none() {
            return Err(Error::EmptyTree);
        }
        let mut session = Self {
            store,
            steps: Vec::new(),
            state: SessionState::Playing,
        };
        session.reset();
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Branches taken from the root to the current node
    pub fn steps(&self) -> &[Branch] {
        &self.steps
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// The node the session is looking at.
    pub fn current(&self) -> Result<&Node> {
        let root = self.store.root().ok_or(Error::EmptyTree)?;
        // `steps` only ever records branches that exist.
        Ok(root.node_at(&self.steps).unwrap_or(root))
    }

    /// What to show the player for the current state.
    pub fn prompt(&self) -> Result<Prompt<'_>> {
        let value = self.current()?.value.as_str();
        Ok(match self.state {
            SessionState::Playing => Prompt::Question(value),
            SessionState::AwaitingConfirmation => Prompt::Guess(value),
            SessionState::Learning => Prompt::Lesson { wrong_guess: value },
            SessionState::Won => Prompt::Won { animal: value },
        })
    }

    /// Answer the current question.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidTransition` unless the session is `Playing`
    /// - `Error::DeadBranch` if the question has no child on the chosen side;
    ///   the session stays on the question
    pub fn answer(&mut self, yes: bool) -> Result<GameEvent> {
        self.require(SessionState::Playing, "answer a question")?;

        let branch = Branch::from_answer(yes);
        let node = self.current()?;
        let next_is_leaf = match node.child(branch) {
            Some(next) => next.is_leaf(),
            None => {
                return Err(Error::DeadBranch {
                    question: node.value.clone(),
                    branch: branch.to_string(),
                });
            }
        };

        self.steps.push(branch);
        if next_is_leaf {
            self.state = SessionState::AwaitingConfirmation;
        }
        Ok(GameEvent::QuestionAsked)
    }

    /// Accept or reject the current guess.
    pub fn confirm(&mut self, correct: bool) -> Result<GameEvent> {
        self.require(SessionState::AwaitingConfirmation, "confirm a guess")?;

        if correct {
            self.state = SessionState::Won;
            Ok(GameEvent::Won)
        } else {
            self.state = SessionState::Learning;
            Ok(GameEvent::LearningTriggered)
        }
    }

    /// Graft the lesson into the wrongly guessed leaf, persist, and go back
    /// to the root.
    ///
    /// The in-memory tree keeps the lesson even when persisting fails.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidTransition` unless the session is `Learning`
    /// - any persistence error, after the session has been reset
    pub fn learn(&mut self, lesson: Lesson) -> Result<()> {
        self.require(SessionState::Learning, "learn a new animal")?;

        let root = self.store.root_mut().ok_or(Error::EmptyTree)?;
        let leaf = root.node_at_mut(&self.steps).ok_or(Error::EmptyTree)?;
        graft(leaf, lesson);

        self.reset();
        self.store.persist()
    }

    /// Go back to the root, keeping every lesson learned so far.
    pub fn reset(&mut self) {
        self.steps.clear();
        let root_is_leaf = self.store.root().is_some_and(Node::is_leaf);
        self.state = if root_is_leaf {
            SessionState::AwaitingConfirmation
        } else {
            SessionState::Playing
        };
    }

    fn require(&self, expected: SessionState, action: &str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidTransition {
                action: action.to_string(),
                state: self.state.to_string(),
            })
        }
    }
}
