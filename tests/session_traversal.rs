//! Tests for walking the tree with yes/no answers

use std::sync::Arc;

use twenty_questions::{
    GameEvent, GameSession, Node, Prompt, SessionState, TreeCodec, TreeStore,
    adapters::InMemoryRepository, tree::bootstrap,
};

fn session_with(root: Node) -> GameSession {
    let codec = TreeCodec::new(Arc::new(InMemoryRepository::new()), "tree.json");
    GameSession::new(TreeStore::with_root(codec, root)).unwrap()
}

fn bark() -> Node {
    Node::question("Does it bark?", Node::new("Dog"), Node::new("Cat"))
}

#[test]
fn test_yes_lands_on_dog() {
    let mut session = session_with(bark());
    session.answer(true).unwrap();

    let node = session.current().unwrap();
    assert_eq!(node.value, "Dog");
    assert!(node.is_leaf());
    assert_eq!(session.state(), SessionState::AwaitingConfirmation);
}

#[test]
fn test_no_lands_on_cat() {
    let mut session = session_with(bark());
    session.answer(false).unwrap();

    let node = session.current().unwrap();
    assert_eq!(node.value, "Cat");
    assert!(node.yes.is_none() && node.no.is_none());
}

#[test]
fn test_bootstrap_walk_to_chameleon() {
    let mut session = session_with(bootstrap::animals());
    let answers = [false, false, true, true, true];

    for answer in answers {
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.answer(answer).unwrap(), GameEvent::QuestionAsked);
    }

    assert_eq!(session.prompt().unwrap(), Prompt::Guess("Chameleon"));
    assert_eq!(session.steps().len(), 5);
}

#[test]
fn test_reset_after_win_starts_over() {
    let mut session = session_with(bark());
    session.answer(true).unwrap();
    session.confirm(true).unwrap();
    assert_eq!(session.state(), SessionState::Won);

    session.reset();
    assert_eq!(session.prompt().unwrap(), Prompt::Question("Does it bark?"));
}
