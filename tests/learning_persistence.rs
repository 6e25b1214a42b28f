//! Tests for the learning mutation and its persistence

use std::sync::Arc;

use tempfile::TempDir;
use twenty_questions::{
    Branch, Error, GameSession, Lesson, Node, SessionState, TreeCodec, TreeStore,
    adapters::{InMemoryRepository, JsonFileRepository},
    tree::graft,
};

fn codec_for(path: impl Into<std::path::PathBuf>) -> TreeCodec {
    TreeCodec::new(Arc::new(JsonFileRepository::new()), path)
}

fn pets() -> Node {
    Node::question("Does it bark?", Node::new("Dog"), Node::new("Cat"))
}

#[test]
fn test_graft_keeps_node_position() {
    let mut root = pets();
    let cat = root.node_at_mut(&[Branch::No]).unwrap();
    graft(cat, Lesson::new("Lion", "Does it roar?", true).unwrap());

    let node = root.node_at(&[Branch::No]).unwrap();
    assert_eq!(node.value, "Does it roar?");
    assert_eq!(node.yes.as_ref().unwrap().value, "Lion");
    assert_eq!(node.no.as_ref().unwrap().value, "Cat");
    assert!(node.yes.as_ref().unwrap().is_leaf());
    assert!(node.no.as_ref().unwrap().is_leaf());
    assert_eq!(root.yes.as_ref().unwrap().value, "Dog");
}

#[test]
fn test_learned_tree_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tree.json");

    let store = TreeStore::open(codec_for(&path), Some(pets()), false);
    let mut session = GameSession::new(store).unwrap();

    session.answer(false).unwrap();
    session.confirm(false).unwrap();
    session
        .learn(Lesson::new("Lion", "Does it roar?", false).unwrap())
        .unwrap();
    assert_eq!(session.state(), SessionState::Playing);
    assert!(session.steps().is_empty());

    let reloaded = codec_for(&path).load(None, false).expect("saved tree");
    let node = reloaded.node_at(&[Branch::No]).unwrap();
    assert_eq!(node.value, "Does it roar?");
    assert_eq!(node.yes.as_ref().unwrap().value, "Cat");
    assert_eq!(node.no.as_ref().unwrap().value, "Lion");
    assert_eq!(&reloaded, session.store().root().unwrap());
}

#[test]
fn test_next_round_uses_new_knowledge() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tree.json");
    let mut session =
        GameSession::new(TreeStore::open(codec_for(&path), Some(pets()), false)).unwrap();

    session.answer(false).unwrap();
    session.confirm(false).unwrap();
    session
        .learn(Lesson::new("Lion", "Does it roar?", true).unwrap())
        .unwrap();

    session.answer(false).unwrap();
    assert_eq!(session.state(), SessionState::Playing);
    session.answer(true).unwrap();
    assert_eq!(session.state(), SessionState::AwaitingConfirmation);
    assert_eq!(session.current().unwrap().value, "Lion");
}

#[test]
fn test_failed_save_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("tree.json");
    let mut session = GameSession::new(TreeStore::with_root(codec_for(&path), pets())).unwrap();

    session.answer(true).unwrap();
    session.confirm(false).unwrap();
    let result = session.learn(Lesson::new("Wolf", "Is it wild?", true).unwrap());

    assert!(matches!(result, Err(Error::Io { .. })));
    // The lesson is still known in memory and the session is back at the root.
    assert_eq!(session.state(), SessionState::Playing);
    let root = session.store().root().unwrap();
    assert_eq!(root.yes.as_ref().unwrap().value, "Is it wild?");
    assert!(!path.exists());
}

#[test]
fn test_many_lessons_on_one_branch_survive_reload() {
    let codec = TreeCodec::new(Arc::new(InMemoryRepository::new()), "tree.json");
    let mut session = GameSession::new(TreeStore::with_root(codec.clone(), pets())).unwrap();

    for n in 0..150 {
        while session.state() == SessionState::Playing {
            session.answer(false).unwrap();
        }
        assert_eq!(session.current().unwrap().value, "Cat");
        session.confirm(false).unwrap();
        let lesson = Lesson::new(format!("Animal {n}"), format!("Question {n}?"), true).unwrap();
        session.learn(lesson).unwrap();
    }

    let reloaded = codec.load(Some(Node::new("DEFAULT")), false).unwrap();
    assert_eq!(reloaded.value, "Does it bark?");
    assert_eq!(reloaded.depth(), 151);
    assert_eq!(&reloaded, session.store().root().unwrap());
}
