//! Session tests against the demo world.

use mudlex_foundation::ObjectId;
use mudlex_parser::{CommandKind, ParseStatus, ParserConfig, VerbType};
use mudlex_runtime::{Location, Session, WorldSnapshot};

const SWORD: ObjectId = ObjectId::new(1);
const BRASS_COIN: ObjectId = ObjectId::new(2);
const COPPER_COIN: ObjectId = ObjectId::new(3);
const BOB: ObjectId = ObjectId::new(5);
const LEVER: ObjectId = ObjectId::new(6);

#[test]
fn ambiguous_coin_lists_carried_first() {
    let session = Session::new();
    let outcome = session.parse("take coin");

    assert_eq!(outcome.status, ParseStatus::Valid);
    let directs: Vec<_> = outcome.candidates.iter().filter_map(|r| r.direct).collect();
    assert_eq!(directs, vec![BRASS_COIN, COPPER_COIN]);
}

#[test]
fn qualified_alias_picks_one_coin() {
    let session = Session::new();
    let outcome = session.parse("take the copper coin");
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].direct, Some(COPPER_COIN));
}

#[test]
fn local_lever_verb_wins() {
    let session = Session::new();
    let outcome = session.parse("pull the rusty lever");

    assert_eq!(outcome.status, ParseStatus::Valid);
    assert!(outcome.candidates.iter().all(|r| r.verb_type == VerbType::Local));
    assert_eq!(outcome.candidates[0].direct, Some(LEVER));
}

#[test]
fn local_verb_binds_indirect_owner() {
    let session = Session::new();
    let outcome = session.parse("tip sword to barkeep");

    assert_eq!(outcome.status, ParseStatus::Valid);
    let result = &outcome.candidates[0];
    assert_eq!(result.command, CommandKind::Transfer);
    assert_eq!(result.verb_type, VerbType::Local);
    assert_eq!(result.direct, Some(SWORD));
    assert_eq!(result.indirect, vec![BOB]);
}

#[test]
fn bare_local_verb_targets_owner() {
    let session = Session::new();
    let outcome = session.parse("sharpen");
    assert_eq!(outcome.status, ParseStatus::Valid);
    assert_eq!(outcome.candidates[0].direct, Some(SWORD));
}

#[test]
fn things_elsewhere_are_unavailable() {
    let session = Session::new();
    assert_eq!(session.parse("take key").status, ParseStatus::UnavailableNoun);
    assert_eq!(session.parse("ring bell").status, ParseStatus::UnavailableVerb);
    assert_eq!(session.parse("take unicorn").status, ParseStatus::InvalidNoun);
    assert_eq!(session.parse("frobnicate").status, ParseStatus::InvalidVerb);
}

#[test]
fn access_toggles() {
    let mut session = Session::new();
    assert_eq!(session.parse("delete chest").status, ParseStatus::InvalidVerb);

    session.set_admin(true);
    assert_eq!(session.parse("delete chest").status, ParseStatus::InvalidVerb);

    session.set_edit_mode(true);
    let outcome = session.parse("delete chest");
    assert_eq!(outcome.status, ParseStatus::Valid);
    assert_eq!(outcome.candidates[0].verb_type, VerbType::EditMode);

    session.set_admin(false);
    assert_eq!(session.parse("delete chest").status, ParseStatus::InvalidVerb);
}

#[test]
fn config_survives_world_swap() {
    let mut session = Session::new().with_config(ParserConfig::default().with_max_candidates(1));
    assert_eq!(session.parse("take coin").candidates.len(), 1);

    let mut world = WorldSnapshot::new();
    for name in ["a red gem", "a blue gem", "a green gem"] {
        world.add_object(name, &["gem"], Location::Area);
    }
    session.set_world(world);
    let outcome = session.parse("take gem");
    assert_eq!(outcome.status, ParseStatus::Valid);
    assert_eq!(outcome.candidates.len(), 1);
}

#[test]
fn describe_lists_candidates() {
    let session = Session::new();
    let text = session.describe(&session.parse("put sword in chest"));

    assert!(text.starts_with("valid"));
    assert!(text.contains("1. put (global)"));
    assert!(text.contains("#1 a short sword"));
    assert!(text.contains("position=In"));
}

#[test]
fn describe_failure_has_message() {
    let session = Session::new();
    let text = session.describe(&session.parse("take key"));
    assert!(text.starts_with("unavailable noun: That's not here."));
}

#[test]
fn completion_words_include_scope_and_verbs() {
    let session = Session::new();
    let words = session.completion_words();
    assert!(words.contains(&"lever".to_string()));
    assert!(words.contains(&"take".to_string()));
    assert!(!words.contains(&"key".to_string()));
}
