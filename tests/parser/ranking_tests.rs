//! Result ranking tests.
//!
//! Tests for picking the best status, then the best verb type.

use mudlex_foundation::ObjectId;
use mudlex_parser::{CommandKind, ParseResult, ParseStatus, ResultContainer, VerbType};

fn result(verb_type: VerbType, direct: Option<u64>) -> ParseResult {
    let mut result = ParseResult::new(verb_type);
    result.command = CommandKind::Take;
    result.direct = direct.map(ObjectId::new);
    result
}

#[test]
fn empty_container_is_invalid_verb() {
    let container = ResultContainer::new();
    assert_eq!(container.best_status(), ParseStatus::InvalidVerb);
    assert!(container.best_results().is_empty());
    assert!(container.is_empty());
}

#[test]
fn best_status_wins_over_verb_type() {
    let mut container = ResultContainer::new();
    container.add_result(ParseStatus::InvalidNoun, result(VerbType::EditMode, None));
    container.add_result(ParseStatus::Valid, result(VerbType::Global, Some(1)));

    assert_eq!(container.best_status(), ParseStatus::Valid);
    let best = container.best_results();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].verb_type, VerbType::Global);
}

#[test]
fn verb_type_breaks_status_ties() {
    let mut container = ResultContainer::new();
    container.add_result(ParseStatus::Valid, result(VerbType::Global, Some(1)));
    container.add_result(ParseStatus::Valid, result(VerbType::Local, Some(2)));
    container.add_result(ParseStatus::Valid, result(VerbType::Global, Some(3)));

    let best = container.into_best_results();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].direct, Some(ObjectId::new(2)));
}

#[test]
fn status_order() {
    assert!(ParseStatus::InvalidVerb < ParseStatus::UnavailableVerb);
    assert!(ParseStatus::UnavailableVerb < ParseStatus::InvalidNoun);
    assert!(ParseStatus::InvalidNoun < ParseStatus::UnavailableNoun);
    assert!(ParseStatus::UnavailableNoun < ParseStatus::Valid);
}

#[test]
fn verb_type_order() {
    assert!(VerbType::Invalid < VerbType::Unavailable);
    assert!(VerbType::Unavailable < VerbType::Global);
    assert!(VerbType::Global < VerbType::Local);
    assert!(VerbType::Local < VerbType::Builder);
    assert!(VerbType::Builder < VerbType::EditMode);
}

#[test]
fn ties_keep_insertion_order() {
    let mut container = ResultContainer::new();
    for id in [5, 3, 9] {
        container.add_result(ParseStatus::Valid, result(VerbType::Global, Some(id)));
    }
    let ids: Vec<_> = container
        .best_results()
        .iter()
        .filter_map(|r| r.direct)
        .map(ObjectId::raw)
        .collect();
    assert_eq!(ids, vec![5, 3, 9]);
}

#[test]
fn duplicates_are_dropped() {
    let mut container = ResultContainer::new();
    container.add_result(ParseStatus::InvalidNoun, result(VerbType::Global, None));
    container.add_result(ParseStatus::InvalidNoun, result(VerbType::Global, None));
    assert_eq!(container.len(), 1);
}
