//! Sentence form tests.
//!
//! Tests for grammar-to-form mapping and how each form splits the input.

use mudlex_parser::{
    Access, CommandKind, Grammar, ParseStatus, PrepositionType, SentenceForm, Support,
    TextParser, VerbInfo, VerbTable, Vocabulary,
};

use crate::fixtures::{BOB, CHEST, Lexicons, SWORD};

// =============================================================================
// Form selection
// =============================================================================

#[test]
fn forms_for_required_slots() {
    let grammar = Grammar::new(Support::Required, Support::Required);
    assert_eq!(
        SentenceForm::for_grammar(&grammar),
        vec![SentenceForm::VerbDirectIndirect]
    );
}

#[test]
fn forms_for_optional_slots_include_shorter_shapes() {
    let grammar = Grammar::new(Support::Optional, Support::Optional);
    let forms = SentenceForm::for_grammar(&grammar);
    assert_eq!(forms.len(), 4);
    assert!(forms.contains(&SentenceForm::Verb));
    assert!(forms.contains(&SentenceForm::VerbDirect));
    assert!(forms.contains(&SentenceForm::VerbPrepIndirect));
    assert!(forms.contains(&SentenceForm::VerbDirectIndirect));
}

#[test]
fn forms_for_text_slots() {
    assert_eq!(
        SentenceForm::for_grammar(&Grammar::new(Support::Text, Support::Required)),
        vec![SentenceForm::VerbTextIndirect]
    );
    assert_eq!(
        SentenceForm::for_grammar(&Grammar::new(Support::Required, Support::Text)),
        vec![SentenceForm::VerbDirectPrepText]
    );
    assert_eq!(
        SentenceForm::for_grammar(&Grammar::text()),
        vec![SentenceForm::VerbText]
    );
}

#[test]
fn object_slots() {
    assert!(!SentenceForm::Verb.has_object_slot());
    assert!(!SentenceForm::VerbText.has_object_slot());
    assert!(!SentenceForm::VerbTextPrepText.has_object_slot());
    assert!(SentenceForm::VerbDirect.has_object_slot());
    assert!(SentenceForm::VerbTextIndirect.has_object_slot());
}

// =============================================================================
// Text forms
// =============================================================================

#[test]
fn say_keeps_original_text() {
    let parser = TextParser::standard();
    let lexicons = Lexicons::empty();
    let outcome = parser.parse("say Hello, World!", lexicons.scope(), Access::player());

    assert_eq!(outcome.status, ParseStatus::Valid);
    assert_eq!(outcome.candidates.len(), 1);
    let result = &outcome.candidates[0];
    assert_eq!(result.command, CommandKind::Speak);
    assert_eq!(result.unparsed, "Hello, World!");
    assert_eq!(result.direct, None);
}

#[test]
fn say_without_text_fails() {
    let parser = TextParser::standard();
    let lexicons = Lexicons::empty();
    let outcome = parser.parse("say", lexicons.scope(), Access::player());
    assert_ne!(outcome.status, ParseStatus::Valid);
}

#[test]
fn whisper_splits_text_and_recipient() {
    let parser = TextParser::standard();
    let mut lexicons = Lexicons::empty();
    lexicons.area.add_noun("bob", BOB);

    let outcome = parser.parse(
        "whisper meet me at dawn to bob",
        lexicons.scope(),
        Access::player(),
    );
    assert_eq!(outcome.status, ParseStatus::Valid);
    let result = &outcome.candidates[0];
    assert_eq!(result.command, CommandKind::Whisper);
    assert_eq!(result.unparsed, "meet me at dawn");
    assert_eq!(result.preposition, PrepositionType::To);
    assert_eq!(result.indirect, vec![BOB]);
}

#[test]
fn whisper_splits_at_last_preposition() {
    let parser = TextParser::standard();
    let mut lexicons = Lexicons::empty();
    lexicons.area.add_noun("bob", BOB);

    let outcome = parser.parse(
        "whisper go to the gate to bob",
        lexicons.scope(),
        Access::player(),
    );
    assert_eq!(outcome.status, ParseStatus::Valid);
    assert_eq!(outcome.candidates[0].unparsed, "go to the gate");
}

#[test]
fn text_on_both_sides_of_preposition() {
    let parser = TextParser::standard();
    let lexicons = Lexicons::empty();

    let outcome = parser.parse("set name to Shiny Blade", lexicons.scope(), Access::admin(true));
    assert_eq!(outcome.status, ParseStatus::Valid);
    let result = &outcome.candidates[0];
    assert_eq!(result.command, CommandKind::EditAttribute);
    assert_eq!(result.unparsed, "name");
    assert_eq!(result.indirect_text.as_deref(), Some("Shiny Blade"));
}

#[test]
fn object_then_text() {
    let parser = TextParser::standard();
    let lexicons = Lexicons::sword_and_chest();

    let outcome = parser.parse("edit sword to rusty", lexicons.scope(), Access::admin(true));
    assert_eq!(outcome.status, ParseStatus::Valid);
    let result = &outcome.candidates[0];
    assert_eq!(result.direct, Some(SWORD));
    assert_eq!(result.indirect_text.as_deref(), Some("rusty"));
}

// =============================================================================
// Object forms
// =============================================================================

#[test]
fn direct_and_indirect_with_placement() {
    let parser = TextParser::standard();
    let lexicons = Lexicons::sword_and_chest();

    let outcome = parser.parse("put sword on top of chest", lexicons.scope(), Access::player());
    assert_eq!(outcome.status, ParseStatus::Valid);
    let result = &outcome.candidates[0];
    assert_eq!(result.direct, Some(SWORD));
    assert_eq!(result.indirect, vec![CHEST]);
    assert_eq!(result.preposition, PrepositionType::On);
}

#[test]
fn unknown_preposition_is_invalid_noun() {
    let parser = TextParser::standard();
    let lexicons = Lexicons::sword_and_chest();

    let outcome = parser.parse("put sword beside chest", lexicons.scope(), Access::player());
    assert_eq!(outcome.status, ParseStatus::InvalidNoun);
    assert_eq!(outcome.candidates[0].unparsed, "beside chest");
}

#[test]
fn prep_indirect_without_direct() {
    let mut vocab = Vocabulary::new();
    vocab.add_verb(
        VerbTable::Global,
        "knock",
        VerbInfo::new(
            CommandKind::Push,
            Grammar::new(Support::No, Support::Required)
                .with_preposition("on", PrepositionType::On),
        ),
    );
    let parser = TextParser::new(vocab);
    let lexicons = Lexicons::sword_and_chest();

    let outcome = parser.parse("knock on chest", lexicons.scope(), Access::player());
    assert_eq!(outcome.status, ParseStatus::Valid);
    assert_eq!(outcome.candidates[0].direct, None);
    assert_eq!(outcome.candidates[0].indirect, vec![CHEST]);
}

#[test]
fn trailing_words_fail_bare_verb() {
    let parser = TextParser::standard();
    let lexicons = Lexicons::empty();

    assert_eq!(
        parser.parse("inventory", lexicons.scope(), Access::player()).status,
        ParseStatus::Valid
    );
    let outcome = parser.parse("inventory please", lexicons.scope(), Access::player());
    assert_eq!(outcome.status, ParseStatus::InvalidNoun);
    assert_eq!(outcome.candidates[0].unparsed, "please");
}
