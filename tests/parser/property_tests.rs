//! Property tests for the parser pipeline.

use proptest::prelude::*;

use mudlex_foundation::ObjectId;
use mudlex_parser::{Access, ParseStatus, TextParser};

use crate::fixtures::Lexicons;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{3,8}".prop_filter("not an ignore word", |w| w != "the")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A two-word alias always beats the one-word alias it ends with.
    #[test]
    fn two_word_alias_beats_its_tail(first in word(), second in word()) {
        prop_assume!(first != second);
        let parser = TextParser::standard();
        let mut lexicons = Lexicons::empty();
        lexicons.area.add_noun(&second, ObjectId::new(1));
        lexicons.area.add_noun(&format!("{first} {second}"), ObjectId::new(2));

        let outcome = parser.parse(
            &format!("take {first} {second}"),
            lexicons.scope(),
            Access::player(),
        );
        prop_assert_eq!(outcome.status, ParseStatus::Valid);
        prop_assert_eq!(outcome.candidates.len(), 1);
        prop_assert_eq!(outcome.candidates[0].direct, Some(ObjectId::new(2)));
    }

    /// Case does not change the outcome.
    #[test]
    fn case_insensitive(noun in word()) {
        let parser = TextParser::standard();
        let mut lexicons = Lexicons::empty();
        lexicons.player.add_noun(&noun, ObjectId::new(7));

        let lower = parser.parse(&format!("take {noun}"), lexicons.scope(), Access::player());
        let upper = parser.parse(
            &format!("TAKE {}", noun.to_uppercase()),
            lexicons.scope(),
            Access::player(),
        );
        prop_assert_eq!(lower, upper);
    }
}
