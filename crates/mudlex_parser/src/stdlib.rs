//! Standard vocabulary for the game.
//!
//! Contains the built-in verbs every player can use, plus the builder and
//! edit-mode verbs reserved for admins.

use crate::vocabulary::{
    CommandKind, Grammar, PrepositionType, Support, VerbInfo, VerbTable, Vocabulary,
};

/// Phrases meaning "inside".
pub const IN_PREPOSITIONS: [&str; 3] = ["in", "inside", "into"];

/// Phrases meaning "on top of".
pub const ON_PREPOSITIONS: [&str; 3] = ["on", "onto", "on top of"];

/// Phrases meaning "underneath".
pub const UNDER_PREPOSITIONS: [&str; 4] = ["under", "beneath", "underneath", "below"];

impl Vocabulary {
    /// Builds the built-in vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        standard_vocabulary()
    }
}

/// Builds the built-in vocabulary.
#[must_use]
pub fn standard_vocabulary() -> Vocabulary {
    let mut vocab = Vocabulary::new();
    add_global_verbs(&mut vocab);
    add_builder_verbs(&mut vocab);
    add_edit_mode_verbs(&mut vocab);
    vocab
}

fn placement(grammar: Grammar) -> Grammar {
    grammar
        .with_prepositions(&IN_PREPOSITIONS, PrepositionType::In)
        .with_prepositions(&ON_PREPOSITIONS, PrepositionType::On)
        .with_prepositions(&UNDER_PREPOSITIONS, PrepositionType::Under)
}

fn verb(command: CommandKind, direct: Support, indirect: Support) -> VerbInfo {
    VerbInfo::new(command, Grammar::new(direct, indirect))
}

fn add_global_verbs(vocab: &mut Vocabulary) {
    use Support::{No, Optional, Required, Text};

    let mut global = |aliases: &[&str], info: VerbInfo| {
        vocab.add_verb_aliases(VerbTable::Global, aliases, &info);
    };

    global(&["help"], verb(CommandKind::Help, No, No));

    // Looking around
    global(
        &["look", "examine", "x", "l"],
        VerbInfo::new(
            CommandKind::Look,
            placement(Grammar::new(Optional, Optional))
                .with_preposition("at", PrepositionType::At),
        ),
    );
    global(&["look at"], verb(CommandKind::Look, Required, No));
    global(&["listen"], verb(CommandKind::Listen, No, No));
    global(&["search"], verb(CommandKind::Search, Optional, No));
    global(&["read"], verb(CommandKind::Read, Required, No));

    // Items
    global(
        &["take", "get", "pick up", "grab"],
        VerbInfo::new(
            CommandKind::Take,
            Grammar::new(Required, Optional)
                .with_preposition("from", PrepositionType::From)
                .with_preposition("out of", PrepositionType::From),
        ),
    );
    global(
        &["put", "place"],
        VerbInfo::new(CommandKind::Put, placement(Grammar::new(Required, Required))),
    );
    global(&["drop"], verb(CommandKind::Drop, Required, No));
    global(&["inventory", "inv", "i"], verb(CommandKind::Inventory, No, No));
    global(&["more"], verb(CommandKind::More, Required, No));
    global(&["equipment", "eq"], verb(CommandKind::Equipment, No, No));
    global(&["equip", "wear", "wield"], verb(CommandKind::Equip, Required, No));
    global(&["unequip", "remove"], verb(CommandKind::Unequip, Required, No));
    global(
        &["transfer", "give"],
        VerbInfo::new(
            CommandKind::Transfer,
            Grammar::new(Required, Required).with_preposition("to", PrepositionType::To),
        ),
    );

    // Talking
    global(&["say", "speak"], verb(CommandKind::Speak, Text, No));
    global(&["shout", "yell"], verb(CommandKind::Shout, Text, No));
    global(
        &["whisper"],
        VerbInfo::new(
            CommandKind::Whisper,
            Grammar::new(Text, Required).with_preposition("to", PrepositionType::To),
        ),
    );
    global(&["talk to", "talk"], verb(CommandKind::Talk, Required, No));

    // Moving
    global(&["go", "walk"], verb(CommandKind::Go, Required, No));
    global(&["move"], verb(CommandKind::Move, Required, No));
    global(&["climb"], verb(CommandKind::Climb, Required, No));

    // Character
    global(&["stats", "status"], verb(CommandKind::Stats, No, No));
    global(&["quests", "journal"], verb(CommandKind::Quests, No, No));
    global(&["skills"], verb(CommandKind::Skills, No, No));
    global(&["quit", "exit", "logout"], verb(CommandKind::Quit, No, No));

    // Combat
    global(
        &["attack", "kill", "hit", "fight"],
        VerbInfo::new(
            CommandKind::Attack,
            Grammar::new(Required, Optional)
                .with_prepositions(&["with", "using"], PrepositionType::With),
        ),
    );
    global(
        &["use"],
        VerbInfo::new(
            CommandKind::UseSkill,
            Grammar::new(Required, Optional)
                .with_prepositions(&["on", "at"], PrepositionType::On),
        ),
    );

    // Trading
    global(&["shop", "browse"], verb(CommandKind::Shop, No, No));
    global(
        &["buy", "purchase"],
        VerbInfo::new(
            CommandKind::Buy,
            Grammar::new(Required, Optional).with_preposition("from", PrepositionType::From),
        ),
    );
    global(
        &["sell"],
        VerbInfo::new(
            CommandKind::Sell,
            Grammar::new(Required, Optional).with_preposition("to", PrepositionType::To),
        ),
    );

    // Interacting with fixtures
    global(&["break", "smash"], verb(CommandKind::Break, Required, No));
    global(&["turn", "rotate"], verb(CommandKind::Turn, Required, No));
    global(&["push", "press"], verb(CommandKind::Push, Required, No));
    global(&["pull", "yank"], verb(CommandKind::Pull, Required, No));
    global(&["eat"], verb(CommandKind::Eat, Required, No));
    global(&["drink", "sip"], verb(CommandKind::Drink, Required, No));
}

fn add_builder_verbs(vocab: &mut Vocabulary) {
    let text = |command| VerbInfo::new(command, Grammar::text());

    vocab.add_verb_aliases(
        VerbTable::Builder,
        &["editmode", "edit mode"],
        &VerbInfo::new(CommandKind::EditMode, Grammar::bare()),
    );
    vocab.add_verb_aliases(
        VerbTable::Builder,
        &["warp", "teleport"],
        &text(CommandKind::Warp),
    );
    vocab.add_verb_aliases(VerbTable::Builder, &["create"], &text(CommandKind::Create));
    vocab.add_verb_aliases(VerbTable::Builder, &["save"], &text(CommandKind::Save));
    vocab.add_verb_aliases(VerbTable::Builder, &["load"], &text(CommandKind::Load));
}

fn add_edit_mode_verbs(vocab: &mut Vocabulary) {
    use Support::{No, Required, Text};

    vocab.add_verb_aliases(
        VerbTable::EditMode,
        &["copy", "clone"],
        &verb(CommandKind::Copy, Required, No),
    );
    vocab.add_verb_aliases(
        VerbTable::EditMode,
        &["delete", "destroy"],
        &verb(CommandKind::Delete, Required, No),
    );
    vocab.add_verb_aliases(
        VerbTable::EditMode,
        &["edit"],
        &VerbInfo::new(
            CommandKind::EditAttribute,
            Grammar::new(Required, Text).with_preposition("to", PrepositionType::To),
        ),
    );
    vocab.add_verb_aliases(
        VerbTable::EditMode,
        &["set"],
        &VerbInfo::new(
            CommandKind::EditAttribute,
            Grammar::new(Text, Text).with_preposition("to", PrepositionType::To),
        ),
    );
    vocab.add_verb_aliases(
        VerbTable::EditMode,
        &["wizard", "editwizard"],
        &verb(CommandKind::EditWizard, Required, No),
    );
}
