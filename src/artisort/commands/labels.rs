use crate::commands::{CmdResult, Vocabulary};
use crate::grammar::{
    HEADERS, PRIMARY_NEGATIVE, PRIMARY_POSITIVE, SECONDARY_NEGATIVE, SECONDARY_POSITIVE,
};
use crate::rules::Outcome;
use crate::vocab::{AttributeKind, CategoryKind, Labeled};

fn labels<T: Labeled>() -> Vec<String> {
    T::ALL.iter().map(|t| t.label().to_string()).collect()
}

fn words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Lists everything a rule sheet may contain.
pub fn run() -> CmdResult {
    let vocabulary = vec![
        Vocabulary {
            title: "Columns",
            words: words(&HEADERS),
        },
        Vocabulary {
            title: "Categories",
            words: labels::<CategoryKind>(),
        },
        Vocabulary {
            title: "Attributes",
            words: labels::<AttributeKind>(),
        },
        Vocabulary {
            title: "Level and tier comparators",
            words: words(&[">", "<"]),
        },
        Vocabulary {
            title: "Primary attribute words",
            words: words(&[PRIMARY_POSITIVE, PRIMARY_NEGATIVE]),
        },
        Vocabulary {
            title: "Secondary attribute words",
            words: words(&[SECONDARY_POSITIVE, SECONDARY_NEGATIVE]),
        },
        Vocabulary {
            title: "Outcomes",
            words: words(&[Outcome::Keep.label(), Outcome::Discard.label()]),
        },
    ];
    CmdResult::default().with_vocabulary(vocabulary)
}
