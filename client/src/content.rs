//! Static page copy rendered by the FAQ accordion.

/// One question/answer pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What do I need to register?",
        answer: "A name of at least three characters, a valid email address, and a password.",
    },
    FaqEntry {
        question: "What makes a password acceptable?",
        answer: "It must be at least six characters long and contain at least one number.",
    },
    FaqEntry {
        question: "Is my theme choice remembered?",
        answer: "No. The page always opens in light mode; use the toggle to switch for this visit.",
    },
    FaqEntry {
        question: "Can I open more than one answer?",
        answer: "Yes. Each question expands and collapses on its own.",
    },
];
