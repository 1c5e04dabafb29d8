//! Rule-based knowledge base used when no generated answer is available.
//!
//! The knowledge base is an ordered table of [`KnowledgeEntry`] rows. A
//! question is matched in a single pass: the first row with any keyword
//! contained in the lower-cased question wins, so table order is priority
//! order. Questions matching no row get the [`Category::General`] overview.

mod answers;

use serde::{Deserialize, Serialize};

/// Service category covered by the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Licensing,
    Voting,
    Taxes,
    Benefits,
    Passport,
    Legal,
    /// No keyword matched; the capability overview
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Licensing => "licensing",
            Category::Voting => "voting",
            Category::Taxes => "taxes",
            Category::Benefits => "benefits",
            Category::Passport => "passport",
            Category::Legal => "legal",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the knowledge base
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub category: Category,
    /// Lower-case keywords; any substring hit selects this entry
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl KnowledgeEntry {
    /// Whether any keyword occurs in the (already lower-cased) question
    pub fn matches(&self, question_lower: &str) -> bool {
        self.keywords.iter().any(|kw| question_lower.contains(kw))
    }
}

/// Entries in priority order.
pub const KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        category: Category::Licensing,
        keywords: &["license", "permit", "driving"],
        answer: answers::LICENSING,
    },
    KnowledgeEntry {
        category: Category::Voting,
        keywords: &["vote", "voting", "election"],
        answer: answers::VOTING,
    },
    KnowledgeEntry {
        category: Category::Taxes,
        keywords: &["tax", "taxes", "irs"],
        answer: answers::TAXES,
    },
    KnowledgeEntry {
        category: Category::Benefits,
        keywords: &["benefit", "benefits", "social security", "medicare"],
        answer: answers::BENEFITS,
    },
    KnowledgeEntry {
        category: Category::Passport,
        keywords: &["passport", "travel"],
        answer: answers::PASSPORT,
    },
    KnowledgeEntry {
        category: Category::Legal,
        keywords: &["court", "legal", "lawyer"],
        answer: answers::LEGAL,
    },
];

/// Answer returned when no entry matches
pub const OVERVIEW_ANSWER: &str = answers::OVERVIEW;

/// Find the entry for a lower-cased question, if any.
pub fn lookup(question_lower: &str) -> Option<&'static KnowledgeEntry> {
    KNOWLEDGE_BASE
        .iter()
        .find(|entry| entry.matches(question_lower))
}

/// Category a lower-cased question resolves to.
pub fn categorize(question_lower: &str) -> Category {
    lookup(question_lower)
        .map(|entry| entry.category)
        .unwrap_or(Category::General)
}

/// Canned answer for a lower-cased question. Total: never empty.
pub fn match_answer(question_lower: &str) -> &'static str {
    lookup(question_lower)
        .map(|entry| entry.answer)
        .unwrap_or(OVERVIEW_ANSWER)
}
