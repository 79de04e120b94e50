//! Static keyword tables for task analysis.
//!
//! Complexity and capability lists are matched as lower-case substrings.
//! Indicator lists used for counting are matched as whole words or phrases.

use crate::types::{Capability, TaskComplexity};

/// Trigger phrases per complexity level.
pub struct ComplexityKeywords {
    /// The level these keywords indicate.
    pub level: TaskComplexity,
    /// Lower-case substrings.
    pub keywords: &'static [&'static str],
}

/// Complexity triggers, in ascending severity.
pub const COMPLEXITY_KEYWORDS: &[ComplexityKeywords] = &[
    ComplexityKeywords {
        level: TaskComplexity::Simple,
        keywords: &[
            "list", "show", "display", "get", "read", "find", "check", "open", "print", "what is",
        ],
    },
    ComplexityKeywords {
        level: TaskComplexity::Moderate,
        keywords: &[
            "create",
            "write",
            "update",
            "modify",
            "edit",
            "summarize",
            "compare",
            "convert",
            "generate",
            "download",
            "extract",
            "rename",
            "organize",
        ],
    },
    ComplexityKeywords {
        level: TaskComplexity::Complex,
        keywords: &[
            "analyze",
            "analyse",
            "research",
            "design",
            "implement",
            "integrate",
            "investigate",
            "debug",
            "refactor",
            "evaluate",
            "planning",
            "build",
        ],
    },
    ComplexityKeywords {
        level: TaskComplexity::Advanced,
        keywords: &[
            "comprehensive",
            "optimize",
            "architecture",
            "end-to-end",
            "automate",
            "orchestrate",
            "coordinate",
            "migrate",
            "pipeline",
            "workflow",
            "across multiple",
        ],
    },
    ComplexityKeywords {
        level: TaskComplexity::Expert,
        keywords: &[
            "enterprise",
            "distributed",
            "machine learning",
            "large-scale",
            "large scale",
            "mission-critical",
            "security audit",
            "production system",
            "fault-tolerant",
            "scalable",
        ],
    },
];

/// Trigger phrases per capability category.
pub struct CapabilityKeywords {
    /// The category these keywords indicate.
    pub capability: Capability,
    /// Lower-case substrings.
    pub keywords: &'static [&'static str],
}

/// Capability triggers. A description can match any number of categories.
pub const CAPABILITY_KEYWORDS: &[CapabilityKeywords] = &[
    CapabilityKeywords {
        capability: Capability::FileManagement,
        keywords: &["file", "folder", "directory", "directories", "save to", "delete", "rename", "copy"],
    },
    CapabilityKeywords {
        capability: Capability::WebSearch,
        keywords: &[
            "search",
            "google",
            "look up",
            "lookup",
            "find information",
            "web",
            "internet",
            "online",
            "latest news",
        ],
    },
    CapabilityKeywords {
        capability: Capability::WebAutomation,
        keywords: &[
            "browser",
            "website",
            "navigate",
            "click",
            "scrape",
            "screenshot",
            "web form",
            "fill in",
            "login",
        ],
    },
    CapabilityKeywords {
        capability: Capability::CodeExecution,
        keywords: &[
            "code",
            "run a script",
            "shell script",
            "bash script",
            "program",
            "execute",
            "compile",
            "python",
            "function",
            "unit test",
            "test suite",
        ],
    },
    CapabilityKeywords {
        capability: Capability::DataAnalysis,
        keywords: &[
            "analyze",
            "analyse",
            "analysis",
            "data",
            "statistics",
            "metrics",
            "chart",
            "plot",
            "trend",
            "insight",
            "calculate",
        ],
    },
    CapabilityKeywords {
        capability: Capability::ContentCreation,
        keywords: &[
            "write",
            "draft",
            "compose",
            "article",
            "blog",
            "essay",
            "report",
            "description",
            "story",
            "summary",
            "summarize",
            "document",
        ],
    },
    CapabilityKeywords {
        capability: Capability::Communication,
        keywords: &["email", "e-mail", "send", "message", "notify", "slack", "post to", "share with", "reply"],
    },
    CapabilityKeywords {
        capability: Capability::Database,
        keywords: &["database", "sql", "query", "table", "record", "postgres", "mysql", "sqlite"],
    },
    CapabilityKeywords {
        capability: Capability::VersionControl,
        keywords: &[
            "github",
            "gitlab",
            "git repo",
            "commit",
            "pull request",
            "merge",
            "repository",
            "branch",
        ],
    },
    CapabilityKeywords {
        capability: Capability::ImageProcessing,
        keywords: &["image", "photo", "picture", "resize", "crop", "thumbnail", "png", "jpeg", "jpg"],
    },
];

/// Whole words counted as sequencing steps (commas are counted separately).
pub const SEQUENCING_WORDS: &[&str] = &["and", "then"];

/// Phrases suggesting independent subtasks.
pub const PARALLEL_INDICATORS: &[&str] = &[
    "simultaneously",
    "in parallel",
    "parallel",
    "concurrently",
    "at the same time",
    "multiple",
    "different",
    "both",
    "each",
    "independent",
];

/// Phrases suggesting ordered subtasks.
pub const SEQUENTIAL_INDICATORS: &[&str] = &[
    "then",
    "after",
    "before",
    "step by step",
    "sequential",
    "sequentially",
    "first",
    "next",
    "finally",
    "once",
];

/// Substrings indicating iterative refinement.
pub const ITERATION_KEYWORDS: &[&str] = &[
    "improve",
    "improving",
    "refine",
    "iterate",
    "perfect",
    "enhance",
    "quality",
    "review",
    "feedback",
    "revise",
    "polish",
    "optimize",
    "until",
];

/// Substrings indicating a human must approve or confirm.
pub const HUMAN_INPUT_KEYWORDS: &[&str] = &[
    "approve",
    "approval",
    "confirm",
    "verify",
    "permission",
    "human",
    "manual",
    "interactive",
    "sign off",
    "sign-off",
];

/// Vague language lowers confidence.
pub const VAGUE_INDICATORS: &[&str] = &["something", "somehow", "maybe", "perhaps", "might"];

/// Concrete action verbs raise confidence.
pub const ACTION_VERBS: &[&str] = &["create", "write", "delete", "search", "analyze"];

/// Returns true if any keyword occurs as a substring of `text`.
///
/// `text` must already be lower-case.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Counts whole-word occurrences of `phrase` in `text`.
///
/// A match counts only when the characters on either side are not
/// alphanumeric, so "then" is not found inside "authenticate".
pub fn count_phrase(text: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    text.match_indices(phrase)
        .filter(|(start, _)| {
            let end = start + phrase.len();
            let before_ok = text[..*start].chars().next_back().is_none_or(|c| !c.is_alphanumeric());
            let after_ok = text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
            before_ok && after_ok
        })
        .count()
}

/// Sums whole-word occurrences of every phrase in `phrases`.
pub fn count_phrases(text: &str, phrases: &[&str]) -> usize {
    phrases.iter().map(|p| count_phrase(text, p)).sum()
}

/// Classifies a tool by its name and description using the capability table.
///
/// Returns the first category (in table order) with a matching keyword. Tool
/// names like `read_file` are split on underscores and dashes first.
pub fn categorize_tool(name: &str, description: Option<&str>) -> Option<Capability> {
    let mut text = name.to_lowercase().replace(['_', '-'], " ");
    if let Some(description) = description {
        text.push(' ');
        text.push_str(&description.to_lowercase());
    }
    CAPABILITY_KEYWORDS.iter().find(|entry| contains_any(&text, entry.keywords)).map(|entry| entry.capability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_levels_are_ascending() {
        let levels: Vec<TaskComplexity> = COMPLEXITY_KEYWORDS.iter().map(|k| k.level).collect();
        assert_eq!(levels, TaskComplexity::ALL.to_vec());
    }

    #[test]
    fn test_every_capability_has_keywords() {
        for capability in Capability::ALL {
            let entry = CAPABILITY_KEYWORDS.iter().find(|e| e.capability == capability);
            assert!(entry.is_some_and(|e| !e.keywords.is_empty()), "missing keywords for {}", capability);
        }
    }

    #[test]
    fn test_count_phrase_respects_word_boundaries() {
        assert_eq!(count_phrase("authenticate the user and then log in", "then"), 1);
        assert_eq!(count_phrase("sand and band", "and"), 1);
        assert_eq!(count_phrase("and", "and"), 1);
        assert_eq!(count_phrase("do it step by step, then stop", "step by step"), 1);
        assert_eq!(count_phrase("anything", ""), 0);
    }

    #[test]
    fn test_contains_any_is_substring_based() {
        assert!(contains_any("list the files", &["file"]));
        assert!(!contains_any("list the folders", &["file"]));
    }

    #[test]
    fn test_script_phrases_skip_common_words() {
        let entry = CAPABILITY_KEYWORDS.iter().find(|e| e.capability == Capability::CodeExecution).unwrap();
        for text in ["a project description", "cancel my subscription", "the meeting transcript", "a prescription"] {
            assert!(!contains_any(text, entry.keywords), "'{}' matched code execution", text);
        }
        assert!(contains_any("write a shell script to rotate logs", entry.keywords));
    }

    #[test]
    fn test_categorize_tool() {
        assert_eq!(categorize_tool("read_file", None), Some(Capability::FileManagement));
        assert_eq!(categorize_tool("browser-navigate", None), Some(Capability::WebAutomation));
        assert_eq!(
            categorize_tool("run", Some("Execute a Python script")),
            Some(Capability::CodeExecution)
        );
        assert_eq!(categorize_tool("noop", None), None);
    }
}
