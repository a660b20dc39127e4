//! Prompt category detection. Rule order matters: code-generation keywords
//! are tested before debugging keywords, first match wins.

pub const CODE_KEYWORDS: &[&str] = &[
    "code",
    "function",
    "component",
    "api",
    "class",
    "method",
    "algorithm",
    "script",
    "program",
    "create",
    "build",
    "develop",
];

pub const DEBUG_KEYWORDS: &[&str] = &[
    "debug",
    "fix",
    "error",
    "bug",
    "issue",
    "problem",
    "troubleshoot",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCategory {
    CodeGeneration,
    Debugging,
    Generic,
}

pub fn classify_prompt(title: &str, content: &str) -> PromptCategory {
    let title = title.to_lowercase();
    let content = content.to_lowercase();

    if contains_any(&title, &content, CODE_KEYWORDS) {
        PromptCategory::CodeGeneration
    } else if contains_any(&title, &content, DEBUG_KEYWORDS) {
        PromptCategory::Debugging
    } else {
        PromptCategory::Generic
    }
}

fn contains_any(title: &str, content: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|k| title.contains(k) || content.contains(k))
}
