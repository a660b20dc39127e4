use rand::SeedableRng;
use rand::rngs::StdRng;

use promptvault::enhance::analysis::{Complexity, analyze_business_content};
use promptvault::enhance::classify::{PromptCategory, classify_prompt};
use promptvault::enhance::email::{analyze_email, rewrite_email};
use promptvault::enhance::{enhance_prompt, generate_brd};

// ── Classification ──────────────────────────────────────────────────────

#[test]
fn code_keywords_win_over_debug_keywords() {
    // "fix" is a debug keyword but "function" is tested first
    let category = classify_prompt("Fix this function", "the function returns the wrong value");
    assert_eq!(category, PromptCategory::CodeGeneration);
}

#[test]
fn debug_keywords_classify_as_debugging() {
    let category = classify_prompt("Login keeps failing", "troubleshoot why sessions expire");
    assert_eq!(category, PromptCategory::Debugging);
}

#[test]
fn unrelated_text_is_generic() {
    let category = classify_prompt("Meeting agenda", "summarize last week's planning notes");
    assert_eq!(category, PromptCategory::Generic);
}

#[test]
fn classification_checks_title_and_content() {
    assert_eq!(
        classify_prompt("Algorithm question", "explain it simply"),
        PromptCategory::CodeGeneration
    );
    assert_eq!(
        classify_prompt("Question", "there is a bug somewhere"),
        PromptCategory::Debugging
    );
}

// ── Prompt enhancement ──────────────────────────────────────────────────

#[test]
fn enhanced_titles_carry_the_category_prefix() {
    let code = enhance_prompt("Build a parser", "desc", "build a tokenizer");
    assert_eq!(code.title, "Code Generation Expert: Build a parser");
    assert!(code.improved_by_ai);

    let debug = enhance_prompt("Crash on startup", "desc", "the app throws an error on boot");
    assert_eq!(debug.title, "Debug & Troubleshooting Expert: Crash on startup");

    let generic = enhance_prompt("Travel plan", "desc", "plan a weekend trip");
    assert_eq!(generic.title, "Enhanced: Travel plan");
}

#[test]
fn enhanced_content_embeds_the_original() {
    let enhanced = enhance_prompt("Summarize notes", "quarterly review", "summarize the notes");
    assert!(enhanced.content.contains("quarterly review"));
    assert!(enhanced.content.contains("summarize the notes"));
    assert!(enhanced.description.starts_with("quarterly review"));
}

// ── Business analysis ───────────────────────────────────────────────────

#[test]
fn project_type_uses_first_matching_rule() {
    // "mobile" rule precedes "web" rule
    let analysis = analyze_business_content("a mobile website for field staff");
    assert_eq!(analysis.project_type, "Mobile Application");

    let analysis = analyze_business_content("a customer portal for invoices");
    assert_eq!(analysis.project_type, "Web Application");

    let analysis = analyze_business_content("track employee vacation days");
    assert_eq!(analysis.project_type, "Business Application");
}

#[test]
fn complexity_is_scored_by_indicator_count() {
    let analysis = analyze_business_content("a simple note-taking tool");
    assert_eq!(analysis.complexity, Complexity::Low);

    let analysis = analyze_business_content(
        "needs integration with an api, a database, security, authentication and reporting",
    );
    assert_eq!(analysis.complexity, Complexity::Medium);

    let analysis = analyze_business_content(
        "integration api database security authentication authorization workflow approval \
         notification reporting analytics dashboard",
    );
    assert_eq!(analysis.complexity, Complexity::High);
}

#[test]
fn stakeholders_collect_all_matches() {
    let analysis =
        analyze_business_content("admins manage accounts while customers browse the catalog");
    assert!(analysis.stakeholders.contains(&"System Administrator"));
    assert!(analysis.stakeholders.contains(&"End Users"));
}

#[test]
fn stakeholders_fall_back_when_nothing_matches() {
    let analysis = analyze_business_content("automate the nightly batch");
    assert_eq!(
        analysis.stakeholders,
        vec!["Business Users", "System Administrator", "Project Manager"]
    );
}

#[test]
fn integrations_may_be_empty() {
    let analysis = analyze_business_content("a standalone note-taking tool");
    assert!(analysis.integrations.is_empty());

    let analysis = analyze_business_content("send receipts by email after each stripe payment");
    assert!(analysis.integrations.contains(&"Email Services"));
    assert!(analysis.integrations.contains(&"Payment Gateways"));
}

#[test]
fn urgency_defaults_to_normal() {
    assert_eq!(
        analyze_business_content("we need this asap, it is critical").urgency,
        "High"
    );
    assert_eq!(
        analyze_business_content("this is an important priority").urgency,
        "Medium"
    );
    assert_eq!(analyze_business_content("whenever convenient").urgency, "Normal");
}

#[test]
fn scope_follows_word_count() {
    assert_eq!(analyze_business_content("short request").scope, "Small");

    let medium = "word ".repeat(150);
    assert_eq!(analyze_business_content(&medium).scope, "Medium");

    let large = "word ".repeat(250);
    assert_eq!(analyze_business_content(&large).scope, "Large");
}

// ── BRD generation ──────────────────────────────────────────────────────

#[test]
fn brd_includes_analysis_driven_sections() {
    let content = "Build a customer portal website with email notifications";
    let analysis = analyze_business_content(content);
    let brd = generate_brd(content, &analysis);

    assert!(brd.contains("## Document Version"));
    assert!(brd.contains("## Stakeholders / Actors"));
    assert!(brd.contains("## Glossary / Definitions"));
    assert!(brd.contains("**Email Services:**"));
    assert!(brd.contains("Customer Experience"));
}

#[test]
fn brd_title_truncates_long_first_sentences() {
    let content = "This is an extremely long opening sentence that keeps going on and on well \
                   past any reasonable heading length for a document title";
    let analysis = analyze_business_content(content);
    let brd = generate_brd(content, &analysis);

    let heading = brd.lines().next().unwrap();
    assert!(heading.contains("..."));
}

#[test]
fn brd_pads_functional_areas_to_three_sections() {
    let content = "users need login and password reset";
    let analysis = analyze_business_content(content);
    assert_eq!(analysis.functional_areas, vec!["User Authentication"]);

    let brd = generate_brd(content, &analysis);
    assert!(brd.contains("### User Authentication:"));
    assert!(brd.contains("### User Management:"));
    assert!(brd.contains("### Data Processing:"));
}

// ── Email rewriting ─────────────────────────────────────────────────────

#[test]
fn email_signals_are_detected_independently() {
    let signals = analyze_email("Urgent: can you schedule a call? Thanks!");
    assert!(signals.urgent);
    assert!(signals.request);
    assert!(signals.meeting);
    assert!(signals.thank_you);
    assert!(!signals.follow_up);
    assert!(!signals.formal);
}

#[test]
fn formality_comes_from_keywords_or_length() {
    assert!(analyze_email("Dear team, the report is attached.").formal);

    let long = "x".repeat(401);
    assert!(analyze_email(&long).formal);

    assert!(!analyze_email("quick note about lunch").formal);
}

#[test]
fn rewrite_is_deterministic_for_a_seeded_rng() {
    let content = "Can you please review the draft before Friday?";

    let a = rewrite_email(content, &mut StdRng::seed_from_u64(42));
    let b = rewrite_email(content, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.subject, b.subject);
    assert_eq!(a.body, b.body);
}

#[test]
fn urgent_subject_wins_over_other_signals() {
    let mut rng = StdRng::seed_from_u64(7);
    let email = rewrite_email(
        "This is urgent. Can we schedule a meeting to follow up? Thanks.",
        &mut rng,
    );

    let urgent_subjects = [
        "Time-Sensitive: Action Needed",
        "Urgent: Your Attention Required",
        "Quick Response Needed",
    ];
    assert!(urgent_subjects.contains(&email.subject.as_str()));
}

#[test]
fn rewritten_body_keeps_the_original_text() {
    let mut rng = StdRng::seed_from_u64(1);
    let email = rewrite_email("  The demo went well and the client is happy.  ", &mut rng);

    assert!(email.body.contains("The demo went well and the client is happy."));
    // greeting first, closing last
    assert!(!email.body.starts_with(' '));
    assert!(email.body.ends_with(','));
}
