//! Rule-based text analysis and template assembly. No model calls: every
//! classification is a deterministic keyword test, and randomness is
//! confined to phrase selection in the email rewriter.

pub mod analysis;
pub mod brd;
pub mod classify;
pub mod email;
pub mod prompt;

pub use analysis::{BusinessAnalysis, Complexity, analyze_business_content};
pub use brd::generate_brd;
pub use classify::{PromptCategory, classify_prompt};
pub use email::{EmailSignals, RewrittenEmail, analyze_email, rewrite_email};
pub use prompt::{EnhancedPrompt, enhance_prompt};
