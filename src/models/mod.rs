pub mod organization;
pub mod prompt;
pub mod user;

pub use organization::{OrgPlan, OrgSettings, Organization};
pub use prompt::{Prompt, PromptWithAuthor};
pub use user::{User, UserProfile, UserRole};
