//! Ownership and visibility predicates applied by the prompt service.

use crate::models::Prompt;

/// Only the creator of a prompt may update or delete it.
pub fn is_owner(prompt: &Prompt, user_id: &str) -> bool {
    prompt.created_by == user_id
}

/// A non-owner may read a prompt only when it is public and belongs to the
/// reader's organization.
pub fn is_visible(prompt: &Prompt, user_id: &str, organization_id: &str) -> bool {
    prompt.organization_id == organization_id && (prompt.is_public || is_owner(prompt, user_id))
}
