//! Demo data installed on first start against an empty store.

use std::io;

use chrono::{Duration, Utc};

use crate::models::{OrgPlan, OrgSettings, Organization, Prompt};
use crate::store::EntityStore;

const DEMO_ORG_ID: &str = "aexonic-tech";
const DEMO_USER_ID: &str = "demo-user";

/// Seed the demo organization and sample prompts if no organization exists
/// yet. Idempotent across restarts.
pub async fn ensure_demo_data(store: &EntityStore) -> io::Result<()> {
    let mut cols = store.write().await;

    if !cols.organizations.is_empty() {
        return Ok(());
    }

    tracing::info!("Seeding demo organization and sample prompts");

    cols.organizations.push(Organization {
        id: DEMO_ORG_ID.to_string(),
        name: "Aexonic Technologies Pvt. Ltd".to_string(),
        domain: "aexonic.com".to_string(),
        plan: OrgPlan::Enterprise,
        created_at: Utc::now(),
        settings: OrgSettings {
            allow_user_registration: true,
            max_users_per_org: 100,
            features_enabled: ["ai_improvement", "collaboration", "analytics"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
    });
    store.persist_organizations(&cols).await?;

    if cols.prompts.is_empty() {
        let now = Utc::now();
        cols.prompts.extend([
            sample_prompt(
                "sample-1",
                "Create React Component",
                "Need to create a reusable React component for user profiles",
                "Create a React component that displays user information like name, email, and \
                 avatar. Make it reusable.",
                now - Duration::days(2),
                5,
                true,
                &["react", "component", "ui"],
            ),
            sample_prompt(
                "sample-2",
                "Fix Authentication Bug",
                "Users are getting logged out randomly during their session",
                "Help me debug this issue where users get logged out unexpectedly. The session \
                 seems to expire even though the token is still valid.",
                now - Duration::days(1),
                2,
                true,
                &["debug", "authentication", "session"],
            ),
            sample_prompt(
                "sample-3",
                "Database Query Optimization",
                "Need to optimize slow-running database queries for better performance",
                "Optimize this SQL query that takes too long to execute. It joins multiple \
                 tables and has complex filtering.",
                now - Duration::hours(3),
                1,
                false,
                &["database", "sql", "optimization"],
            ),
            sample_prompt(
                "sample-4",
                "API Documentation",
                "Create comprehensive documentation for our REST API endpoints",
                "Write documentation for our user management API. Include endpoints, \
                 parameters, and examples.",
                now - Duration::minutes(30),
                0,
                true,
                &["documentation", "api", "rest"],
            ),
        ]);
        store.persist_prompts(&cols).await?;
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn sample_prompt(
    id: &str,
    title: &str,
    description: &str,
    content: &str,
    created_at: chrono::DateTime<Utc>,
    usage_count: u64,
    is_public: bool,
    tags: &[&str],
) -> Prompt {
    Prompt {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        created_by: DEMO_USER_ID.to_string(),
        organization_id: DEMO_ORG_ID.to_string(),
        created_at,
        updated_at: created_at,
        usage_count,
        is_public,
        tags: tags.iter().map(|s| s.to_string()).collect(),
        version: 1,
        improved_by_ai: false,
        last_used: None,
        ai_enhance_date: None,
    }
}
