use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::Utc;

use promptvault::error::AppError;
use promptvault::models::{OrgPlan, OrgSettings, Organization, User, UserRole};
use promptvault::service::auth::{self, SignupData};
use promptvault::service::prompts::{self, NewPrompt, PromptPatch};
use promptvault::storage::{MemoryStorage, Storage};
use promptvault::store::{EntityStore, PROMPTS_KEY, USERS_KEY};

async fn empty_store() -> (Arc<MemoryStorage>, EntityStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = EntityStore::open(storage.clone())
        .await
        .expect("open failed");
    (storage, store)
}

fn org_with_settings(id: &str, allow_registration: bool, max_users: u32) -> Organization {
    Organization {
        id: id.to_string(),
        name: format!("{id} org"),
        domain: format!("{id}.com"),
        plan: OrgPlan::Starter,
        created_at: Utc::now(),
        settings: OrgSettings {
            allow_user_registration: allow_registration,
            max_users_per_org: max_users,
            features_enabled: BTreeSet::new(),
        },
    }
}

fn member(email: &str, organization_id: &str) -> User {
    User {
        id: format!("user-{email}"),
        name: "Existing Member".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: UserRole::User,
        department: "General".to_string(),
        organization_id: organization_id.to_string(),
        created_at: Utc::now(),
        last_login: None,
        preferences: BTreeMap::new(),
    }
}

fn signup_data(email: &str, organization_code: &str) -> SignupData {
    SignupData {
        name: "Newcomer".to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        department: None,
        organization_code: Some(organization_code.to_string()),
    }
}

fn new_prompt(title: &str) -> NewPrompt {
    NewPrompt {
        title: title.to_string(),
        description: "description".to_string(),
        content: "content".to_string(),
        is_public: false,
        tags: BTreeSet::new(),
    }
}

#[tokio::test]
async fn closed_org_rejects_new_members() {
    let (_, store) = empty_store().await;
    {
        let mut cols = store.write().await;
        cols.organizations.push(org_with_settings("closed", false, 10));
        cols.users.push(member("first@closed.com", "closed"));
    }

    let err = auth::signup(&store, signup_data("second@closed.com", "closed"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let cols = store.read().await;
    assert_eq!(cols.users.len(), 1);
}

#[tokio::test]
async fn closed_org_still_admits_its_first_member() {
    let (_, store) = empty_store().await;
    {
        let mut cols = store.write().await;
        cols.organizations.push(org_with_settings("closed", false, 10));
    }

    let profile = auth::signup(&store, signup_data("founder@closed.com", "closed"))
        .await
        .expect("first member should bootstrap the org");
    assert_eq!(profile.role, UserRole::Admin);
    assert_eq!(profile.organization_id, "closed");
}

#[tokio::test]
async fn full_org_rejects_new_members() {
    let (_, store) = empty_store().await;
    {
        let mut cols = store.write().await;
        cols.organizations.push(org_with_settings("tiny", true, 1));
        cols.users.push(member("only@tiny.com", "tiny"));
    }

    let err = auth::signup(&store, signup_data("overflow@tiny.com", "tiny"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let cols = store.read().await;
    assert_eq!(cols.users.len(), 1);
}

#[tokio::test]
async fn corrupt_collection_loads_as_empty() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .save(USERS_KEY, "{ this is not json ]")
        .await
        .unwrap();
    storage.save(PROMPTS_KEY, "[]").await.unwrap();

    let store = EntityStore::open(storage).await.expect("open failed");
    let cols = store.read().await;
    assert!(cols.users.is_empty());
    assert!(cols.prompts.is_empty());
}

#[tokio::test]
async fn mutations_are_written_through_to_storage() {
    let (storage, store) = empty_store().await;

    let created = prompts::create(&store, new_prompt("Persisted"), "user-1", "org-1")
        .await
        .expect("create failed");

    // a second store over the same storage sees the write
    let reopened = EntityStore::open(storage).await.expect("reopen failed");
    let cols = reopened.read().await;
    assert_eq!(cols.prompts.len(), 1);
    assert_eq!(cols.prompts[0].id, created.id);
    assert_eq!(cols.prompts[0].title, "Persisted");
}

#[tokio::test]
async fn update_persists_the_new_version() {
    let (storage, store) = empty_store().await;
    let created = prompts::create(&store, new_prompt("Original"), "user-1", "org-1")
        .await
        .unwrap();

    let patch = PromptPatch {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    prompts::update(&store, &created.id, patch, "user-1")
        .await
        .unwrap();

    let reopened = EntityStore::open(storage).await.unwrap();
    let cols = reopened.read().await;
    assert_eq!(cols.prompts[0].title, "Renamed");
    assert_eq!(cols.prompts[0].version, 2);
}

#[tokio::test]
async fn rejected_update_leaves_storage_untouched() {
    let (storage, store) = empty_store().await;
    let created = prompts::create(&store, new_prompt("Guarded"), "owner", "org-1")
        .await
        .unwrap();

    let patch = PromptPatch {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let err = prompts::update(&store, &created.id, patch, "intruder")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied));

    let reopened = EntityStore::open(storage).await.unwrap();
    let cols = reopened.read().await;
    assert_eq!(cols.prompts[0].title, "Guarded");
    assert_eq!(cols.prompts[0].version, 1);
}

#[tokio::test]
async fn delete_persists_the_removal() {
    let (storage, store) = empty_store().await;
    let created = prompts::create(&store, new_prompt("Ephemeral"), "user-1", "org-1")
        .await
        .unwrap();

    prompts::delete(&store, &created.id, "user-1").await.unwrap();

    let reopened = EntityStore::open(storage).await.unwrap();
    assert!(reopened.read().await.prompts.is_empty());
}

#[tokio::test]
async fn usage_increment_ignores_unknown_ids() {
    let (_, store) = empty_store().await;
    prompts::increment_usage(&store, "missing").await.unwrap();
    assert!(store.read().await.prompts.is_empty());
}

#[tokio::test]
async fn usage_increments_accumulate() {
    let (_, store) = empty_store().await;
    let created = prompts::create(&store, new_prompt("Counted"), "user-1", "org-1")
        .await
        .unwrap();

    for _ in 0..4 {
        prompts::increment_usage(&store, &created.id).await.unwrap();
    }

    let cols = store.read().await;
    assert_eq!(cols.prompts[0].usage_count, 4);
    assert!(cols.prompts[0].last_used.is_some());
}
