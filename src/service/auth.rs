use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::auth::password;
use crate::error::AppError;
use crate::models::{OrgPlan, OrgSettings, Organization, User, UserProfile, UserRole};
use crate::store::EntityStore;

pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: Option<String>,
    pub organization_code: Option<String>,
}

/// Authenticate by email and password, touch the user's last login, and
/// return the organization-enriched profile.
pub async fn login(store: &EntityStore, email: &str, pass: &str) -> Result<UserProfile, AppError> {
    let mut cols = store.write().await;

    let mut user = cols
        .find_user_by_email(email)
        .cloned()
        .ok_or(AppError::UserNotFound)?;

    let valid = password::verify(pass, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    let organization = cols
        .find_org_by_id(&user.organization_id)
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("Missing organization {}", user.organization_id)))?;

    let now = Utc::now();
    if let Some(u) = cols.find_user_by_id_mut(&user.id) {
        u.last_login = Some(now);
    }
    store.persist_users(&cols).await?;
    user.last_login = Some(now);

    Ok(UserProfile::new(&user, organization))
}

/// Create a user, resolving the organization by code (exact id or domain
/// substring) or bootstrapping a fresh starter organization. The first user
/// of an organization becomes its admin.
pub async fn signup(store: &EntityStore, data: SignupData) -> Result<UserProfile, AppError> {
    let mut cols = store.write().await;

    if cols.find_user_by_email(&data.email).is_some() {
        return Err(AppError::EmailAlreadyExists);
    }

    let code = data.organization_code.unwrap_or_default();
    let organization = match cols.resolve_org_by_code(&code) {
        Some(org) => org.clone(),
        None => {
            let org = Organization {
                id: Uuid::now_v7().to_string(),
                name: format!("{}'s Organization", data.name),
                domain: if code.is_empty() {
                    "custom.com".to_string()
                } else {
                    code.clone()
                },
                plan: OrgPlan::Starter,
                created_at: Utc::now(),
                settings: OrgSettings {
                    allow_user_registration: true,
                    max_users_per_org: 10,
                    features_enabled: ["basic_prompts"].iter().map(|s| s.to_string()).collect(),
                },
            };
            cols.organizations.push(org.clone());
            store.persist_organizations(&cols).await?;
            org
        }
    };

    let members = cols.count_users_in_org(&organization.id);
    if members > 0 && !organization.settings.allow_user_registration {
        return Err(AppError::Forbidden(
            "Registration is disabled for this organization".to_string(),
        ));
    }
    if members >= organization.settings.max_users_per_org as usize {
        return Err(AppError::Forbidden(
            "Organization has reached its member limit".to_string(),
        ));
    }

    let role = if members == 0 {
        UserRole::Admin
    } else {
        UserRole::User
    };

    let password_hash = password::hash(&data.password).map_err(AppError::Internal)?;

    let mut preferences = BTreeMap::new();
    preferences.insert("theme".to_string(), json!("dark"));
    preferences.insert("notifications".to_string(), json!(true));

    let department = data
        .department
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "General".to_string());

    let user = User {
        id: Uuid::now_v7().to_string(),
        name: data.name,
        email: data.email,
        password_hash,
        role,
        department,
        organization_id: organization.id.clone(),
        created_at: Utc::now(),
        last_login: Some(Utc::now()),
        preferences,
    };

    cols.users.push(user.clone());
    store.persist_users(&cols).await?;

    Ok(UserProfile::new(&user, organization))
}
