use crate::error::{HostError, Result as HostErrorResult};

use lp_auth::{AuthOrchestrator, HttpCredentialAuthority, PASSWORD_HEADER, USERNAME_HEADER};
use lp_config::AuthorityConfig;
use lp_core::{AuthHeaders, AuthResult, UserGroup};
use lp_db::{UserGroupRepository, UserProvisioner};

use std::sync::Arc;
use std::time::Duration;

use log::info;
use serde_json::Value;
use sqlx::SqlitePool;

/// Wires the configured HTTP authority and the store into an orchestrator.
pub fn build_orchestrator(
    authority: &AuthorityConfig,
    pool: SqlitePool,
) -> HostErrorResult<AuthOrchestrator> {
    let verify_url = authority
        .verify_url()
        .ok_or_else(HostError::authority_not_configured)?;
    let client =
        HttpCredentialAuthority::new(verify_url, Duration::from_secs(authority.timeout_secs))?;

    Ok(AuthOrchestrator::new(
        Arc::new(client),
        UserProvisioner::new(pool),
    ))
}

pub fn login_headers(username: &str, password: &str) -> AuthHeaders {
    AuthHeaders::from([
        (USERNAME_HEADER.to_string(), Value::from(username)),
        (PASSWORD_HEADER.to_string(), Value::from(password)),
    ])
}

pub async fn login(orchestrator: &AuthOrchestrator, username: &str, password: &str) -> AuthResult {
    let result = orchestrator
        .authenticate(&login_headers(username, password))
        .await;
    orchestrator.post_authenticate(&result);
    result
}

pub async fn add_group(
    pool: &SqlitePool,
    name: &str,
    is_default: bool,
) -> HostErrorResult<UserGroup> {
    let group = UserGroupRepository::create(pool, name, is_default).await?;
    info!(
        "Created group '{}' (id={}, default={})",
        group.name, group.id, group.is_default
    );
    Ok(group)
}

pub async fn list_groups(pool: &SqlitePool) -> HostErrorResult<Vec<UserGroup>> {
    Ok(UserGroupRepository::find_all(pool).await?)
}

pub fn render<T: serde::Serialize>(value: &T, pretty: bool) -> HostErrorResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
