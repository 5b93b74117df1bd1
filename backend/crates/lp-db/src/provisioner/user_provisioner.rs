//! Find-or-create of local users for externally authenticated identities.
//!
//! Each call runs in its own `BEGIN IMMEDIATE` transaction. SQLite takes the
//! write lock before the lookup, so two logins for the same unseen username
//! serialize: the second one waits (up to the busy timeout) and then finds the
//! row the first one committed. The `UNIQUE` constraint on `username_key`
//! remains the backstop; a writer that still collides gets `ProvisionFailed`
//! and the caller reports a failed login. Nothing is retried here.

use crate::{ProvisionError, ProvisionResult, UserGroupRepository, UserRepository};

use lp_core::User;

use log::{debug, info, warn};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Statement every provisioning transaction must be opened with.
pub const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

/// A user returned by provisioning, and whether this call created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedUser {
    pub user: User,
    pub created: bool,
}

#[derive(Clone)]
pub struct UserProvisioner {
    pool: SqlitePool,
}

impl UserProvisioner {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the local user for `username`, creating it on first sight.
    pub async fn get_or_create_user(&self, username: &str) -> ProvisionResult<User> {
        let mut tx = self
            .pool
            .begin_with(BEGIN_IMMEDIATE)
            .await
            .map_err(|e| ProvisionError::failed(username, e))?;

        // Dropping `tx` on any early return rolls it back
        let provisioned = Self::provision_in(&mut tx, username).await?;

        tx.commit().await.map_err(|e| {
            let err = ProvisionError::failed(username, e);
            if err.is_conflict() {
                warn!("Lost provisioning race for '{}': {}", username, err);
            }
            err
        })?;

        if provisioned.created {
            info!(
                "Provisioned user '{}' (id={}, group={})",
                provisioned.user.username, provisioned.user.id, provisioned.user.group_id
            );
        } else {
            debug!(
                "Found existing user '{}' (id={})",
                provisioned.user.username, provisioned.user.id
            );
        }

        Ok(provisioned.user)
    }

    /// Lookup, group resolution and insert against a caller-owned
    /// transaction. The caller commits or drops `tx`.
    ///
    /// Open `tx` with `BEGIN IMMEDIATE` (see [`BEGIN_IMMEDIATE`]). A deferred
    /// transaction only takes the write lock at the insert, so concurrent
    /// first logins collide on the unique key instead of queueing.
    pub async fn provision_in(
        tx: &mut Transaction<'_, Sqlite>,
        username: &str,
    ) -> ProvisionResult<ProvisionedUser> {
        if let Some(user) = UserRepository::find_by_username(&mut **tx, username)
            .await
            .map_err(|e| ProvisionError::failed(username, e))?
        {
            return Ok(ProvisionedUser {
                user,
                created: false,
            });
        }

        let group = UserGroupRepository::find_provisioning_group(&mut **tx)
            .await
            .map_err(|e| ProvisionError::failed(username, e))?
            .ok_or_else(|| ProvisionError::no_group(username))?;

        if !group.is_default {
            debug!(
                "No default user group, assigning '{}' to group {} ('{}')",
                username, group.id, group.name
            );
        }

        let user = UserRepository::create(&mut **tx, username, group.id)
            .await
            .map_err(|e| {
                let err = ProvisionError::failed(username, e);
                if err.is_conflict() {
                    warn!("Lost provisioning race for '{}': {}", username, err);
                }
                err
            })?;

        Ok(ProvisionedUser {
            user,
            created: true,
        })
    }
}
