//! First-start provisioning.

use anyhow::Context;

use crate::config::BootstrapAdmin;
use crate::state::AppState;

/// Make sure at least one admin can log in.
pub async fn ensure_admin(
    state: &AppState,
    admin: &BootstrapAdmin,
    production: bool,
) -> anyhow::Result<()> {
    let created = state
        .auth
        .ensure_admin(&admin.username, &admin.password)
        .await
        .context("failed to provision bootstrap admin")?;

    if created.is_some() && admin.uses_default_password() {
        if production {
            tracing::error!(
                username = %admin.username,
                "SECURITY: Bootstrap admin created with the default password in production! Set ADMIN_PASSWORD and change it immediately."
            );
        } else {
            tracing::warn!(
                username = %admin.username,
                "Bootstrap admin created with the default password. Set ADMIN_PASSWORD for production use."
            );
        }
    }

    Ok(())
}
