// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use clinica_auth_server::{
    api::router,
    auth::{password, UserRole},
    config::{self, AuthConfig},
    models::NewUser,
    state::AppState,
    store::InMemoryUserStore,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    if env::var(config::LOG_FORMAT_ENV).as_deref() == Ok("json") {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Insert the bootstrap admin account when both seed variables are set.
/// Registration is outside this service; without seeding, an empty store
/// means nobody can log in.
async fn seed_admin(store: &InMemoryUserStore) {
    let (Ok(email), Ok(seed_password)) = (
        env::var(config::SEED_ADMIN_EMAIL_ENV),
        env::var(config::SEED_ADMIN_PASSWORD_ENV),
    ) else {
        tracing::warn!("no seed admin configured; the user store starts empty");
        return;
    };

    let password_hash = password::hash_password(&seed_password).expect("failed to hash seed password");
    let user = store
        .insert_user(NewUser {
            email,
            name: "System Administrator".to_string(),
            password_hash,
            role: UserRole::Admin,
            is_active: true,
            is_superuser: true,
        })
        .await;
    tracing::info!(email = %user.email, user_id = user.id, "seeded bootstrap admin");
}

#[tokio::main]
async fn main() {
    init_tracing();

    let auth_config = AuthConfig::from_env();
    let store = InMemoryUserStore::new();
    seed_admin(&store).await;

    let state = AppState::new(Arc::new(store), auth_config);
    let app = router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(%addr, "Clinica auth server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
