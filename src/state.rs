// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::store::UserStore;

/// Shared application state: the credential store handle and the immutable
/// auth configuration. Neither is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, auth: AuthConfig) -> Self {
        Self {
            store,
            auth: Arc::new(auth),
        }
    }
}
