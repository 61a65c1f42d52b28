// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Service information and liveness endpoints. Unauthenticated.

use axum::Json;
use serde::Serialize;

/// Root acknowledgement body.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
}

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `GET /` - service identification.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Clinica Auth Server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// `GET /health` - liveness probe. Always 200 while the process runs; does
/// not check the credential store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
