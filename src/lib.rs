// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Clinica Auth Server - Authentication core for the clinic management API
//!
//! This crate provides stateless JWT authentication and role-based
//! authorization for the clinic backend. Credential records live in an
//! external store accessed read-only through the [`store::UserStore`] trait.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Authentication and authorization (Argon2 + JWT)
//! - `store` - Credential store trait and in-memory implementation

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod state;
pub mod store;
