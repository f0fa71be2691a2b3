//! HTTP client and form controller for the vendora dashboard API.
//!
//! [`api::DashboardApi`] wraps the five supplier actions of the
//! backend's `/api/dashboard` endpoint, and
//! [`controller::SupplierFormController`] layers form state, draft
//! validation, and fetch-then-refresh synchronization on top of it.

pub mod api;
pub mod config;
pub mod controller;
