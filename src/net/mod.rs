//! Networking modules for the portfolio REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the single request chokepoint, `error` classifies failures
//! and plans their user-facing side effects, `api` wraps the endpoint
//! surface, and `types` defines the wire DTOs.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
