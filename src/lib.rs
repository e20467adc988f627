//! folio: a personal portfolio single-page application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-rendered Leptos client for a portfolio REST backend. Public pages
//! (home, about, projects, skills, experience, education, contact) read from
//! the backend anonymously; the admin area (login, dashboard) drives project
//! CRUD through a bearer-token session.
//!
//! Browser-only code (fetch, localStorage, timers) is gated behind the `csr`
//! cargo feature so the pure logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
