//! Cookie-token access gate for the QA library API.
//!
//! A signed `hxd_token` cookie is decoded, its `jti` resolved against the
//! qalib info cache, and the resolved [`services::qalib::QalibInfo`] handed to
//! protected handlers.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
