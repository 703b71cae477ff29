//! Endless Chat: desktop and web front-end for the Endless assistant service.
//!
//! [`client`] speaks the backend's JSON API, [`controller`] owns per-page UI
//! state, and [`ui`] renders it with Dioxus.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod types;
pub mod ui;
