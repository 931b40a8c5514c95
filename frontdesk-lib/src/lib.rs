//! Front-desk controller API client library
//!
//! Async client for the hotel front-desk check-in backend: REST resources
//! (hotels and desks, staff users, booking lookup, check-in credentials),
//! the login flow with lockout classification, the server-sent credential
//! stream, the startup configuration document, and the credential/booking
//! comparison engine.

pub mod api;
pub mod auth;
pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod stream;

mod client;

pub use client::*;
pub use config::AppConfig;
