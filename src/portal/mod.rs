//! Property-portal API integration module.
//!
//! Provides the HTTP client and the validated record types for every
//! collection the dashboard displays.

pub mod client;
pub mod models;

pub use client::PortalClient;
pub use models::{Notice, Notification, Payment, Property, Rental};
