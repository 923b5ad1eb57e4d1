//! Panther Storefront library.
//!
//! The client-side store layer of the Panther supplement shop: product
//! catalog, cart, auth session, and theme preference, each an explicitly
//! constructed state container persisting through a JSON file bridge.
//!
//! # Architecture
//!
//! - Stores own their slice of state and expose mutation only through
//!   named operations; views read through derived getters
//! - The persistence bridge serializes state to `<data_dir>/<key>.json`
//!   and recovers silently from unreadable files
//! - Remote calls (credential exchange, logistics, checkout SDK) go
//!   through thin `reqwest`-based services with no business logic

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod format;
pub mod services;
pub mod storage;
pub mod stores;
pub mod toast;

/// Display name used in checkout dialogs and user-facing copy.
pub const BRAND_NAME: &str = "The Panther";
