//! Little Sprout storefront API client.
//!
//! This crate is the frontend core of the Little Sprout shop: it talks to the
//! storefront REST backend and decides which views a navigation may render.
//!
//! # Architecture
//!
//! - [`config`] - Base URL resolution, done once at startup
//! - [`session`] - Login, registration and identity checks
//! - [`orders`] - Checkout and order history (self- and admin-scoped)
//! - [`catalog`] - Public product reads
//! - [`store`] - Client-held session slot with optional file persistence
//! - [`guard`] - Per-navigation route guarding over the stored session
//!
//! Data flows one direction: the guard consults the session store, a
//! permitted view invokes a client, the client calls the backend and hands a
//! normalized result or typed error back to the view. Clients never retry or
//! recover locally.
//!
//! # Example
//!
//! ```rust,ignore
//! use little_sprout_client::{ClientConfig, RouteGuard, SessionClient, SessionStore};
//!
//! let config = ClientConfig::from_env()?;
//! let sessions = SessionStore::in_memory();
//!
//! let client = SessionClient::new(&config);
//! let session = client.login("alice", "hunter2").await?;
//! sessions.store(session);
//!
//! let guard = RouteGuard::new(&sessions);
//! guard.evaluate_path("/orders"); // GuardDecision::Render
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod guard;
mod http;
pub mod orders;
pub mod session;
pub mod store;

pub use catalog::{CatalogClient, CatalogError, Product};
pub use config::{ClientConfig, ConfigError};
pub use guard::{GuardDecision, RouteClass, RouteGuard, SessionProvider, classify};
pub use orders::{AdminOrder, Order, OrderClient, OrderError};
pub use session::{AuthError, Session, SessionClient, UserProfile};
pub use store::SessionStore;
