//! Order error types.

use thiserror::Error;

use little_sprout_core::OrderId;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The backend rejected the request with a non-success status.
    #[error("{message}")]
    Rejected {
        /// Human-readable failure reason (server-supplied or the
        /// operation's documented fallback).
        message: String,
        /// Present when the backend recorded an order despite the failure,
        /// e.g. payment declined after the order row was persisted. Callers
        /// distinguish "no order created" from "order created with failed
        /// status" by this field.
        order_id: Option<OrderId>,
    },

    /// The backend refused an admin-scoped call for lack of privilege
    /// (HTTP 403).
    ///
    /// Distinct from [`Rejected`](Self::Rejected) so callers can show an
    /// access-denied state instead of a generic failure.
    #[error("Access denied. Admin privileges required.")]
    AdminRequired,

    /// Network or protocol failure before a usable response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl OrderError {
    /// The order the backend recorded despite failing the request, if any.
    #[must_use]
    pub const fn created_order_id(&self) -> Option<OrderId> {
        match self {
            Self::Rejected { order_id, .. } => *order_id,
            _ => None,
        }
    }
}
