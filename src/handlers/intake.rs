//! Intake endpoints for orders and contact messages.
//!
//! Both are stubs: the body is decoded leniently, logged and dropped. Nothing
//! is stored and no identifier is issued, and a malformed body still gets the
//! normal acknowledgement.

use axum::{body::Bytes, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::models::Submission;

pub const ORDER_ACK: &str = "Order received successfully";
pub const CONTACT_ACK: &str = "Message received";

// ── POST /api/orders ──────────────────────────────────────────────────────────

pub async fn create_order(body: Bytes) -> (StatusCode, Json<Value>) {
    let order = Submission::from_body("order", &body);

    info!(order = %order, empty = order.is_empty(), "Received new order");

    (StatusCode::CREATED, Json(json!({ "message": ORDER_ACK })))
}

// ── POST /api/contact ─────────────────────────────────────────────────────────

pub async fn submit_contact(body: Bytes) -> (StatusCode, Json<Value>) {
    let contact = Submission::from_body("contact", &body);

    info!(
        from = contact.text("name"),
        message = contact.text("message"),
        "Received new message"
    );

    (StatusCode::OK, Json(json!({ "message": CONTACT_ACK })))
}
