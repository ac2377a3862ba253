use axum::{Router, routing::get};
use std::sync::Arc;

use crate::presentation::http::handlers::EmailHandler;

pub fn email_routes(email_handler: Arc<EmailHandler>) -> Router {
    Router::new()
        .route("/api/emails", get(EmailHandler::list_emails))
        .with_state(email_handler)
}
