//! Contact form handler
//!
//! Accepts the contact form POST and answers a fixed acknowledgment.
//! Fields are optional and unvalidated; the submission lives only for
//! the duration of the request.

use crate::http::{self, form};
use crate::logger;
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response, StatusCode};
use serde::Serialize;

/// Confirmation text returned for every submission
pub const CONFIRMATION_MESSAGE: &str =
    "Mensagem enviada com sucesso! Entrarei em contato em breve.";

/// One contact form submission
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Extract the four known fields from a form-encoded body.
    /// Absent fields become empty strings.
    pub fn from_form(body: &[u8]) -> Self {
        let mut fields = form::parse_form(body);
        let mut take = |name: &str| fields.remove(name).unwrap_or_default();
        Self {
            name: take("name"),
            email: take("email"),
            phone: take("phone"),
            message: take("message"),
        }
    }
}

/// Fixed-shape acknowledgment returned for any submission
#[derive(Debug, Serialize)]
pub struct Acknowledgment {
    pub status: &'static str,
    pub message: &'static str,
}

impl Acknowledgment {
    /// The success acknowledgment
    pub const fn success() -> Self {
        Self {
            status: "success",
            message: CONFIRMATION_MESSAGE,
        }
    }
}

/// Handle POST /contact
///
/// An unreadable body is treated as an empty form; the submission is
/// acknowledged either way.
pub async fn submit(req: Request<Incoming>) -> Response<Full<Bytes>> {
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read contact body: {e}"));
            Bytes::new()
        }
    };

    let submission = ContactSubmission::from_form(&body);
    // TODO: hand the submission to an email or storage backend once the
    // practice decides where these should go. Until then the data is
    // dropped after the acknowledgment.
    drop(submission);

    http::json_response(StatusCode::OK, &Acknowledgment::success())
}
