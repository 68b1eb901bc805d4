//! Payment details attached to a client.

use serde::{Deserialize, Serialize};

/// Billing information stored by the remote service.
///
/// Not every client has one: the remote endpoint answers 404 for clients
/// without payment details, and the detail session records that as a valid
/// absence rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub account_holder: String,
    pub account_number: String,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub billing_email: Option<String>,
}
