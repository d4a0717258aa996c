// SPDX-License-Identifier: MIT OR Apache-2.0

use std::error::Error;

/// A single outgoing email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
    pub charset: &'static str,
}

/// Mail delivery service of the host.
///
/// Sending is fire-and-forget, an `Ok` does not confirm delivery.
pub trait MailTransport {
    type Error: Error + Send + Sync + 'static;

    fn send(&self, message: &MailMessage) -> Result<(), Self::Error>;
}
