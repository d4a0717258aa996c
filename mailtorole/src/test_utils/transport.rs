// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cell::RefCell;

use crate::test_utils::TestError;
use crate::traits::{MailMessage, MailTransport};

/// Transport which keeps every sent message.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: RefCell<Vec<MailMessage>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.borrow().clone()
    }
}

impl MailTransport for RecordingTransport {
    type Error = TestError;

    fn send(&self, message: &MailMessage) -> Result<(), Self::Error> {
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}

/// Transport which rejects one address and records the rest.
#[derive(Debug, Default)]
pub struct FailingTransport {
    rejected: String,
    inner: RecordingTransport,
}

impl FailingTransport {
    pub fn rejecting(address: &str) -> Self {
        Self {
            rejected: address.to_string(),
            inner: RecordingTransport::default(),
        }
    }

    pub fn sent(&self) -> Vec<MailMessage> {
        self.inner.sent()
    }
}

impl MailTransport for FailingTransport {
    type Error = TestError;

    fn send(&self, message: &MailMessage) -> Result<(), Self::Error> {
        if message.to == self.rejected {
            return Err(TestError(format!("mailbox {}", message.to)));
        }
        self.inner.send(message)
    }
}
