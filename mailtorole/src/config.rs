// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property store key of the site's default sender address.
pub const PROPERTY_FROM_ADDRESS: &str = "email_from_address";

/// Property store key of the site's default sender name.
pub const PROPERTY_FROM_NAME: &str = "email_from_name";

/// Registry key of the site's default sender address.
pub const REGISTRY_FROM_ADDRESS: &str = "plone.email_from_address";

/// Registry key of the site's default sender name.
pub const REGISTRY_FROM_NAME: &str = "plone.email_from_name";

/// Charset every message is sent with.
pub const CHARSET: &str = "utf-8";

/// Configuration problems which make it impossible to send any email.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("a mail transport is required to execute this action")]
    MissingTransport,

    #[error("no source address configured for this action and no site default sender address")]
    MissingFromAddress,
}

/// Settings of a "mail to role" rule action, as edited by a site administrator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionConfig {
    /// Subject template.
    pub subject: String,

    /// Sender address. The site default sender is used when empty.
    pub source: Option<String>,

    /// Users holding this role on the object receive the email.
    pub role: String,

    /// Also include users holding the role through acquisition.
    pub acquired: bool,

    /// Also include users holding the role on the whole site.
    pub global_roles: bool,

    /// Body template.
    pub message: String,
}

impl ActionConfig {
    pub fn new(
        subject: impl Into<String>,
        role: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_acquired(mut self, acquired: bool) -> Self {
        self.acquired = acquired;
        self
    }

    pub fn with_global_roles(mut self, global_roles: bool) -> Self {
        self.global_roles = global_roles;
        self
    }

    /// Human readable description of the action, shown in rule listings.
    pub fn summary(&self) -> String {
        format!("Email report to users with role {} on the object", self.role)
    }
}
