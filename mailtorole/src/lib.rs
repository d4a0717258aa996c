// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content rule action which emails every user holding a given role on a content object.
//!
//! Recipients are resolved from the local role table of the triggering object, optionally
//! extended by acquired and site-wide role assignments. Groups are expanded into their
//! transitive user members and users are mapped to their unique email addresses.
//!
//! The host's role manager, group and membership stores, site settings and mail transport are
//! passed in as implementations of the interfaces in [`traits`].
//!
//! ```ignore
//! let executor = MailRoleExecutor::new(
//!     acquired_roles, global_roles, groups, members, properties, registry, Some(mail_host),
//! );
//! let config = ActionConfig::new("New item: ${title}", "Reviewer", "Please review ${url}")
//!     .with_acquired(true);
//! let sent = executor.execute(&config, &object)?;
//! ```
pub mod config;
pub mod content;
pub mod email;
pub mod executor;
pub mod message;
pub mod principal;
pub mod resolver;
pub mod source;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;

pub use config::{ActionConfig, ConfigurationError};
pub use content::ContentObject;
pub use email::{ExpandError, expand_emails};
pub use executor::{ExecutorError, MailRoleExecutor};
pub use message::{ComposedMessage, ObjectSubstitutions, Substitutions, compose};
pub use principal::{MemberProfile, Principal, RoleAssignment};
pub use resolver::{RecipientResolver, ResolverError, expand_groups};
pub use source::resolve_from_header;

/// Error raised by one of the host services.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;
