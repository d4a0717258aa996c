// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interfaces to the host services the mail action depends on.
mod directory;
mod identity;
mod interpolator;
mod roles;
mod settings;
mod transport;

pub use directory::{GroupDirectory, MembershipLookup};
pub use identity::IdentityHandle;
pub use interpolator::{Interpolator, InterpolatorFactory};
pub use roles::{AcquiredRoleProvider, GlobalRoleProvider};
pub use settings::{PropertyStore, Registry};
pub use transport::{MailMessage, MailTransport};
