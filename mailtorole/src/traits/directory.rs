// SPDX-License-Identifier: MIT OR Apache-2.0

use std::error::Error;

use crate::principal::{MemberProfile, Principal};
use crate::traits::IdentityHandle;

/// Lookup of principals in the host's group store.
pub trait GroupDirectory<ID>
where
    ID: IdentityHandle,
{
    type Error: Error + Send + Sync + 'static;

    /// Resolve an identifier into a user or a group with its direct members.
    ///
    /// Identifiers which are not known as groups are returned as [`Principal::User`].
    fn lookup(&self, id: &ID) -> Result<Principal<ID>, Self::Error>;
}

/// Lookup of member profiles in the host's membership store.
pub trait MembershipLookup<ID>
where
    ID: IdentityHandle,
{
    type Error: Error + Send + Sync + 'static;

    /// Get the profile of a member, `None` if no such member exists.
    fn member(&self, id: &ID) -> Result<Option<MemberProfile>, Self::Error>;
}
