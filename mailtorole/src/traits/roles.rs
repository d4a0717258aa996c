// SPDX-License-Identifier: MIT OR Apache-2.0

use std::error::Error;

use crate::content::ContentObject;
use crate::principal::RoleAssignment;
use crate::traits::IdentityHandle;

/// Source of role assignments an object inherits from its ancestor containers.
pub trait AcquiredRoleProvider<ID>
where
    ID: IdentityHandle,
{
    type Error: Error + Send + Sync + 'static;

    /// Role assignments inherited by the given object.
    fn inherited_roles(
        &self,
        object: &ContentObject<ID>,
    ) -> Result<Vec<RoleAssignment<ID>>, Self::Error>;

    /// Secondary local-role source ("borg" local roles) merged with the inherited roles.
    ///
    /// Returns `None` when the host does not offer this source.
    fn borg_local_roles(
        &self,
        _object: &ContentObject<ID>,
    ) -> Result<Option<Vec<RoleAssignment<ID>>>, Self::Error> {
        Ok(None)
    }
}

/// Source of role assignments made at the scope of the whole site.
pub trait GlobalRoleProvider<ID>
where
    ID: IdentityHandle,
{
    type Error: Error + Send + Sync + 'static;

    fn global_roles(&self) -> Result<Vec<RoleAssignment<ID>>, Self::Error>;
}
