// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolve the set of users holding a role on a content object.
//!
//! Principals are collected from the local role table of the object and, if requested, from
//! acquired and site-wide role assignments. Groups among them are then replaced by their
//! transitive user members.
use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, trace};

use crate::BoxedError;
use crate::config::ActionConfig;
use crate::content::ContentObject;
use crate::principal::{Principal, RoleAssignment};
use crate::traits::{AcquiredRoleProvider, GlobalRoleProvider, GroupDirectory, IdentityHandle};

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("failed to look up acquired roles")]
    AcquiredRoles(#[source] BoxedError),

    #[error("failed to look up global roles")]
    GlobalRoles(#[source] BoxedError),

    #[error("failed to look up principal {id}")]
    GroupLookup {
        id: String,
        #[source]
        source: BoxedError,
    },
}

/// Computes the users holding a role on an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipientResolver {
    role: String,
    acquired: bool,
    global_roles: bool,
}

impl RecipientResolver {
    /// Resolver looking only at the local role table.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            acquired: false,
            global_roles: false,
        }
    }

    /// Also include principals holding the role through acquisition.
    pub fn acquired(mut self, acquired: bool) -> Self {
        self.acquired = acquired;
        self
    }

    /// Also include principals holding the role on the whole site.
    pub fn global_roles(mut self, global_roles: bool) -> Self {
        self.global_roles = global_roles;
        self
    }

    /// Resolve all users holding the role on the given object.
    ///
    /// An object without any local role assignment resolves to an empty set right away, acquired
    /// and global roles are not consulted in that case. Users which only hold the role through
    /// acquisition or globally on such an object will not be found.
    pub fn resolve<ID, AR, GR, GD>(
        &self,
        object: &ContentObject<ID>,
        acquired_roles: &AR,
        global_roles: &GR,
        groups: &GD,
    ) -> Result<HashSet<ID>, ResolverError>
    where
        ID: IdentityHandle,
        AR: AcquiredRoleProvider<ID>,
        GR: GlobalRoleProvider<ID>,
        GD: GroupDirectory<ID>,
    {
        // @TODO: Decide with product owners if acquired and global roles should be looked up
        // even when the object has no local roles at all.
        if object.local_roles.is_empty() {
            debug!(object = %object.id, "no local roles on object, skip recipient resolution");
            return Ok(HashSet::new());
        }

        let mut principals: HashSet<ID> = self.holders(&object.local_roles).collect();

        if self.acquired {
            let inherited = acquired_roles
                .inherited_roles(object)
                .map_err(|err| ResolverError::AcquiredRoles(Box::new(err)))?;
            principals.extend(self.holders(&inherited));

            let borg = acquired_roles
                .borg_local_roles(object)
                .map_err(|err| ResolverError::AcquiredRoles(Box::new(err)))?;
            if let Some(borg) = borg {
                principals.extend(self.holders(&borg));
            }
        }

        if self.global_roles {
            let site_wide = global_roles
                .global_roles()
                .map_err(|err| ResolverError::GlobalRoles(Box::new(err)))?;
            principals.extend(self.holders(&site_wide));
        }

        debug!(
            role = %self.role,
            object = %object.id,
            principals = principals.len(),
            "collected principals holding role"
        );

        expand_groups(principals, groups)
    }

    fn holders<ID>(&self, assignments: &[RoleAssignment<ID>]) -> impl Iterator<Item = ID>
    where
        ID: IdentityHandle,
    {
        assignments
            .iter()
            .filter(|assignment| assignment.has_role(&self.role))
            .map(|assignment| assignment.principal.clone())
    }
}

impl From<&ActionConfig> for RecipientResolver {
    fn from(config: &ActionConfig) -> Self {
        RecipientResolver::new(config.role.clone())
            .acquired(config.acquired)
            .global_roles(config.global_roles)
    }
}

/// Replace every group in the given set with its transitive user members.
///
/// Every group is expanded at most once, membership cycles are therefore harmless.
pub fn expand_groups<ID, GD>(
    principals: HashSet<ID>,
    groups: &GD,
) -> Result<HashSet<ID>, ResolverError>
where
    ID: IdentityHandle,
    GD: GroupDirectory<ID>,
{
    let mut users = HashSet::new();
    let mut visited = HashSet::new();
    for principal in principals {
        expand_inner(principal, groups, &mut visited, &mut users)?;
    }
    Ok(users)
}

fn expand_inner<ID, GD>(
    id: ID,
    groups: &GD,
    visited: &mut HashSet<ID>,
    users: &mut HashSet<ID>,
) -> Result<(), ResolverError>
where
    ID: IdentityHandle,
    GD: GroupDirectory<ID>,
{
    let principal = groups.lookup(&id).map_err(|err| ResolverError::GroupLookup {
        id: id.to_string(),
        source: Box::new(err),
    })?;

    match principal {
        Principal::User(user) => {
            users.insert(user);
        }
        Principal::Group { id, members } => {
            if !visited.insert(id.clone()) {
                trace!(group = %id, "group already expanded");
                return Ok(());
            }
            trace!(group = %id, members = members.len(), "expand group");
            for member in members {
                expand_inner(member, groups, visited, users)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use crate::content::ContentObject;
    use crate::principal::RoleAssignment;
    use crate::test_utils::{MemoryGroups, MemoryRoles, setup_logging};

    use super::{RecipientResolver, ResolverError, expand_groups};

    fn ids(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn assignment(principal: &str, roles: &[&str]) -> RoleAssignment<String> {
        RoleAssignment::new(principal.to_string(), roles.iter().copied())
    }

    fn object(local_roles: Vec<RoleAssignment<String>>) -> ContentObject<String> {
        let mut object = ContentObject::new("doc", "Document", "https://example.org/doc");
        object.local_roles = local_roles;
        object
    }

    #[test]
    fn local_roles_only() {
        setup_logging();

        let object = object(vec![
            assignment("alice", &["Reviewer"]),
            assignment("bob", &["Editor"]),
            assignment("carol", &["Editor", "Reviewer"]),
        ]);
        let roles = MemoryRoles::default();
        let groups = MemoryGroups::default();

        let users = RecipientResolver::new("Reviewer")
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["alice", "carol"]));

        let users = RecipientResolver::new("Manager")
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn empty_local_roles_short_circuit() {
        let object = object(vec![]);
        let roles = MemoryRoles::default()
            .with_inherited(assignment("dave", &["Reviewer"]))
            .with_global(assignment("erin", &["Reviewer"]));
        let groups = MemoryGroups::default();

        let users = RecipientResolver::new("Reviewer")
            .acquired(true)
            .global_roles(true)
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn acquired_and_global_roles() {
        let object = object(vec![assignment("alice", &["Reviewer"])]);
        let roles = MemoryRoles::default()
            .with_inherited(assignment("dave", &["Reviewer"]))
            .with_inherited(assignment("frank", &["Reader"]))
            .with_global(assignment("erin", &["Reviewer"]))
            .with_global(assignment("alice", &["Reviewer"]));
        let groups = MemoryGroups::default();

        let users = RecipientResolver::new("Reviewer")
            .acquired(true)
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["alice", "dave"]));

        let users = RecipientResolver::new("Reviewer")
            .global_roles(true)
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["alice", "erin"]));

        let users = RecipientResolver::new("Reviewer")
            .acquired(true)
            .global_roles(true)
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["alice", "dave", "erin"]));
    }

    #[test]
    fn borg_roles_merge_with_acquired_roles() {
        let object = object(vec![assignment("alice", &["Reviewer"])]);
        let roles = MemoryRoles::default().with_borg(assignment("gina", &["Reviewer"]));
        let groups = MemoryGroups::default();

        let users = RecipientResolver::new("Reviewer")
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["alice"]));

        let users = RecipientResolver::new("Reviewer")
            .acquired(true)
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["alice", "gina"]));
    }

    #[test]
    fn groups_are_replaced_by_members() {
        let object = object(vec![assignment("editors", &["Reviewer"])]);
        let roles = MemoryRoles::default();
        let groups = MemoryGroups::default().with_group("editors", &["bob", "carol"]);

        let users = RecipientResolver::new("Reviewer")
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["bob", "carol"]));
    }

    #[test]
    fn nested_groups() {
        let groups = MemoryGroups::default()
            .with_group("staff", &["editors", "alice"])
            .with_group("editors", &["bob", "reviewers"])
            .with_group("reviewers", &["carol", "alice"]);

        let users = expand_groups(ids(&["staff", "dave"]), &groups).unwrap();
        assert_eq!(users, ids(&["alice", "bob", "carol", "dave"]));
    }

    #[test]
    fn cyclic_groups_terminate() {
        let groups = MemoryGroups::default()
            .with_group("A", &["B", "alice"])
            .with_group("B", &["A", "bob"])
            .with_group("C", &["C"]);

        let users = expand_groups(ids(&["A", "B", "C"]), &groups).unwrap();
        assert_eq!(users, ids(&["alice", "bob"]));
    }

    #[test]
    fn expansion_is_idempotent() {
        let groups = MemoryGroups::default()
            .with_group("editors", &["bob", "reviewers"])
            .with_group("reviewers", &["carol"]);

        let once = expand_groups(ids(&["editors", "alice"]), &groups).unwrap();
        let twice = expand_groups(once.clone(), &groups).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn group_lookup_failure() {
        let object = object(vec![assignment("broken", &["Reviewer"])]);
        let roles = MemoryRoles::default();
        let groups = MemoryGroups::default().with_failing("broken");

        let result = RecipientResolver::new("Reviewer").resolve(&object, &roles, &roles, &groups);
        assert_matches!(result, Err(ResolverError::GroupLookup { id, .. }) if id == "broken");
    }

    #[test]
    fn role_lookup_failures() {
        let object = object(vec![assignment("alice", &["Reviewer"])]);
        let roles = MemoryRoles::failing();
        let groups = MemoryGroups::default();

        let result = RecipientResolver::new("Reviewer")
            .acquired(true)
            .resolve(&object, &roles, &roles, &groups);
        assert_matches!(result, Err(ResolverError::AcquiredRoles(_)));

        let result = RecipientResolver::new("Reviewer")
            .global_roles(true)
            .resolve(&object, &roles, &roles, &groups);
        assert_matches!(result, Err(ResolverError::GlobalRoles(_)));

        // Failing providers are never asked when their flags are off.
        let users = RecipientResolver::new("Reviewer")
            .resolve(&object, &roles, &roles, &groups)
            .unwrap();
        assert_eq!(users, ids(&["alice"]));
    }
}
