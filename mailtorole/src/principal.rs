// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::{BTreeSet, HashMap};

use crate::traits::IdentityHandle;

/// Property name of a member's email address.
pub const EMAIL_PROPERTY: &str = "email";

/// Roles granted to a principal, as found in a role table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleAssignment<ID> {
    pub principal: ID,
    pub roles: BTreeSet<String>,
}

impl<ID> RoleAssignment<ID>
where
    ID: IdentityHandle,
{
    pub fn new<I, R>(principal: ID, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            principal,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Return `true` if the given role is part of this assignment.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// A principal in the security model, either a single user or a group of other principals.
///
/// Group members can themselves be groups, membership graphs may contain cycles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Principal<ID> {
    User(ID),
    Group { id: ID, members: Vec<ID> },
}

/// Properties of a site member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberProfile {
    properties: HashMap<String, String>,
}

impl MemberProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile with only an email address set.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self::new().with_property(EMAIL_PROPERTY, email)
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// The member's email address, `None` if it is missing or blank.
    pub fn email(&self) -> Option<&str> {
        self.property(EMAIL_PROPERTY)
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberProfile, RoleAssignment};

    #[test]
    fn role_membership() {
        let assignment = RoleAssignment::new("alice".to_string(), ["Reviewer", "Editor"]);
        assert!(assignment.has_role("Reviewer"));
        assert!(assignment.has_role("Editor"));
        assert!(!assignment.has_role("Manager"));
        assert!(!assignment.has_role("reviewer"));
    }

    #[test]
    fn blank_email_is_absent() {
        assert_eq!(MemberProfile::new().email(), None);
        assert_eq!(MemberProfile::with_email("").email(), None);
        assert_eq!(MemberProfile::with_email("   ").email(), None);
        assert_eq!(
            MemberProfile::with_email(" carol@example.org\n").email(),
            Some("carol@example.org")
        );

        let profile =
            MemberProfile::with_email("dave@example.org").with_property("fullname", "Dave");
        assert_eq!(profile.property("fullname"), Some("Dave"));
        assert_eq!(profile.property("location"), None);
    }
}
