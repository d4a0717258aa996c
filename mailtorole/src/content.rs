// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::principal::RoleAssignment;
use crate::traits::IdentityHandle;

/// Snapshot of the content object which triggered the rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentObject<ID> {
    pub id: String,
    pub title: String,
    pub description: String,
    pub portal_type: String,
    /// Physical path of the object inside the site, for example `/news/launch`.
    pub path: String,
    /// Absolute URL of the object.
    pub url: String,
    /// Local role table of the object.
    pub local_roles: Vec<RoleAssignment<ID>>,
}

impl<ID> ContentObject<ID>
where
    ID: IdentityHandle,
{
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            portal_type: String::new(),
            path: String::new(),
            url: url.into(),
            local_roles: Vec::new(),
        }
    }

    pub fn with_local_role(mut self, assignment: RoleAssignment<ID>) -> Self {
        self.local_roles.push(assignment);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_portal_type(mut self, portal_type: impl Into<String>) -> Self {
        self.portal_type = portal_type.into();
        self
    }
}
