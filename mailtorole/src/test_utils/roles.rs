// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::content::ContentObject;
use crate::principal::RoleAssignment;
use crate::test_utils::TestError;
use crate::traits::{AcquiredRoleProvider, GlobalRoleProvider};

/// Acquired, borg and global role tables shared by every object.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoles {
    inherited: Vec<RoleAssignment<String>>,
    borg: Option<Vec<RoleAssignment<String>>>,
    global: Vec<RoleAssignment<String>>,
    failing: bool,
}

impl MemoryRoles {
    /// Role tables which fail on every lookup.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn with_inherited(mut self, assignment: RoleAssignment<String>) -> Self {
        self.inherited.push(assignment);
        self
    }

    pub fn with_borg(mut self, assignment: RoleAssignment<String>) -> Self {
        self.borg.get_or_insert_with(Vec::new).push(assignment);
        self
    }

    pub fn with_global(mut self, assignment: RoleAssignment<String>) -> Self {
        self.global.push(assignment);
        self
    }
}

impl AcquiredRoleProvider<String> for MemoryRoles {
    type Error = TestError;

    fn inherited_roles(
        &self,
        _object: &ContentObject<String>,
    ) -> Result<Vec<RoleAssignment<String>>, Self::Error> {
        if self.failing {
            return Err(TestError("acquired roles".into()));
        }
        Ok(self.inherited.clone())
    }

    fn borg_local_roles(
        &self,
        _object: &ContentObject<String>,
    ) -> Result<Option<Vec<RoleAssignment<String>>>, Self::Error> {
        if self.failing {
            return Err(TestError("borg local roles".into()));
        }
        Ok(self.borg.clone())
    }
}

impl GlobalRoleProvider<String> for MemoryRoles {
    type Error = TestError;

    fn global_roles(&self) -> Result<Vec<RoleAssignment<String>>, Self::Error> {
        if self.failing {
            return Err(TestError("global roles".into()));
        }
        Ok(self.global.clone())
    }
}
