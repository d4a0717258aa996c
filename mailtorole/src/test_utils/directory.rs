// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::{HashMap, HashSet};

use crate::principal::{MemberProfile, Principal};
use crate::test_utils::TestError;
use crate::traits::{GroupDirectory, MembershipLookup};

#[derive(Clone, Debug, Default)]
pub struct MemoryGroups {
    groups: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl MemoryGroups {
    pub fn with_group(mut self, id: &str, members: &[&str]) -> Self {
        self.groups.insert(
            id.to_string(),
            members.iter().map(|member| member.to_string()).collect(),
        );
        self
    }

    /// Make lookups of the given principal fail.
    pub fn with_failing(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }
}

impl GroupDirectory<String> for MemoryGroups {
    type Error = TestError;

    fn lookup(&self, id: &String) -> Result<Principal<String>, Self::Error> {
        if self.failing.contains(id) {
            return Err(TestError(format!("group store for {id}")));
        }
        match self.groups.get(id) {
            Some(members) => Ok(Principal::Group {
                id: id.clone(),
                members: members.clone(),
            }),
            None => Ok(Principal::User(id.clone())),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryMembers {
    members: HashMap<String, MemberProfile>,
    failing: HashSet<String>,
}

impl MemoryMembers {
    pub fn with_member(mut self, id: &str, profile: MemberProfile) -> Self {
        self.members.insert(id.to_string(), profile);
        self
    }

    /// Make lookups of the given member fail.
    pub fn with_failing(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }
}

impl MembershipLookup<String> for MemoryMembers {
    type Error = TestError;

    fn member(&self, id: &String) -> Result<Option<MemberProfile>, Self::Error> {
        if self.failing.contains(id) {
            return Err(TestError(format!("membership store for {id}")));
        }
        Ok(self.members.get(id).cloned())
    }
}
