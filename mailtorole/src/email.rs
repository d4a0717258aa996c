// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;
use tracing::trace;

use crate::BoxedError;
use crate::traits::{IdentityHandle, MembershipLookup};

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("failed to look up member {id}")]
    MemberLookup {
        id: String,
        #[source]
        source: BoxedError,
    },
}

/// Map user ids to their unique email addresses.
///
/// Unknown users and users without an email address are skipped.
pub fn expand_emails<ID, MS>(
    users: &HashSet<ID>,
    members: &MS,
) -> Result<BTreeSet<String>, ExpandError>
where
    ID: IdentityHandle,
    MS: MembershipLookup<ID>,
{
    let mut emails = BTreeSet::new();
    for user in users {
        let profile = members
            .member(user)
            .map_err(|err| ExpandError::MemberLookup {
                id: user.to_string(),
                source: Box::new(err),
            })?;

        let Some(profile) = profile else {
            trace!(user = %user, "skip unknown member");
            continue;
        };

        match profile.email() {
            Some(email) => {
                emails.insert(email.to_owned());
            }
            None => trace!(user = %user, "skip member without email address"),
        }
    }
    Ok(emails)
}
