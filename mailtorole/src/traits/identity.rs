// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::{Debug, Display};
use std::hash::Hash as StdHash;

/// Identifier of a principal (user or group) in the host's security model.
pub trait IdentityHandle: Clone + Debug + Display + Eq + StdHash {}

impl IdentityHandle for String {}
