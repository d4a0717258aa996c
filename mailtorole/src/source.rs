// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::debug;

use crate::config::{
    ConfigurationError, PROPERTY_FROM_ADDRESS, PROPERTY_FROM_NAME, REGISTRY_FROM_ADDRESS,
    REGISTRY_FROM_NAME,
};
use crate::traits::{PropertyStore, Registry};

/// Determine the `From` header of outgoing emails.
///
/// A configured source address is used verbatim. Otherwise the site default sender is read from
/// the property store, falling back to the registry, and formatted as `"name" <address>`.
pub fn resolve_from_header<PS, RG>(
    source: Option<&str>,
    properties: &PS,
    registry: &RG,
) -> Result<String, ConfigurationError>
where
    PS: PropertyStore,
    RG: Registry,
{
    if let Some(source) = source.filter(|source| !source.is_empty()) {
        return Ok(source.to_owned());
    }

    let address = properties
        .property(PROPERTY_FROM_ADDRESS)
        .filter(|address| !address.is_empty())
        .or_else(|| registry.record(REGISTRY_FROM_ADDRESS))
        .filter(|address| !address.is_empty())
        .ok_or(ConfigurationError::MissingFromAddress)?;

    let name = properties
        .property(PROPERTY_FROM_NAME)
        .map(|name| name.trim_matches('"').to_owned())
        .filter(|name| !name.is_empty())
        .or_else(|| registry.record(REGISTRY_FROM_NAME))
        .unwrap_or_default();

    debug!(%address, "no source address configured, using site default sender");

    Ok(format!("\"{name}\" <{address}>"))
}
