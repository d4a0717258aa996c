// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::content::ContentObject;
use crate::traits::IdentityHandle;

/// Substitutes placeholders like `${title}` in a template with values of the triggering object.
pub trait Interpolator {
    fn interpolate(&self, template: &str) -> String;
}

/// Binds an [`Interpolator`] to the object which triggered the rule.
pub trait InterpolatorFactory<ID>
where
    ID: IdentityHandle,
{
    type Interpolator: Interpolator;

    fn bind(&self, object: &ContentObject<ID>) -> Self::Interpolator;
}
