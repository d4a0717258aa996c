// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use crate::config::ActionConfig;
use crate::content::ContentObject;
use crate::traits::{IdentityHandle, Interpolator, InterpolatorFactory};

/// Interpolated subject and body of the outgoing email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedMessage {
    pub subject: String,
    pub body: String,
}

/// Interpolate subject and message templates of the action.
///
/// The body always starts with a newline, so a first line looking like `Key: value` is never
/// taken as a mail header.
pub fn compose<I>(config: &ActionConfig, interpolator: &I) -> ComposedMessage
where
    I: Interpolator,
{
    ComposedMessage {
        subject: interpolator.interpolate(&config.subject),
        body: format!("\n{}", interpolator.interpolate(&config.message)),
    }
}

/// Placeholder values for `${name}` substitution.
///
/// Unknown placeholders and an unterminated `${` are kept as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: HashMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholders describing the given content object.
    pub fn for_object<ID>(object: &ContentObject<ID>) -> Self
    where
        ID: IdentityHandle,
    {
        let mut substitutions = Self::new();
        substitutions.insert("id", &object.id);
        substitutions.insert("title", &object.title);
        substitutions.insert("description", &object.description);
        substitutions.insert("type", &object.portal_type);
        substitutions.insert("path", &object.path);
        substitutions.insert("url", &object.url);
        substitutions.insert("absolute_url", &object.url);
        substitutions
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Binds [`Substitutions::for_object`] to the triggering object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectSubstitutions;

impl<ID> InterpolatorFactory<ID> for ObjectSubstitutions
where
    ID: IdentityHandle,
{
    type Interpolator = Substitutions;

    fn bind(&self, object: &ContentObject<ID>) -> Self::Interpolator {
        Substitutions::for_object(object)
    }
}

impl Interpolator for Substitutions {
    fn interpolate(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find('}') else {
                // Unterminated placeholder, keep the remainder as is.
                output.push_str(&rest[start..]);
                return output;
            };

            let name = &after[..end];
            match self.get(name) {
                Some(value) => output.push_str(value),
                None => output.push_str(&rest[start..start + 2 + end + 1]),
            }
            rest = &after[end + 1..];
        }

        output.push_str(rest);
        output
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::config::ActionConfig;
    use crate::content::ContentObject;
    use crate::traits::Interpolator;

    use super::{Substitutions, compose};

    fn launch() -> ContentObject<String> {
        ContentObject::new("launch", "Launch party", "https://example.org/news/launch")
            .with_path("/news/launch")
            .with_portal_type("News Item")
            .with_description("Cake at noon")
    }

    #[rstest]
    #[case("${title}", "Launch party")]
    #[case("Visit ${url} now", "Visit https://example.org/news/launch now")]
    #[case("${id} (${type}) at ${path}", "launch (News Item) at /news/launch")]
    #[case("${description}: ${absolute_url}", "Cake at noon: https://example.org/news/launch")]
    #[case("No placeholders", "No placeholders")]
    #[case("Keep ${unknown} as is", "Keep ${unknown} as is")]
    #[case("Dangling ${title", "Dangling ${title")]
    #[case("Price: $5 ${title}", "Price: $5 Launch party")]
    #[case("${}", "${}")]
    fn interpolation(#[case] template: &str, #[case] expected: &str) {
        let substitutions = Substitutions::for_object(&launch());
        assert_eq!(substitutions.interpolate(template), expected);
    }

    #[test]
    fn custom_placeholders() {
        let mut substitutions = Substitutions::for_object(&launch());
        substitutions.insert("user_fullname", "Alice Liddell");
        substitutions.insert("title", "Overridden");

        assert_eq!(
            substitutions.interpolate("${user_fullname} edited ${title}"),
            "Alice Liddell edited Overridden"
        );
    }

    #[test]
    fn body_starts_with_newline() {
        let config = ActionConfig::new(
            "New: ${title}",
            "Reviewer",
            "From: attacker@example.org\nPlease review ${url}",
        );

        let message = compose(&config, &Substitutions::for_object(&launch()));
        assert_eq!(message.subject, "New: Launch party");
        assert_eq!(
            message.body,
            "\nFrom: attacker@example.org\nPlease review https://example.org/news/launch"
        );
    }
}
