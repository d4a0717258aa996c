// SPDX-License-Identifier: MIT OR Apache-2.0

//! Execute a "mail to role" action for one triggering content event.
use thiserror::Error;
use tracing::debug;

use crate::BoxedError;
use crate::config::{ActionConfig, CHARSET, ConfigurationError};
use crate::content::ContentObject;
use crate::email::{ExpandError, expand_emails};
use crate::message::{ObjectSubstitutions, compose};
use crate::resolver::{RecipientResolver, ResolverError};
use crate::source::resolve_from_header;
use crate::traits::{
    AcquiredRoleProvider, GlobalRoleProvider, GroupDirectory, IdentityHandle, InterpolatorFactory,
    MailMessage, MailTransport, MembershipLookup, PropertyStore, Registry,
};

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error("failed to send email to {to}")]
    Transport {
        to: String,
        #[source]
        source: BoxedError,
    },
}

/// Sends the configured email to every user holding the configured role on an object.
///
/// All host services are handed in on construction. The executor holds no state between
/// invocations, each call to [`MailRoleExecutor::execute`] is independent.
///
/// Subject and body are interpolated with [`ObjectSubstitutions`] unless the host provides its
/// own placeholders through [`MailRoleExecutor::with_interpolator`].
#[derive(Debug)]
pub struct MailRoleExecutor<AR, GR, GD, MS, PS, RG, MT, IF = ObjectSubstitutions> {
    acquired_roles: AR,
    global_roles: GR,
    groups: GD,
    members: MS,
    properties: PS,
    registry: RG,
    transport: Option<MT>,
    interpolator: IF,
}

impl<AR, GR, GD, MS, PS, RG, MT>
    MailRoleExecutor<AR, GR, GD, MS, PS, RG, MT, ObjectSubstitutions>
where
    PS: PropertyStore,
    RG: Registry,
    MT: MailTransport,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        acquired_roles: AR,
        global_roles: GR,
        groups: GD,
        members: MS,
        properties: PS,
        registry: RG,
        transport: Option<MT>,
    ) -> Self {
        Self {
            acquired_roles,
            global_roles,
            groups,
            members,
            properties,
            registry,
            transport,
            interpolator: ObjectSubstitutions,
        }
    }
}

impl<AR, GR, GD, MS, PS, RG, MT, IF> MailRoleExecutor<AR, GR, GD, MS, PS, RG, MT, IF>
where
    PS: PropertyStore,
    RG: Registry,
    MT: MailTransport,
{
    /// Replace the interpolator used for subject and body templates.
    pub fn with_interpolator<F>(
        self,
        interpolator: F,
    ) -> MailRoleExecutor<AR, GR, GD, MS, PS, RG, MT, F> {
        MailRoleExecutor {
            acquired_roles: self.acquired_roles,
            global_roles: self.global_roles,
            groups: self.groups,
            members: self.members,
            properties: self.properties,
            registry: self.registry,
            transport: self.transport,
            interpolator,
        }
    }

    pub fn transport(&self) -> Option<&MT> {
        self.transport.as_ref()
    }

    /// Resolve recipients and send one email to each of them.
    ///
    /// Returns the number of emails handed to the transport. Nothing is resolved without a
    /// transport and nothing is sent without a sender address. The first failing send aborts
    /// the remaining ones.
    pub fn execute<ID>(
        &self,
        config: &ActionConfig,
        object: &ContentObject<ID>,
    ) -> Result<usize, ExecutorError>
    where
        ID: IdentityHandle,
        AR: AcquiredRoleProvider<ID>,
        GR: GlobalRoleProvider<ID>,
        GD: GroupDirectory<ID>,
        MS: MembershipLookup<ID>,
        IF: InterpolatorFactory<ID>,
    {
        let Some(transport) = self.transport.as_ref() else {
            return Err(ConfigurationError::MissingTransport.into());
        };

        let from = resolve_from_header(config.source.as_deref(), &self.properties, &self.registry)?;

        let users = RecipientResolver::from(config).resolve(
            object,
            &self.acquired_roles,
            &self.global_roles,
            &self.groups,
        )?;
        let emails = expand_emails(&users, &self.members)?;

        if users.is_empty() {
            debug!(role = %config.role, object = %object.id, "no recipients found");
            return Ok(0);
        }

        let message = compose(config, &self.interpolator.bind(object));

        for to in &emails {
            let mail = MailMessage {
                to: to.clone(),
                from: from.clone(),
                subject: message.subject.clone(),
                body: message.body.clone(),
                charset: CHARSET,
            };
            transport
                .send(&mail)
                .map_err(|err| ExecutorError::Transport {
                    to: to.clone(),
                    source: Box::new(err),
                })?;
            debug!(%to, object = %object.id, "sent email");
        }

        debug!(
            role = %config.role,
            users = users.len(),
            sent = emails.len(),
            "mail to role action executed"
        );

        Ok(emails.len())
    }
}
