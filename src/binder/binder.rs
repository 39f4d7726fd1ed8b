/*!
 * Realm Binder
 *
 * Container listener that distributes one resource handle to the bindable
 * realms of the active security manager.
 *
 * # Lifecycle
 *
 * - **Ready**: look up the security manager, select realms, bind each in order
 * - **Torndown**: look the manager up again, re-select, unbind each in order
 *
 * Nothing is remembered between the two events. If the realm set changes in
 * between, torndown acts on the realms present at torndown.
 *
 * The first failing realm aborts the event; realms already handled stay as
 * they are and later realms are not visited.
 */

use super::hooks::{BindRealm, RealmHook, UnbindRealm};
use super::report::BindingReport;
use crate::container::{LifecycleEvent, LifecycleListener};
use crate::core::{BinderError, BinderResult, RealmError};
use crate::security::{EnvironmentAccessor, SecurityManagerAccessor};
use crate::selection::{select_realms, SelectionPolicy};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, Span};

/// Lifecycle coordinator binding a resource handle to realms
pub struct RealmBinder<H> {
    resource: Arc<H>,
    selection: SelectionPolicy,
    accessor: Box<dyn SecurityManagerAccessor<H>>,
    bind_hook: Box<dyn RealmHook<H>>,
    unbind_hook: Box<dyn RealmHook<H>>,
    span: Span,
}

impl<H: Send + Sync + 'static> RealmBinder<H> {
    /// Create a binder that binds every bindable realm
    pub fn new(resource: Arc<H>) -> Self {
        Self::assemble(
            resource,
            SelectionPolicy::All,
            Box::new(EnvironmentAccessor),
            Box::new(BindRealm),
            Box::new(UnbindRealm),
            None,
        )
    }

    /// Create a binder from optional parts
    ///
    /// Fails with [`BinderError::InvalidArgument`] when no resource handle is
    /// given. A missing selection policy falls back to [`SelectionPolicy::All`].
    pub fn try_new(
        resource: Option<Arc<H>>,
        selection: Option<SelectionPolicy>,
    ) -> BinderResult<Self> {
        let mut builder = Self::builder();
        builder.resource = resource;
        builder.selection = selection;
        builder.build()
    }

    #[inline]
    pub fn builder() -> RealmBinderBuilder<H> {
        RealmBinderBuilder::new()
    }

    fn assemble(
        resource: Arc<H>,
        selection: SelectionPolicy,
        accessor: Box<dyn SecurityManagerAccessor<H>>,
        bind_hook: Box<dyn RealmHook<H>>,
        unbind_hook: Box<dyn RealmHook<H>>,
        span: Option<Span>,
    ) -> Self {
        let span = span.unwrap_or_else(|| info_span!("realm_binder", selection = %selection));
        Self {
            resource,
            selection,
            accessor,
            bind_hook,
            unbind_hook,
            span,
        }
    }

    /// The shared resource handle given to every selected realm
    #[inline]
    pub fn resource(&self) -> &Arc<H> {
        &self.resource
    }

    #[inline]
    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }

    /// Bind the selected realms for a ready event
    pub fn bind_realms(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<BindingReport> {
        self.apply(event, self.bind_hook.as_ref(), |realm, source| {
            BinderError::BindFailure { realm, source }
        })
    }

    /// Unbind the selected realms for a torndown event
    pub fn unbind_realms(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<BindingReport> {
        self.apply(event, self.unbind_hook.as_ref(), |realm, source| {
            BinderError::UnbindFailure { realm, source }
        })
    }

    fn apply(
        &self,
        event: &LifecycleEvent<'_, H>,
        hook: &dyn RealmHook<H>,
        failure: fn(String, RealmError) -> BinderError,
    ) -> BinderResult<BindingReport> {
        let _entered = self.span.enter();

        let manager = self.accessor.realm_security_manager(event.context())?;
        let realms = manager.realms();
        let selected = select_realms(&realms, self.selection);

        debug!(
            stage = %event.stage(),
            event_id = %event.id(),
            discovered = realms.len(),
            selected = selected.len(),
            "Realms selected"
        );

        let mut handled = Vec::with_capacity(selected.len());
        for realm in selected {
            let name = realm.name().to_string();
            hook.apply(realm, &self.resource)
                .map_err(|source| failure(name.clone(), source))?;
            handled.push(name);
        }

        Ok(BindingReport::new(event, self.selection, handled))
    }
}

impl<H: Send + Sync + 'static> LifecycleListener<H> for RealmBinder<H> {
    fn name(&self) -> &str {
        "realm-binder"
    }

    fn on_environment_ready(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<()> {
        match self.bind_realms(event) {
            Ok(report) => {
                info!(parent: &self.span, event_id = %report.event_id, realms = ?report.realms, "Realms bound to resource handle");
                Ok(())
            }
            Err(e) => {
                error!(parent: &self.span, event_id = %event.id(), error = %e, "Binding realms failed");
                Err(e)
            }
        }
    }

    fn on_environment_torndown(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<()> {
        match self.unbind_realms(event) {
            Ok(report) => {
                info!(parent: &self.span, event_id = %report.event_id, realms = ?report.realms, "Realms released resource handle");
                Ok(())
            }
            Err(e) => {
                error!(parent: &self.span, event_id = %event.id(), error = %e, "Unbinding realms failed");
                Err(e)
            }
        }
    }
}

impl<H> fmt::Debug for RealmBinder<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealmBinder")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RealmBinder`]
pub struct RealmBinderBuilder<H> {
    resource: Option<Arc<H>>,
    selection: Option<SelectionPolicy>,
    accessor: Option<Box<dyn SecurityManagerAccessor<H>>>,
    bind_hook: Option<Box<dyn RealmHook<H>>>,
    unbind_hook: Option<Box<dyn RealmHook<H>>>,
    span: Option<Span>,
}

impl<H: Send + Sync + 'static> RealmBinderBuilder<H> {
    pub fn new() -> Self {
        Self {
            resource: None,
            selection: None,
            accessor: None,
            bind_hook: None,
            unbind_hook: None,
            span: None,
        }
    }

    /// Resource handle shared with the selected realms (required)
    #[must_use]
    pub fn with_resource(mut self, resource: Arc<H>) -> Self {
        self.resource = Some(resource);
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Replace how the security manager is looked up
    #[must_use]
    pub fn with_accessor(mut self, accessor: impl SecurityManagerAccessor<H> + 'static) -> Self {
        self.accessor = Some(Box::new(accessor));
        self
    }

    /// Replace the action applied to each realm on ready
    #[must_use]
    pub fn with_bind_hook(mut self, hook: impl RealmHook<H> + 'static) -> Self {
        self.bind_hook = Some(Box::new(hook));
        self
    }

    /// Replace the action applied to each realm on torndown
    #[must_use]
    pub fn with_unbind_hook(mut self, hook: impl RealmHook<H> + 'static) -> Self {
        self.unbind_hook = Some(Box::new(hook));
        self
    }

    /// Span every binder event is recorded in
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn build(self) -> BinderResult<RealmBinder<H>> {
        let resource = self.resource.ok_or_else(|| {
            BinderError::InvalidArgument("resource handle is a required argument".to_string())
        })?;

        let selection = self.selection.unwrap_or_else(|| {
            let selection = SelectionPolicy::default();
            info!(%selection, "No selection policy specified, defaulting to {}", selection);
            selection
        });

        Ok(RealmBinder::assemble(
            resource,
            selection,
            self.accessor.unwrap_or_else(|| Box::new(EnvironmentAccessor)),
            self.bind_hook.unwrap_or_else(|| Box::new(BindRealm)),
            self.unbind_hook.unwrap_or_else(|| Box::new(UnbindRealm)),
            self.span,
        ))
    }
}

impl<H: Send + Sync + 'static> Default for RealmBinderBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
