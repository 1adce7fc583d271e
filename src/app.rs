//! Application type: one registry plus response defaults, shared by every request.
//!
//! # Responsibilities
//! - Install the default matchers (`configure`)
//! - Accept integrator overrides (`register`, `alias`)
//! - Dispatch outcomes against a consistent registry snapshot
//! - Attach the result hook to an axum `Router` (`install`)
//!
//! # Design Decisions
//! - Registry lives behind `ArcSwap`: dispatch reads are lock-free and each
//!   registration publishes a new snapshot (last writer wins)
//! - `configure` is idempotent; running it again re-registers the same defaults

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{http::HeaderValue, middleware, Router};

use crate::config::{MatcherConfig, ResponseConfig};
use crate::dispatch::{
    self,
    matchers::{match_either, match_left, match_rack_either, match_right},
    DispatchError, Scope,
};
use crate::http::{middleware::outcome_middleware, ResponseContext};
use crate::outcome::{IntoOutcome, Outcome};
use crate::registry::{Matcher, MatcherKey, MatcherRegistry};

/// An application configured to render outcomes of type `O`.
pub struct Application<O> {
    inner: Arc<Inner<O>>,
}

struct Inner<O> {
    registry: ArcSwap<MatcherRegistry<O>>,
    matchers: MatcherConfig,
    default_content_type: HeaderValue,
}

impl<O> Clone for Application<O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O> std::fmt::Debug for Application<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("registry", &self.inner.registry.load_full())
            .field("default_content_type", &self.inner.default_content_type)
            .finish()
    }
}

impl<O> Default for Application<O>
where
    O: Outcome + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::with_config(MatcherConfig::default(), &ResponseConfig::default())
    }
}

impl<O> Application<O>
where
    O: Outcome + Send + Sync + 'static,
{
    /// Create an application with the default matchers installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an application from validated configuration.
    ///
    /// An unparsable default content type falls back to `text/plain; charset=utf-8`;
    /// `config::validation` rejects such values before they get here.
    pub fn with_config(matchers: MatcherConfig, response: &ResponseConfig) -> Self {
        let default_content_type = HeaderValue::from_str(&response.default_content_type)
            .unwrap_or_else(|_| HeaderValue::from_static(ResponseConfig::FALLBACK_CONTENT_TYPE));

        let app = Self {
            inner: Arc::new(Inner {
                registry: ArcSwap::from_pointee(MatcherRegistry::new()),
                matchers,
                default_content_type,
            }),
        };
        app.configure();
        app
    }

    /// (Re-)register the four default matchers and their aliases.
    pub fn configure(&self) {
        let right_aliases = keys(&self.inner.matchers.right_aliases);
        let left_aliases = keys(&self.inner.matchers.left_aliases);

        self.inner.registry.rcu(|current| {
            let mut registry = MatcherRegistry::clone(current);
            registry.register(MatcherKey::RIGHT, &right_aliases, match_right::<O>);
            registry.register(MatcherKey::LEFT, &left_aliases, match_left::<O>);
            registry.register(MatcherKey::EITHER, &[], match_either::<O>);
            registry.register(MatcherKey::RACK_EITHER, &[], match_rack_either::<O>);
            registry
        });

        tracing::debug!(
            right_aliases = ?self.inner.matchers.right_aliases,
            left_aliases = ?self.inner.matchers.left_aliases,
            "Default matchers registered"
        );
    }

    /// Add or override a matcher. Aliases copy the matcher as it is now.
    pub fn register<F>(&self, name: impl Into<MatcherKey>, aliases: &[MatcherKey], matcher: F)
    where
        F: Fn(&mut Scope<'_, O>, &O) -> Result<bool, DispatchError> + Send + Sync + 'static,
    {
        let name = name.into();
        let matcher: Matcher<O> = Arc::new(matcher);
        self.inner.registry.rcu(|current| {
            let mut registry = MatcherRegistry::clone(current);
            registry.insert(name.clone(), aliases, Arc::clone(&matcher));
            registry
        });
        tracing::info!(matcher = %name, aliases = aliases.len(), "Matcher registered");
    }

    /// Copy the matcher currently stored under `name` onto each alias and return it.
    pub fn alias(&self, name: impl Into<MatcherKey>, aliases: &[MatcherKey]) -> Option<Matcher<O>> {
        let name = name.into();
        let mut found = None;
        self.inner.registry.rcu(|current| {
            let mut registry = MatcherRegistry::clone(current);
            found = registry.alias(name.clone(), aliases);
            registry
        });
        found
    }

    /// Look up a matcher without invoking it.
    pub fn matcher(&self, name: &str) -> Option<Matcher<O>> {
        self.inner.registry.load().get(name)
    }

    /// Current registry snapshot.
    pub fn registry(&self) -> Arc<MatcherRegistry<O>> {
        self.inner.registry.load_full()
    }

    pub fn default_content_type(&self) -> &HeaderValue {
        &self.inner.default_content_type
    }

    /// Render `value` onto `response` through the `either` entry point.
    pub fn dispatch<C>(
        &self,
        response: &mut ResponseContext,
        value: C,
    ) -> Result<bool, DispatchError>
    where
        C: IntoOutcome<O>,
    {
        let registry = self.inner.registry.load_full();
        dispatch::handle_outcome(&*registry, response, value)
    }

    /// Render an outcome that is already of this application's type.
    pub fn render(
        &self,
        response: &mut ResponseContext,
        outcome: &O,
    ) -> Result<bool, DispatchError> {
        let registry = self.inner.registry.load_full();
        dispatch::dispatch_outcome(&*registry, response, outcome)
    }
}

impl<O> Application<O>
where
    O: Outcome + Clone + Send + Sync + 'static,
{
    /// Wrap `router` so handlers returning `HandlerResult<O>` are rendered by this
    /// application.
    pub fn install<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(
            self.clone(),
            outcome_middleware::<O>,
        ))
    }
}

fn keys(names: &[String]) -> Vec<MatcherKey> {
    names.iter().cloned().map(MatcherKey::from).collect()
}
