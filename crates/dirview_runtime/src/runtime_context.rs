//! Resolver provider and context wiring.
//!
//! This module owns the long-lived reducer container, the effect queue, and the injected host
//! services. Page composition stays in [`crate::components`].

use std::rc::Rc;

use dirview_host::{ListingQueryService, NavigationKey, QueryError};
use leptos::*;

use crate::{
    effect_executor,
    model::ResolveState,
    reducer::{reduce_resolve, ResolveAction, ResolveEffect},
};

#[derive(Clone)]
/// Host services injected by the entry layer.
pub struct ResolverServices {
    /// Listing query transport.
    pub query: Rc<dyn ListingQueryService>,
}

impl ResolverServices {
    /// Wraps a concrete query service.
    pub fn new(query: impl ListingQueryService + 'static) -> Self {
        Self {
            query: Rc::new(query),
        }
    }
}

#[derive(Clone, Copy)]
/// Leptos context for reading resolver state and dispatching [`ResolveAction`] values.
pub struct ResolverContext {
    /// Injected host services.
    pub services: StoredValue<ResolverServices>,
    /// Reactive resolver state.
    pub state: RwSignal<ResolveState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<ResolveEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ResolveAction>,
}

impl ResolverContext {
    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: ResolveAction) {
        self.dispatch.call(action);
    }

    /// Starts resolving `key`.
    pub fn navigate(&self, key: NavigationKey) {
        self.dispatch_action(ResolveAction::Navigate(key));
    }

    /// Records a location that could not be turned into a key.
    pub fn reject(&self, error: QueryError) {
        self.dispatch_action(ResolveAction::RejectNavigation(error));
    }
}

#[component]
/// Provides [`ResolverContext`] to descendant components.
pub fn ResolverProvider(
    /// Host services assembled by the entry layer.
    services: ResolverServices,
    children: Children,
) -> impl IntoView {
    let services = store_value(services);
    let state = create_rw_signal(ResolveState::default());
    let effects = create_rw_signal(Vec::<ResolveEffect>::new());

    let dispatch = Callback::new(move |action: ResolveAction| {
        let mut resolver = state.get_untracked();
        let previous = resolver.clone();
        let new_effects = reduce_resolve(&mut resolver, action);

        if resolver != previous {
            state.set(resolver);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let resolver = ResolverContext {
        services,
        state,
        effects,
        dispatch,
    };

    provide_context(resolver);
    effect_executor::install(resolver);

    children().into_view()
}

/// Returns the current [`ResolverContext`].
///
/// # Panics
///
/// Panics if called outside [`ResolverProvider`].
pub fn use_resolver() -> ResolverContext {
    use_context::<ResolverContext>().expect("ResolverContext not provided")
}
