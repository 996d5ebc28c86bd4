//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{
    reducer::{ResolveAction, ResolveEffect},
    runtime_context::ResolverContext,
};

/// Installs the executor that drains reducer-emitted effects in order.
pub fn install(resolver: ResolverContext) {
    // Clear the queue before draining so dispatches from completed queries enqueue a fresh batch.
    create_effect(move |_| {
        let queued = resolver.effects.get();
        if queued.is_empty() {
            return;
        }

        resolver.effects.set(Vec::new());

        for effect in queued {
            run_effect(resolver, effect);
        }
    });
}

fn run_effect(resolver: ResolverContext, effect: ResolveEffect) {
    match effect {
        ResolveEffect::IssueQuery { ticket, key } => {
            let services = resolver.services.get_value();
            spawn_local(async move {
                let result = services.query.query_listing(&key).await;
                resolver.dispatch_action(ResolveAction::Resolved { ticket, result });
            });
        }
        ResolveEffect::DiscardStale { ticket, latest } => {
            logging::log!("discarded listing response #{ticket}; latest request is #{latest}");
        }
        ResolveEffect::ReportDuplicates { key, paths } => {
            logging::warn!(
                "listing for `{}` repeated {} path(s): {}",
                key.path,
                paths.len(),
                paths.join(", ")
            );
        }
        ResolveEffect::ReportFailure {
            key: Some(key),
            error,
        } => logging::warn!("listing resolve failed for `{}`: {error}", key.path),
        ResolveEffect::ReportFailure { key: None, error } => {
            logging::warn!("navigation rejected: {error}")
        }
    }
}
