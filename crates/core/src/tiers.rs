//! Priority-ordered fallback chains.
//!
//! A [`Tier`] is a named, lazily-evaluated probe that either yields a value
//! or stays silent. [`first_signal`] runs tiers one after another and stops
//! at the first one that yields. Later tiers are fallbacks, not independent
//! signals, so they are never started early or raced.

use std::future::Future;

use futures::future::{BoxFuture, FutureExt};

/// A value together with the name of the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal<T> {
    pub tier: &'static str,
    pub value: T,
}

type Probe<'a, T> = Box<dyn FnOnce() -> BoxFuture<'a, Option<T>> + Send + 'a>;

/// One step of a fallback chain.
pub struct Tier<'a, T> {
    name: &'static str,
    probe: Probe<'a, T>,
}

impl<'a, T: 'a> Tier<'a, T> {
    /// Wrap an async probe. The closure is not called until the chain
    /// reaches this tier.
    pub fn new<F, Fut>(name: &'static str, probe: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Option<T>> + Send + 'a,
    {
        Self {
            name,
            probe: Box::new(move || probe().boxed()),
        }
    }

    /// Wrap a synchronous check.
    pub fn sync<F>(name: &'static str, check: F) -> Self
    where
        F: FnOnce() -> Option<T> + Send + 'a,
        T: Send,
    {
        Self::new(name, move || futures::future::ready(check()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Run `tiers` in order and return the first signal, or `None` when every
/// tier is silent.
pub async fn first_signal<'a, T, I>(tiers: I) -> Option<Signal<T>>
where
    I: IntoIterator<Item = Tier<'a, T>>,
    T: 'a,
{
    for tier in tiers {
        let name = tier.name();
        match (tier.probe)().await {
            Some(value) => {
                tracing::debug!(tier = name, "Tier produced a signal");
                return Some(Signal { tier: name, value });
            }
            None => tracing::debug!(tier = name, "Tier silent, falling back"),
        }
    }
    None
}
