use futures::future::{self, BoxFuture, FutureExt};
use std::future::Future;
use std::sync::Arc;

/// Runs a prefix invocation with the triggering message and its argument tokens.
pub type PrefixHandler<M> = Arc<dyn Fn(M, Vec<String>) -> BoxFuture<'static, ()> + Send + Sync>;

/// Runs a slash invocation with the triggering interaction.
pub type SlashHandler<I> = Arc<dyn Fn(I) -> BoxFuture<'static, ()> + Send + Sync>;

pub fn prefix_handler<M, F, Fut>(f: F) -> PrefixHandler<M>
where
    F: Fn(M, Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move |message: M, args: Vec<String>| f(message, args).boxed())
}

pub fn slash_handler<I, F, Fut>(f: F) -> SlashHandler<I>
where
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move |interaction: I| f(interaction).boxed())
}

pub(crate) fn noop() -> BoxFuture<'static, ()> {
    future::ready(()).boxed()
}
