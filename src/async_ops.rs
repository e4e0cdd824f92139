//! Concurrent map and filter over ordered sequences
//!
//! Every helper here drives its futures from the caller's task. Nothing is
//! spawned, so callbacks may borrow from the caller and need not be `Send`.
//! Results always line up with the input order, never with completion order.
//!
//! The first callback error ends the whole operation and is returned to the
//! caller unchanged. Futures still in flight at that point are dropped.

use futures::pin_mut;
use futures::stream::{self, FuturesUnordered, Stream, StreamExt, TryStreamExt};
use std::future::Future;
use tracing::{debug, trace};

use crate::config::AsyncConfig;

/// Map every element through an async callback concurrently
///
/// The callback is invoked for each element in index order before any of
/// the returned futures is awaited; the futures then run concurrently.
///
/// # Arguments
///
/// * `items` - Elements to transform
/// * `f` - Callback receiving the element and its index
///
/// # Returns
///
/// Results in input order, or the first error produced by the callback
///
/// # Examples
///
/// ```
/// use infogata_utils::map_async;
///
/// let doubled = tokio_test::block_on(map_async(vec![1, 2, 3], |n, _| async move {
///     Ok::<_, std::convert::Infallible>(n * 2)
/// }))
/// .unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub async fn map_async<I, U, E, F, Fut>(items: I, mut f: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    let pending: FuturesUnordered<_> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| indexed(index, f(item, index)))
        .collect();

    debug!(count = pending.len(), "Awaiting async map");
    let results = collect_in_order(pending).await?;
    trace!(count = results.len(), "Async map completed");
    Ok(results)
}

/// Keep the elements for which an async predicate holds
///
/// Evaluates the predicate for all elements concurrently through
/// [`map_async`], then keeps the matching elements in their original order.
///
/// # Examples
///
/// ```
/// use infogata_utils::filter_async;
///
/// let words = ["apple", "banana", "cherry", "date"];
/// let long = tokio_test::block_on(filter_async(&words, |word, _| async move {
///     Ok::<_, std::convert::Infallible>(word.len() > 5)
/// }))
/// .unwrap();
/// assert_eq!(long, vec![&"banana", &"cherry"]);
/// ```
pub async fn filter_async<'a, T, E, F, Fut>(items: &'a [T], predicate: F) -> Result<Vec<&'a T>, E>
where
    F: FnMut(&'a T, usize) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let keep = map_async(items, predicate).await?;
    Ok(select_kept(items, keep))
}

/// Like [`map_async`], with at most `max_parallel` futures in flight
///
/// A limit of zero is treated as one. Callbacks are invoked lazily as
/// slots free up, still in index order.
pub async fn map_async_bounded<I, U, E, F, Fut>(
    items: I,
    max_parallel: usize,
    mut f: F,
) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    let limit = max_parallel.max(1);
    debug!(limit, "Awaiting bounded async map");

    let completed = stream::iter(items.into_iter().enumerate())
        .map(|(index, item)| indexed(index, f(item, index)))
        .buffer_unordered(limit);
    pin_mut!(completed);

    collect_in_order(completed).await
}

/// Like [`filter_async`], with at most `max_parallel` predicates in flight
pub async fn filter_async_bounded<'a, T, E, F, Fut>(
    items: &'a [T],
    max_parallel: usize,
    predicate: F,
) -> Result<Vec<&'a T>, E>
where
    F: FnMut(&'a T, usize) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let keep = map_async_bounded(items, max_parallel, predicate).await?;
    Ok(select_kept(items, keep))
}

/// Map with the concurrency limit taken from `config`
///
/// Unbounded when `config.max_parallel` is `None`.
pub async fn map_async_with<I, U, E, F, Fut>(
    items: I,
    config: &AsyncConfig,
    f: F,
) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    match config.max_parallel {
        Some(limit) => map_async_bounded(items, limit, f).await,
        None => map_async(items, f).await,
    }
}

async fn indexed<U, E, Fut>(index: usize, future: Fut) -> Result<(usize, U), E>
where
    Fut: Future<Output = Result<U, E>>,
{
    future.await.map(|value| (index, value))
}

/// Gather results as they complete, returning the first error to arrive
///
/// Results are placed back by index, so completion order never leaks out.
async fn collect_in_order<S, U, E>(mut completed: S) -> Result<Vec<U>, E>
where
    S: Stream<Item = Result<(usize, U), E>> + Unpin,
{
    let mut slots: Vec<Option<U>> = Vec::new();

    while let Some((index, value)) = completed.try_next().await? {
        if index >= slots.len() {
            slots.resize_with(index + 1, || None);
        }
        slots[index] = Some(value);
    }

    Ok(slots.into_iter().flatten().collect())
}

fn select_kept<T>(items: &[T], keep: Vec<bool>) -> Vec<&T> {
    items
        .iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}
