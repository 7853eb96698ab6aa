//! Bounded-concurrency map over a slice.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::join_all;

/// Applies `f` to every item with at most `limit` calls in flight.
///
/// `limit` workers share one cursor: whichever worker is free claims the next
/// index, so one slow item never holds up the others. All workers are polled
/// on the caller's task. Returns once every item has been attempted, with
/// results in input order.
///
/// A `limit` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use prerank::map_bounded;
///
/// # #[tokio::main]
/// # async fn main() {
/// let doubled = map_bounded(&[1, 2, 3], 2, |n| async move { n * 2 }).await;
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # }
/// ```
pub async fn map_bounded<'a, T, R, F, Fut>(items: &'a [T], limit: usize, f: F) -> Vec<R>
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = R>,
{
    let cursor = AtomicUsize::new(0);
    let worker_count = limit.max(1).min(items.len());

    let workers = (0..worker_count).map(|_| {
        let cursor = &cursor;
        let f = &f;
        async move {
            let mut done = Vec::new();
            loop {
                let index = cursor.fetch_add(1, Ordering::SeqCst);
                let Some(item) = items.get(index) else {
                    break;
                };
                done.push((index, f(item).await));
            }
            done
        }
    });

    let mut indexed: Vec<(usize, R)> = join_all(workers).await.into_iter().flatten().collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, result)| result).collect()
}
