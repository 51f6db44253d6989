//! Conditional parallel iteration.
//!
//! Uses rayon when the `parallel` feature is enabled and the caller asks
//! for it; otherwise falls back to a sequential iterator. Results always
//! come back in input order.

/// Maps `f` over `items`, in parallel when `parallel` is set and the
/// `parallel` feature is compiled in.
///
/// # Example
///
/// ```rust
/// use rootscan_math::parallel::maybe_parallel_map;
///
/// let squares = maybe_parallel_map(&[1, 2, 3], true, |x| x * x);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], parallel: bool, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel && items.len() > 1 {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
