use futures::{Stream, TryStreamExt};

use crate::JobSearchError;

/// Offset/limit window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub count: usize,
}

impl PageWindow {
    /// Negative bounds are rejected rather than read as an empty page.
    pub fn new(start: i64, count: i64) -> Result<Self, JobSearchError> {
        match (usize::try_from(start), usize::try_from(count)) {
            (Ok(start), Ok(count)) => Ok(Self { start, count }),
            _ => Err(JobSearchError::InvalidPagination { start, count }),
        }
    }
}

/// Pull rows off `rows` in two phases: the first `window.start` are dropped
/// without being handed to `map_row`, then up to `window.count` are mapped.
/// The stream is not polled past the last row of the window.
pub async fn take_page<S, R, T, E, F>(
    mut rows: S,
    window: PageWindow,
    mut map_row: F,
) -> Result<Vec<T>, E>
where
    S: Stream<Item = Result<R, E>> + Unpin,
    F: FnMut(R) -> Result<T, E>,
{
    for _ in 0..window.start {
        if rows.try_next().await?.is_none() {
            return Ok(Vec::new());
        }
    }

    // count is caller supplied; don't let it size the allocation
    let mut page = Vec::with_capacity(window.count.min(256));
    while page.len() < window.count {
        match rows.try_next().await? {
            Some(row) => page.push(map_row(row)?),
            None => break,
        }
    }

    Ok(page)
}
