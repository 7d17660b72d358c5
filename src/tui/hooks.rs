//! Reusable hooks for TUI components

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::error::BoardError;
use crate::source::TicketSource;
use crate::tui::board::model::{BoardAction, BoardState, reduce_board_state};

/// Minimum time the loading state stays on screen
const MIN_LOADING_DISPLAY: Duration = Duration::from_millis(100);

/// Run one action through the board reducer and store the result
pub fn dispatch_board_action(board: &mut State<BoardState>, action: BoardAction, column_height: usize) {
    let current = board.read().clone();
    board.set(reduce_board_state(current, action, column_height));
}

/// Create an async handler that fetches a dataset for one load generation
///
/// The handler:
/// - Fetches tickets and users from the source
/// - Ensures minimum 100ms loading indicator display to prevent UI flicker
/// - Reports the outcome as `DatasetLoaded` or `FetchFailed` tagged with
///   the generation it was called with, so a superseded fetch is ignored
///
/// # Example
///
/// ```ignore
/// let load_handler: Handler<u64> =
///     hooks.use_async_handler(use_dataset_loader(board, source));
///
/// // Trigger load for the generation returned by `begin_load`
/// load_handler(generation);
/// ```
pub fn use_dataset_loader(
    board: State<BoardState>,
    source: Option<Arc<dyn TicketSource>>,
) -> impl Fn(u64) -> Pin<Box<dyn Future<Output = ()> + Send>> + Clone {
    move |generation| {
        let mut board = board;
        let source = source.clone();

        Box::pin(async move {
            let start = Instant::now();

            let result = match source {
                Some(source) => source.fetch().await,
                None => Err(BoardError::FetchFailure(
                    "no ticket source configured".to_string(),
                )),
            };

            // Ensure minimum 100ms display time to prevent flicker
            let elapsed = start.elapsed();
            if elapsed < MIN_LOADING_DISPLAY {
                tokio::time::sleep(MIN_LOADING_DISPLAY - elapsed).await;
            }

            let action = match result {
                Ok(dataset) => {
                    tracing::info!(
                        generation,
                        tickets = dataset.tickets.len(),
                        users = dataset.users.len(),
                        "dataset loaded"
                    );
                    BoardAction::DatasetLoaded {
                        generation,
                        dataset,
                    }
                }
                Err(e) => BoardAction::FetchFailed {
                    generation,
                    message: fetch_failure_detail(&e),
                },
            };

            dispatch_board_action(&mut board, action, 0);
        })
    }
}

/// Detail text for a failed fetch, without a repeated "failed to fetch" prefix
fn fetch_failure_detail(error: &BoardError) -> String {
    match error {
        BoardError::FetchFailure(detail) => detail.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_detail_strips_wrapper() {
        let err = BoardError::FetchFailure("HTTP 503".to_string());
        assert_eq!(fetch_failure_detail(&err), "HTTP 503");
        let err = BoardError::Other("boom".to_string());
        assert_eq!(fetch_failure_detail(&err), "boom");
    }
}
