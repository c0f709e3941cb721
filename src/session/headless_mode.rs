//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{Event, EventType};
use crate::report;
use crate::state::TokenomicsState;
use futures::future::join_all;
use std::error::Error;

/// Runs the fetches once, logging events to the console, then prints the
/// resulting dashboard as text. Ctrl+C cancels whatever is still in flight.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.base_url);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let state = collect_state(session, |event| {
        if event.should_display() {
            println!("{}", event);
        }
    })
    .await;

    print_session_shutdown();
    println!("{}", report::render_text(&state));
    print_session_exit_success();

    Ok(())
}

/// Applies every event of the session's fetches to a fresh state, handing
/// each event to `on_event` on the way. Returns once every fetch has either
/// settled or been cancelled.
pub async fn collect_state<F>(mut session: SessionData, mut on_event: F) -> TokenomicsState
where
    F: FnMut(&Event),
{
    let mut state = TokenomicsState::new();
    let fetches = join_all(std::mem::take(&mut session.join_handles));
    tokio::pin!(fetches);

    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                apply_event(&mut state, event, &mut on_event);
            }
            _ = &mut fetches => break,
        }
    }

    // Tasks send before they finish, so anything left is already queued.
    while let Ok(event) = session.event_receiver.try_recv() {
        apply_event(&mut state, event, &mut on_event);
    }
    state
}

fn apply_event<F: FnMut(&Event)>(state: &mut TokenomicsState, mut event: Event, on_event: &mut F) {
    if event.event_type == EventType::Success {
        if let Some(slice) = event.slice.take() {
            state.apply(slice);
        }
    }
    on_event(&event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTokenomicsApi;
    use crate::api::error::ApiError;
    use crate::model::{LiquidityBucket, TokenomicsSummary};
    use crate::session::setup::setup_session_with_api;
    use std::sync::Arc;

    fn mock_api() -> MockTokenomicsApi {
        let mut api = MockTokenomicsApi::new();
        api.expect_base_url()
            .return_const("http://test.invalid".to_string());
        api.expect_get_balances_by_type().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        api.expect_get_supply_liquidity().returning(|| {
            Ok(vec![LiquidityBucket {
                wallet_type_name: "liquid".to_string(),
                balance: 5.0,
            }])
        });
        api.expect_get_tokenomics().returning(|| {
            Ok(TokenomicsSummary {
                total_balance: Some(99.0),
                ..Default::default()
            })
        });
        api
    }

    #[tokio::test]
    // Successful fetches land in the state; the failed one leaves its slice alone.
    async fn test_collect_state_applies_successes() {
        let session = setup_session_with_api(Arc::new(mock_api()));
        assert_eq!(session.base_url, "http://test.invalid");

        let mut seen = Vec::new();
        let state = collect_state(session, |e| seen.push(e.event_type)).await;

        assert!(state.balances_by_type.is_empty());
        assert_eq!(state.supply_liquidity.len(), 1);
        assert_eq!(state.summary.total_balance, Some(99.0));
        assert_eq!(seen.iter().filter(|t| **t == EventType::Refresh).count(), 3);
        assert_eq!(seen.iter().filter(|t| **t == EventType::Success).count(), 2);
        assert_eq!(seen.iter().filter(|t| **t == EventType::Error).count(), 1);
    }
}
