#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts pricegrid::app::run in the background with PRICEGRID_TEST_HEADLESS=1.
// - Points the catalog at a closed local port so the initial load fails fast.
// - If the task finishes it must return Ok(()); otherwise abort and require a clean cancel.

use std::time::Duration;

use pricegrid::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("PRICEGRID_TEST_HEADLESS", "1");
    }

    let settings = Settings {
        catalog_endpoint: "http://127.0.0.1:9/products".to_string(),
        request_timeout_secs: 1,
        ..Settings::default()
    };
    let handle = tokio::spawn(async move { pricegrid::app::run(settings).await });

    tokio::time::sleep(Duration::from_millis(300)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
