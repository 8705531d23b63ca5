//! End-to-end probe flow tests against raw-TCP mock targets.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::net::TcpListener;

use upwatch::config::MonitorConfig;
use upwatch::monitor::CheckOutcome;
use upwatch::probe::{run_with_retries, ProbeExecutor, RetryPolicy};
use upwatch::Monitor;

mod common;

fn config_for(target: SocketAddr) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.target.url = format!("http://{}/", target);
    config.sampler.run_probability = 1.0;
    config.probe.timeout_ms = 2_000;
    config.retries.max_attempts = 3;
    config.retries.backoff_ms = 100;
    config
}

#[tokio::test]
async fn successful_check_measures_latency_and_logs_once() {
    let target: SocketAddr = "127.0.0.1:28411".parse().unwrap();
    common::start_mock_target(target, 200, Duration::from_millis(120)).await;

    let monitor = Monitor::new(config_for(target)).unwrap();
    let outcome = monitor.check().await.unwrap();

    match outcome {
        CheckOutcome::Completed { result, logs_count } => {
            assert!(result.success);
            assert_eq!(result.status_code, Some(200));
            assert!(result.error.is_none());
            assert!(
                result.response_time_ms >= 120,
                "measured {}ms, target delayed 120ms",
                result.response_time_ms
            );
            assert_eq!(logs_count, 1);
        }
        CheckOutcome::Skipped { .. } => panic!("p=1.0 must never skip"),
    }

    // a second check appends a second entry
    match monitor.check().await.unwrap() {
        CheckOutcome::Completed { logs_count, .. } => assert_eq!(logs_count, 2),
        CheckOutcome::Skipped { .. } => panic!("p=1.0 must never skip"),
    }
}

#[tokio::test]
async fn timeout_twice_then_success_takes_exactly_three_attempts() {
    let target: SocketAddr = "127.0.0.1:28421".parse().unwrap();
    let attempts = Arc::new(AtomicU32::new(0));
    let seen = attempts.clone();
    common::start_programmable_target(target, move || {
        let seen = seen.clone();
        async move {
            let attempt = seen.fetch_add(1, Ordering::SeqCst);
            if attempt < 2 {
                // sleep past the probe deadline; the probe abandons the
                // connection and this write goes nowhere
                tokio::time::sleep(Duration::from_millis(600)).await;
            }
            (200, "ok".to_string())
        }
    })
    .await;

    let executor = ProbeExecutor::new().unwrap();
    let policy = RetryPolicy {
        max_attempts: 3,
        backoff: Duration::from_millis(300),
        timeout: Duration::from_millis(200),
    };

    let start = Instant::now();
    let result = run_with_retries(&executor, &format!("http://{}/", target), &policy)
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert!(result.success, "third attempt should succeed: {:?}", result);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    // two full deadlines plus two backoffs must have passed
    assert!(
        elapsed >= Duration::from_millis(2 * 200 + 2 * 300),
        "elapsed only {:?}",
        elapsed
    );
}

#[tokio::test]
async fn http_error_response_is_authoritative_and_not_retried() {
    let target: SocketAddr = "127.0.0.1:28431".parse().unwrap();
    let attempts = Arc::new(AtomicU32::new(0));
    let seen = attempts.clone();
    common::start_programmable_target(target, move || {
        let seen = seen.clone();
        async move {
            seen.fetch_add(1, Ordering::SeqCst);
            (503, "unavailable".to_string())
        }
    })
    .await;

    let executor = ProbeExecutor::new().unwrap();
    let policy = RetryPolicy {
        max_attempts: 3,
        backoff: Duration::from_millis(100),
        timeout: Duration::from_millis(2_000),
    };

    let result = run_with_retries(&executor, &format!("http://{}/", target), &policy)
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.status_code, Some(503));
    assert_eq!(result.error.as_deref(), Some("HTTP 503: Service Unavailable"));
    assert_eq!(
        attempts.load(Ordering::SeqCst),
        1,
        "a received HTTP response must not be retried"
    );
}

#[tokio::test]
async fn unreachable_target_consumes_the_whole_budget() {
    let target: SocketAddr = "127.0.0.1:28441".parse().unwrap();
    let listener = TcpListener::bind(target).await.unwrap();
    let attempts = Arc::new(AtomicU32::new(0));
    let seen = attempts.clone();
    // accept and immediately drop every connection: a transport failure
    // with no HTTP response
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    seen.fetch_add(1, Ordering::SeqCst);
                    drop(socket);
                }
                Err(_) => break,
            }
        }
    });

    let executor = ProbeExecutor::new().unwrap();
    let policy = RetryPolicy {
        max_attempts: 3,
        backoff: Duration::from_millis(50),
        timeout: Duration::from_millis(2_000),
    };

    let result = run_with_retries(&executor, &format!("http://{}/", target), &policy)
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.status_code.is_none());
    assert!(result.error.is_some());
    assert!(result.is_retryable());
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn probe_presents_browser_fingerprint_with_no_cache() {
    let target: SocketAddr = "127.0.0.1:28451".parse().unwrap();
    let mut captured = common::start_capturing_target(target).await;

    let monitor = Monitor::new(config_for(target)).unwrap();
    monitor.check().await.unwrap();

    let request = captured.recv().await.expect("target saw no request");
    let head = request.to_ascii_lowercase();
    assert!(head.contains("user-agent: mozilla/5.0"));
    assert!(head.contains("accept: text/html"));
    assert!(head.contains("accept-language: en"));
    assert!(head.contains("cache-control: no-cache"));
    assert!(head.contains("pragma: no-cache"));

    // a first-try success never spends budget on a second attempt
    assert!(
        captured.try_recv().is_err(),
        "successful first attempt must not be followed by another"
    );
}
