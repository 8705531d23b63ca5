//! Probabilistic run gate.
//!
//! The external trigger fires on a fixed short cadence; skipping a random
//! fraction of invocations stretches the effective probe interval and makes
//! it irregular, without the monitor needing a scheduler of its own. A
//! skipped invocation performs no probe, logs nothing, and notifies nobody.

/// One Bernoulli draw against `probability`.
///
/// Probabilities at or below 0.0 always skip; at or above 1.0 always run,
/// so the endpoints are deterministic rather than subject to float edge
/// behavior in the underlying generator.
pub fn should_run(probability: f64) -> bool {
    if probability >= 1.0 {
        return true;
    }
    if probability <= 0.0 {
        return false;
    }
    fastrand::f64() < probability
}
