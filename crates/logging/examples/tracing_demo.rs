//! Forwards tracing events into the chanlog console sinks.
//!
//! Run with:
//!
//! ```text
//! LOG=warning cargo run --example tracing_demo --features tracing
//! ```

fn main() {
    chanlog::init();
    chanlog::init_tracing();

    tracing::trace!(target: "net", "probe sent");
    tracing::debug!(target: "net", "handshake accepted");
    tracing::info!(target: "startup", "listening on :8080");
    tracing::warn!(target: "disk", "87% full");
    tracing::error!(target: "worker", "task 17 failed");
}
