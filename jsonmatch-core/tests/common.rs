use jsonmatch_core::{AssertionError, Node};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Routes engine logs to the test output when RUST_LOG is set.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn node(value: Value) -> Node {
    Node::from(value)
}

/// Key paths of every mismatch in a failed assertion, in report order.
#[allow(dead_code)]
pub fn failing_paths(result: Result<(), AssertionError>) -> Vec<String> {
    match result {
        Ok(()) => panic!("assertion unexpectedly passed"),
        Err(AssertionError::Setup(err)) => panic!("unexpected setup error: {err}"),
        Err(AssertionError::Mismatch(comparison)) => comparison
            .mismatches()
            .iter()
            .map(|m| m.key_path.to_string())
            .collect(),
    }
}
