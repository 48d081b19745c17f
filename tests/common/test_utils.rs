use std::sync::Once;

static INIT: Once = Once::new();

/// Install the tracing subscriber once for the whole test binary.
/// Run with RUST_LOG=debug to see per-operation slot logging.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Generate consistent test elements.
#[allow(dead_code)]
pub fn generate_test_elements(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("test_element_{i:06}").into_bytes())
        .collect()
}
