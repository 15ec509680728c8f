use continuum_core::config::ObservabilityConfig;
use continuum_engine::tracing_setup::{init_tracing, spans::names, LOG_ENV};

#[test]
fn second_init_is_a_no_op() {
    let config = ObservabilityConfig {
        log_level: "continuum_engine=debug".to_string(),
        json_logs: true,
    };
    let first = init_tracing(&config);
    let second = init_tracing(&ObservabilityConfig::default());
    assert!(first);
    assert!(!second);
}

#[test]
fn span_names_are_namespaced() {
    assert_eq!(LOG_ENV, "CONTINUUM_LOG");
    for name in [names::CYCLE, names::BATCH, names::STORAGE] {
        assert!(name.starts_with("continuum."));
    }
}
