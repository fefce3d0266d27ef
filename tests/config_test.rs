//! Configuration system tests.

use resdash_lib::core::{Config, ConfigBuilder};
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.simulation.tick_interval, Duration::from_millis(1000));
    assert_eq!(config.simulation.history_window, 30);
    assert_eq!(config.simulation.alert_capacity, 5);
    assert_eq!(config.simulation.alert_threshold, 0.8);
    assert!(config.ui.vim_mode);
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .tick_interval(Duration::from_millis(500))
        .history_window(45)
        .alert_capacity(8)
        .alert_threshold(0.5)
        .debug(true)
        .build()
        .unwrap();

    assert_eq!(config.simulation.tick_interval, Duration::from_millis(500));
    assert_eq!(config.simulation.history_window, 45);
    assert_eq!(config.simulation.alert_capacity, 8);
    assert_eq!(config.simulation.alert_threshold, 0.5);
    assert!(config.debug);
}

#[test]
fn test_yaml_config() {
    let yaml = r#"
simulation:
  tick_interval: 250ms
  history_window: 60
  alert_capacity: 10
  alert_threshold: 0.9
ui:
  refresh_rate: 200ms
  theme: light
  vim_mode: false
logging:
  level: debug
"#;

    let config = ConfigBuilder::new()
        .from_yaml(yaml)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.simulation.tick_interval, Duration::from_millis(250));
    assert_eq!(config.simulation.history_window, 60);
    assert_eq!(config.simulation.alert_capacity, 10);
    assert_eq!(config.simulation.alert_threshold, 0.9);
    assert_eq!(config.ui.refresh_rate, Duration::from_millis(200));
    assert!(!config.ui.vim_mode);
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let yaml = r#"
simulation:
  history_window: 15
"#;

    let config = ConfigBuilder::new()
        .from_yaml(yaml)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.simulation.history_window, 15);
    // Untouched sections keep defaults.
    assert_eq!(config.simulation.tick_interval, Duration::from_millis(1000));
    assert_eq!(config.simulation.alert_capacity, 5);
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    // Invalid alert threshold
    let invalid = ConfigBuilder::new().alert_threshold(1.5).build();
    assert!(invalid.is_err());

    // Zero history window
    let invalid = ConfigBuilder::new().history_window(0).build();
    assert!(invalid.is_err());

    // Zero tick interval
    let invalid = ConfigBuilder::new()
        .tick_interval(Duration::from_millis(0))
        .build();
    assert!(invalid.is_err());

    // Zero alert capacity
    let invalid = ConfigBuilder::new().alert_capacity(0).build();
    assert!(invalid.is_err());
}

#[test]
fn test_invalid_yaml_rejected() {
    let result = ConfigBuilder::new().from_yaml("simulation: [not, a, map]");
    assert!(result.is_err());
}
