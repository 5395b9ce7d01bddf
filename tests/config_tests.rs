use timepairs::config::Config;

#[test]
fn test_partial_config_fills_missing_fields() {
    // a file that only overrides one field must still load
    let cfg: Config = serde_yaml::from_str("history_limit: 10").unwrap();
    assert_eq!(cfg.history_limit, 10);
    assert_eq!(cfg.store, Config::default().store);

    let cfg: Config = serde_yaml::from_str("store: /tmp/custom.json").unwrap();
    assert_eq!(cfg.store, "/tmp/custom.json");
    assert_eq!(cfg.history_limit, 50);
}

#[test]
fn test_config_round_trips_through_yaml() {
    let cfg = Config::default();
    let yaml = serde_yaml::to_string(&cfg).unwrap();
    let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(loaded.store, cfg.store);
    assert_eq!(loaded.history_limit, cfg.history_limit);
}
