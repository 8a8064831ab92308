use worktime::Rules;
use worktime::config::Config;

#[test]
fn missing_fields_take_defaults() {
    let cfg = Config::from_yaml("data_file: /tmp/worktime_cfg_test.json\n").expect("parse");

    assert_eq!(cfg.data_file, "/tmp/worktime_cfg_test.json");
    assert_eq!(cfg.rounding_minutes, 1);
    assert_eq!(cfg.fixed_break_minutes, 60);
    assert_eq!(cfg.default_hourly_rate, None);
    assert_eq!(cfg.rules(), Rules::default());
}

#[test]
fn rules_follow_config() {
    let cfg = Config::from_yaml(
        "rounding_minutes: 15\novertime_threshold_hours: 7.5\ndefault_hourly_rate: 1200\n",
    )
    .expect("parse");

    let rules = cfg.rules();
    assert_eq!(rules.rounding_minutes, 15);
    assert_eq!(rules.overtime_threshold_minutes, 450);
    assert_eq!(cfg.default_hourly_rate, Some(1200.0));
}

#[test]
fn negative_values_are_rejected() {
    assert!(Config::from_yaml("default_hourly_rate: -3\n").is_err());
    assert!(Config::from_yaml("overtime_threshold_hours: -1\n").is_err());
    assert!(Config::from_yaml("rounding_minutes: -5\n").is_err());
}

#[test]
fn yaml_round_trip() {
    let cfg = Config::default();
    let yaml = serde_yaml::to_string(&cfg).expect("serialize");
    assert_eq!(Config::from_yaml(&yaml).expect("parse back"), cfg);
}

#[test]
fn data_path_tilde_expansion() {
    use std::path::PathBuf;
    use worktime::utils::path::expand_tilde;

    assert_eq!(expand_tilde("/tmp/work_data.json"), PathBuf::from("/tmp/work_data.json"));
    assert_eq!(expand_tilde("~other/data.json"), PathBuf::from("~other/data.json"));
    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/work_data.json"), home.join("work_data.json"));
        assert_eq!(expand_tilde("~"), home);
    }
}
