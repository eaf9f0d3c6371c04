use figment::Jail;
use stay_config::StayConfig;

#[test]
fn cli_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "STAY_API__BASE_URL".to_string(),
            "https://from-flag.example/".to_string(),
        )];

        let config = StayConfig::load_with_cli_overrides(&overrides).expect("config loads");
        assert_eq!(config.api.base_url, "https://from-flag.example/");
        Ok(())
    });
}

#[test]
fn cli_overrides_beat_process_env() {
    Jail::expect_with(|jail| {
        jail.set_env("STAY_API__BASE_URL", "https://from-env.example/");
        let overrides = vec![(
            "STAY_API__BASE_URL".to_string(),
            "https://from-flag.example/".to_string(),
        )];

        let config = StayConfig::load_with_cli_overrides(&overrides).expect("config loads");
        assert_eq!(config.api.base_url, "https://from-flag.example/");
        Ok(())
    });
}

#[test]
fn numeric_overrides_are_parsed() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "STAY_FORM__MINIMUM_NAME_CHARACTERS".to_string(),
            "7".to_string(),
        )];

        let config = StayConfig::load_with_cli_overrides(&overrides).expect("config loads");
        assert_eq!(config.form.minimum_name_characters, 7);
        Ok(())
    });
}

#[test]
fn unprefixed_overrides_are_ignored() {
    Jail::expect_with(|_jail| {
        let overrides = vec![("API__BASE_URL".to_string(), "nonsense".to_string())];

        let config = StayConfig::load_with_cli_overrides(&overrides).expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:1337/");
        Ok(())
    });
}
