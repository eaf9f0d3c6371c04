use stay_config::StayConfig;

const SECTIONS: [&str; 3] = ["API", "FORM", "SESSION"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &StayConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &StayConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("STAY_{section}_");
        let double = format!("STAY_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            let suggestion = key.replacen(&single, &double, 1);
            warnings.push(format!(
                "{key} is ignored. Sections are separated by double underscores (example: {suggestion})."
            ));
        }
    }

    if !config.session.path.is_empty() && config.session.path_override().is_none() {
        warnings.push(
            "session.path is blank; using the default ~/.stay/session.json".to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use stay_config::{SessionConfig, StayConfig};

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_section_keys() {
        let warnings = collect_unconfigured_warnings(
            &StayConfig::default(),
            env(&[
                "STAY_API_BASE_URL",
                "STAY_FORM_MINIMUM_NAME_CHARACTERS",
                "STAY_SESSION_PATH",
            ]),
        );

        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("STAY_API__BASE_URL"));
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let warnings = collect_unconfigured_warnings(
            &StayConfig::default(),
            env(&["STAY_API__BASE_URL", "STAY_LOG", "PATH"]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_for_whitespace_session_path() {
        let config = StayConfig {
            session: SessionConfig { path: "   ".into() },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(&config, env(&[]));
        assert_eq!(warnings.len(), 1);
    }
}
