use fit_config::FitConfig;

use crate::cli::OutputFormat;

/// Emit warnings for likely mistyped settings that silently fell back to defaults.
pub fn warn_unconfigured(config: &FitConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FitConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.advisory.is_configured() && has_env_prefix(&env_keys, "FITCHECK_ADVISORY") {
        warnings.push(
            "Advisory config appears default while FITCHECK_ADVISORY* env vars exist. Use double underscores (example: FITCHECK_ADVISORY__ENDPOINT)."
                .to_string(),
        );
    }

    let format = config.general.default_format.as_str();
    if OutputFormat::from_config(format) == OutputFormat::Json
        && !format.eq_ignore_ascii_case("json")
    {
        warnings.push(format!(
            "general.default_format '{format}' is not one of json, table, raw; using json."
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
