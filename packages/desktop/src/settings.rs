use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use store::DiaryConfig;

/// Layered client settings: built-in defaults, then `diary.toml` in the
/// working directory, then `DIARY_*` environment variables.
///
/// Nested keys use a double underscore, e.g. `DIARY_API__BASE_URL` or
/// `DIARY_NOTICES__RESPONSE_SECS`.
pub(crate) fn load() -> Result<DiaryConfig, ConfigError> {
    load_with(
        File::with_name(DiaryConfig::filename())
            .format(FileFormat::Toml)
            .required(false),
    )
}

fn load_with<S>(file: S) -> Result<DiaryConfig, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let defaults = DiaryConfig::default();
    let config = Config::builder()
        .set_default("api.base_url", defaults.api.base_url)?
        .set_default("notices.error_secs", defaults.notices.error_secs)?
        .set_default("notices.response_secs", defaults.notices.response_secs)?
        .set_default("notices.success_secs", defaults.notices.success_secs)?
        .set_default("insights.top_words", defaults.insights.top_words as u64)?
        .add_source(file)
        .add_source(
            Environment::with_prefix("DIARY")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("DIARY_API__BASE_URL", "https://diary.example.com/api");
        set_var("DIARY_NOTICES__RESPONSE_SECS", "12");
        let settings = load().unwrap_or_default();
        assert_eq!(settings.api.base_url, "https://diary.example.com/api");
        assert_eq!(settings.notices.response_secs, 12);
        assert_eq!(settings.notices.error_secs, 5);
        assert_eq!(settings.insights.top_words, 50);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = File::from_str(
            r#"
            [notices]
            success_secs = 9

            [insights]
            top_words = 100
            "#,
            FileFormat::Toml,
        );
        let settings = load_with(file).unwrap();
        assert_eq!(settings.notices.success_secs, 9);
        assert_eq!(settings.notices.error_secs, 5);
        assert_eq!(settings.insights.top_words, 100);
        assert_eq!(settings.insights.word_limit(), 50);
    }
}
