use super::*;
use std::collections::HashMap;

#[test]
fn test_defaults_when_file_missing() {
    let cfg = read_file("/nonexistent/__chuckbot_config__.toml").unwrap();
    assert_eq!(cfg.bot.name, "Chuck Bot");
    assert_eq!(cfg.bot.log_level, "info");
    assert!(cfg.channel.telegram.is_none());
    assert_eq!(cfg.translator.region, "global");
    assert_eq!(cfg.translator.api_version, "3.0");
    assert_eq!(cfg.jokes.selector, ".m-detail--body li");
    assert_eq!(cfg.memory.backend, "sqlite");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [channel.telegram]
        enabled = true
        bot_token = "123:abc"
        allowed_users = [7, 8]

        [translator]
        api_key = "secret"
        timeout_secs = 5

        [memory]
        backend = "memory"
        "#,
    )
    .unwrap();

    let cfg = read_file(path.to_str().unwrap()).unwrap();
    let tg = cfg.channel.telegram.unwrap();
    assert!(tg.enabled);
    assert_eq!(tg.bot_token, "123:abc");
    assert_eq!(tg.allowed_users, vec![7, 8]);
    assert_eq!(cfg.translator.api_key, "secret");
    assert_eq!(cfg.translator.timeout_secs, 5);
    assert_eq!(
        cfg.translator.endpoint,
        "https://api.cognitive.microsofttranslator.com"
    );
    assert_eq!(cfg.memory.backend, "memory");
    assert_eq!(cfg.memory.db_path, "~/.chuckbot/data/sessions.db");
    assert_eq!(cfg.jokes.timeout_secs, 30);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bot\nname = ").unwrap();
    let err = read_file(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ChuckError::Config(_)));
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = [
        ("BOT_TOKEN", "999:xyz"),
        ("TRANSLATOR_KEY", "k"),
        ("TRANSLATOR_API_ENDPOINT", "https://example.test"),
        ("JOKE_SERVICE_URL", "https://jokes.test/page"),
    ]
    .into_iter()
    .collect();

    let mut cfg = Config::default();
    cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

    let tg = cfg.channel.telegram.unwrap();
    assert!(tg.enabled);
    assert_eq!(tg.bot_token, "999:xyz");
    assert_eq!(cfg.translator.api_key, "k");
    assert_eq!(cfg.translator.endpoint, "https://example.test");
    assert_eq!(cfg.jokes.url, "https://jokes.test/page");
}

#[test]
fn test_empty_env_values_ignored() {
    let mut cfg = Config::default();
    cfg.translator.api_key = "from-file".to_string();
    cfg.apply_overrides(|k| match k {
        "TRANSLATOR_KEY" => Some("  ".to_string()),
        "BOT_TOKEN" => Some(String::new()),
        _ => None,
    });
    assert_eq!(cfg.translator.api_key, "from-file");
    assert!(cfg.channel.telegram.is_none());
}

#[test]
fn test_bot_token_override_keeps_allowed_users() {
    let mut cfg = Config::default();
    cfg.channel.telegram = Some(TelegramConfig {
        enabled: false,
        bot_token: String::new(),
        allowed_users: vec![1],
    });
    cfg.apply_overrides(|k| (k == "BOT_TOKEN").then(|| "t".to_string()));
    let tg = cfg.channel.telegram.unwrap();
    assert!(tg.enabled);
    assert_eq!(tg.allowed_users, vec![1]);
}

#[test]
fn test_shellexpand_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let expanded = shellexpand("~/x/y.db");
        assert_eq!(expanded, format!("{}/x/y.db", home.to_string_lossy()));
    }
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
}
