use quizbot::{ConfigErrorKind, QuizConfig, QuizConfigBuilder, QuizErrorKind};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_defaults_fill_missing_fields() {
    let config = QuizConfig::from_toml(r##"channel = "#quiznight""##).expect("Valid config");

    assert_eq!(config.channel(), "#quiznight");
    assert_eq!(config.owner(), &None);
    assert_eq!(config.questions(), &PathBuf::from("questions.json"));
    assert_eq!(*config.next_question_delay_ms(), 3000);
    assert_eq!(*config.winning_score(), 5);
    assert_eq!(config.owner_name(), "quiznight");
}

#[test]
fn test_full_config() {
    let config = QuizConfig::from_toml(
        r#"
        channel = "quiznight"
        owner = "HostPerson"
        questions = "banks/general.json"
        next_question_delay_ms = 2000
        winning_score = 10
        "#,
    )
    .expect("Valid config");

    assert_eq!(config.owner_name(), "HostPerson");

    let engine = config.engine_config();
    assert_eq!(engine.owner(), "HostPerson");
    assert_eq!(*engine.winning_score(), 10);
    assert_eq!(*engine.next_question_delay(), Duration::from_secs(2));
    assert!(engine.is_owner("hostperson"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = QuizConfig::from_toml("winning_score = \"five\"").unwrap_err();
    assert!(matches!(err.kind(), QuizErrorKind::Config(_)));
}

#[test]
fn test_validation() {
    let err = QuizConfig::default().validate().unwrap_err();
    assert!(matches!(err.kind(), QuizErrorKind::Config(_)));

    let config = QuizConfigBuilder::default()
        .channel("#")
        .build()
        .expect("Valid builder");
    assert!(config.validate().is_err());

    let config = QuizConfigBuilder::default()
        .channel("quiznight")
        .winning_score(0u32)
        .build()
        .expect("Valid builder");
    assert!(config.validate().is_err());

    let config = QuizConfigBuilder::default()
        .channel("quiznight")
        .build()
        .expect("Valid builder");
    assert!(config.validate().is_ok());
}

#[test]
fn test_overrides() {
    let vars: HashMap<&str, &str> = [
        ("QUIZBOT_CHANNEL", "#othernight"),
        ("QUIZBOT_OWNER", "cohost"),
        ("QUIZBOT_QUESTIONS", "/tmp/q.json"),
    ]
    .into_iter()
    .collect();

    let mut config = QuizConfig::from_toml(r#"channel = "quiznight""#).expect("Valid config");
    config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(config.channel(), "#othernight");
    assert_eq!(config.owner_name(), "cohost");
    assert_eq!(config.questions(), &PathBuf::from("/tmp/q.json"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "channel = \"quiznight\"").expect("Write");
    writeln!(file, "winning_score = 3").expect("Write");

    let config = QuizConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.winning_score(), 3);

    assert!(QuizConfig::from_file("/definitely/not/here.toml").is_err());
}

#[test]
fn test_config_errors_name_the_problem() {
    let err = QuizConfig::from_toml("winning_score = \"five\"").unwrap_err();
    let QuizErrorKind::Config(config) = err.kind() else {
        panic!("Expected config error, got {:?}", err.kind());
    };
    assert!(matches!(config.kind(), ConfigErrorKind::Toml(_)));

    let config = QuizConfigBuilder::default()
        .channel("quiznight")
        .winning_score(0u32)
        .build()
        .expect("Valid builder");
    let err = config.validate().unwrap_err();
    let QuizErrorKind::Config(config) = err.kind() else {
        panic!("Expected config error, got {:?}", err.kind());
    };
    assert_eq!(
        config.kind(),
        &ConfigErrorKind::Invalid {
            field: "winning_score",
            reason: "must be at least 1".to_string(),
        }
    );

    let err = QuizConfig::default().validate().unwrap_err();
    assert!(err.to_string().contains("Invalid `channel`"));

    let err = QuizConfig::from_file("/definitely/not/here.toml").unwrap_err();
    let QuizErrorKind::Config(config) = err.kind() else {
        panic!("Expected config error, got {:?}", err.kind());
    };
    assert!(matches!(
        config.kind(),
        ConfigErrorKind::Read { path, .. } if path.ends_with("here.toml")
    ));
}
