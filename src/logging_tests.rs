use super::*;

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::WARN);
    assert!(!config.json_format);
}

#[test]
fn test_default_directive_targets_crate() {
    let config = LogConfig {
        log_level: Level::DEBUG,
        json_format: false,
    };
    assert_eq!(config.default_directive(), "git_remote_url=DEBUG");
}

#[test]
fn test_parse_level_known_names() {
    assert_eq!(parse_level("trace"), Level::TRACE);
    assert_eq!(parse_level("debug"), Level::DEBUG);
    assert_eq!(parse_level("info"), Level::INFO);
    assert_eq!(parse_level("warn"), Level::WARN);
    assert_eq!(parse_level("error"), Level::ERROR);
}

#[test]
fn test_parse_level_case_insensitive() {
    assert_eq!(parse_level("DEBUG"), Level::DEBUG);
    assert_eq!(parse_level(" Info "), Level::INFO);
}

#[test]
fn test_parse_level_unknown_defaults_to_warn() {
    assert_eq!(parse_level("verbose"), Level::WARN);
    assert_eq!(parse_level(""), Level::WARN);
}
