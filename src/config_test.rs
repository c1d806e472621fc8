use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__LP_TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__LP_TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__LP_TEST_EB_CI_311__";
    unsafe { std::env::set_var(key, "  YES ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__LP_TEST_EB_INVALID_312__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__LP_TEST_EB_SURELY_UNSET_313__"), None);
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_reads_valid_value() {
    let key = "__LP_TEST_EP_VALID_401__";
    unsafe { std::env::set_var(key, "250") };
    assert_eq!(env_parse(key, 7_u64), 250);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__LP_TEST_EP_GARBAGE_402__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse(key, 7_u64), 7);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_when_unset() {
    assert_eq!(env_parse("__LP_TEST_EP_UNSET_403__", 3000_u16), 3000);
}

// =============================================================================
// PortalConfig
// =============================================================================

#[test]
fn default_config_matches_browser_latencies() {
    let config = PortalConfig::default();
    assert_eq!(config.port, 3000);
    assert_eq!(config.delays.chat_reply, Duration::from_millis(800));
    assert_eq!(config.delays.login, Duration::from_millis(1000));
    assert_eq!(config.delays.learner_signup, Duration::from_millis(1500));
    assert_eq!(config.delays.teacher_signup, Duration::from_millis(1000));
    assert!(!config.cookie_secure);
}

#[test]
fn immediate_config_has_no_delays() {
    let config = PortalConfig::immediate();
    assert_eq!(config.delays.chat_reply, Duration::ZERO);
    assert_eq!(config.delays.login, Duration::ZERO);
    assert_eq!(config.delays.learner_signup, Duration::ZERO);
    assert_eq!(config.delays.teacher_signup, Duration::ZERO);
}

#[test]
fn default_config_sweeps_idle_conversations() {
    let config = PortalConfig::default();
    assert_eq!(config.conversation_idle, Duration::from_secs(1800));
    assert_eq!(config.sweep_interval, Duration::from_secs(60));
    assert_eq!(PortalConfig::immediate().conversation_idle, config.conversation_idle);
}
