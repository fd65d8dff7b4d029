//! Configuration loading tests.
//!
//! The environment is process-global, so everything runs in one test to
//! keep set/remove from racing across test threads.

use wordcount::config::Config;

#[test]
fn config_from_env_defaults_overrides_and_validation() {
    unsafe {
        std::env::remove_var("WORDCOUNT_MAX_IN_FLIGHT");
        std::env::remove_var("WORDCOUNT_HTTP_TIMEOUT_SECS");
    }

    // Defaults
    let config = Config::from_env().expect("defaults load");
    assert_eq!(config.max_in_flight, 5);
    assert_eq!(config.http_timeout.as_secs(), 30);
    assert!(!config.log_level.is_empty());

    // Overrides
    unsafe {
        std::env::set_var("WORDCOUNT_MAX_IN_FLIGHT", "8");
        std::env::set_var("WORDCOUNT_HTTP_TIMEOUT_SECS", "2");
    }
    let config = Config::from_env().expect("overrides load");
    assert_eq!(config.max_in_flight, 8);
    assert_eq!(config.http_timeout.as_secs(), 2);

    // Malformed value fails fast
    unsafe {
        std::env::set_var("WORDCOUNT_MAX_IN_FLIGHT", "many");
    }
    assert!(Config::from_env().is_err());

    // Zero is rejected
    unsafe {
        std::env::set_var("WORDCOUNT_MAX_IN_FLIGHT", "0");
    }
    assert!(Config::from_env().is_err());

    // Clean up
    unsafe {
        std::env::remove_var("WORDCOUNT_MAX_IN_FLIGHT");
        std::env::remove_var("WORDCOUNT_HTTP_TIMEOUT_SECS");
    }
}
