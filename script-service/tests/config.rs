//! Configuration loading tests.
//!
//! Environment mutation is process-global, so the scenarios run inside a
//! single test body.

use script_service::config::ScriptConfig;

#[test]
fn provider_keys_are_required_at_startup() {
    // Both keys present: load succeeds with model defaults applied.
    std::env::set_var("GOOGLE_API_KEY", "test-google-key");
    std::env::set_var("GROQ_API_KEY", "test-groq-key");
    std::env::remove_var("IDEA_MODEL");
    std::env::remove_var("SCRIPT_MODEL");

    let config = ScriptConfig::load().expect("load should succeed with both keys set");
    assert_eq!(config.models.idea_model, "gemini-2.5-flash");
    assert_eq!(config.models.script_model, "openai/gpt-oss-20b");

    // Missing Google key: fatal.
    std::env::remove_var("GOOGLE_API_KEY");
    let err = ScriptConfig::load().expect_err("load should fail without GOOGLE_API_KEY");
    assert!(err.to_string().contains("GOOGLE_API_KEY"));

    // Missing Groq key: fatal.
    std::env::set_var("GOOGLE_API_KEY", "test-google-key");
    std::env::remove_var("GROQ_API_KEY");
    let err = ScriptConfig::load().expect_err("load should fail without GROQ_API_KEY");
    assert!(err.to_string().contains("GROQ_API_KEY"));
}
