use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn chirp_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("chirp"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    chirp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("microblog"));
}

#[test]
fn test_version() {
    chirp_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chirp"));
}

// =============================================================================
// Query / Mutate
// =============================================================================

#[test]
fn test_query_all_tweets() {
    chirp_cmd()
        .args(["query", "{ allTweets { id text } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Tweet"))
        .stdout(predicate::str::contains("Second Tweet"));
}

#[test]
fn test_query_tweet_by_id() {
    chirp_cmd()
        .args(["query", r#"{ tweet(id: "2") { text } }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second Tweet"));
}

#[test]
fn test_query_with_variables() {
    chirp_cmd()
        .args([
            "query",
            "query Tweet($id: ID!) { tweet(id: $id) { text } }",
            "--variables",
            r#"{"id": "1"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Tweet"));
}

#[test]
fn test_mutate_post_tweet() {
    chirp_cmd()
        .args(["mutate", r#"postTweet(text: "Hi", userId: "1") { id text }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "3""#))
        .stdout(predicate::str::contains("Hi"));
}

#[test]
fn test_mutate_missing_argument_reports_error() {
    chirp_cmd()
        .args(["mutate", r#"postTweet(text: "Hi") { id }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_disables_seeding() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("chirp.toml");
    std::fs::write(&config_path, "[store]\nseed = false\n").unwrap();

    chirp_cmd()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["query", "{ allTweets { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""allTweets": []"#));
}

#[test]
fn test_missing_explicit_config_fails() {
    chirp_cmd()
        .args(["--config", "/nonexistent/chirp.toml"])
        .args(["query", "{ allTweets { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
