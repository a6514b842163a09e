#![allow(deprecated)]
use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

fn recorder() -> Command {
    let mut cmd = Command::cargo_bin("deploy-recorder").unwrap();
    cmd.env_remove("SDK_DAEMON_URL")
        .env_remove("SDK_TIMEOUT_SECS")
        .env_remove("OPS_SDK_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// without a daemon
// ---------------------------------------------------------------------------

#[test]
fn prompts_and_confirms() {
    recorder()
        .write_stdin("payments-api\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Which application do you want to deploy?",
        ))
        .stdout(predicate::str::contains(
            "🚀 payments-api's successful deployment has been recorded!",
        ));
}

#[test]
fn reprompts_until_name_given() {
    recorder()
        .write_stdin("\n\nbilling\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a value."))
        .stdout(predicate::str::contains("billing's successful deployment"));
}

#[test]
fn whitespace_name_is_recorded_as_entered() {
    recorder()
        .write_stdin("  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a value.").not())
        .stdout(predicate::str::contains("🚀   's successful deployment"));
}

#[test]
fn closed_stdin_fails() {
    recorder()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: failed to read repository name"))
        .stdout(predicate::str::contains("successful deployment").not());
}

// ---------------------------------------------------------------------------
// with a daemon
// ---------------------------------------------------------------------------

#[test]
fn sends_event_to_daemon() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/track")
        .match_body(Matcher::Json(json!({
            "tags": [],
            "event": "",
            "metadata": {
                "event_name": "deployment",
                "event_action": "succeeded",
                "branch": "main",
                "repo": "payments-api"
            }
        })))
        .with_status(200)
        .create();

    recorder()
        .env("SDK_DAEMON_URL", server.url())
        .write_stdin("payments-api\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("payments-api's successful deployment"));

    mock.assert();
}

#[test]
fn daemon_rejection_is_fatal() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("POST", "/track").with_status(500).create();

    recorder()
        .env("SDK_DAEMON_URL", server.url())
        .write_stdin("web\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to record deployment of 'web'"))
        .stdout(predicate::str::contains("successful deployment").not());
}

#[test]
fn bad_timeout_config_is_fatal() {
    recorder()
        .env("SDK_TIMEOUT_SECS", "later")
        .write_stdin("web\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load sdk config"));
}
