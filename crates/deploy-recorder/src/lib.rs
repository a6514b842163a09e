pub mod event;

use anyhow::{Context, Result};
use ops_sdk::Client;

pub use event::DeploymentEvent;

pub const REPO_PROMPT: &str = "Which application do you want to deploy?";

/// Ask which application was deployed, track the deployment event, then
/// confirm to the user. Returns the recorded event.
pub fn run(client: &mut Client) -> Result<DeploymentEvent> {
    let repo = client
        .prompt
        .input("repo", REPO_PROMPT, false)
        .context("failed to read repository name")?;

    let event = DeploymentEvent::succeeded(repo);
    let metadata = serde_json::to_value(&event)?;

    client
        .tracker
        .track(&[], "", &metadata)
        .with_context(|| format!("failed to record deployment of '{}'", event.repo))?;
    tracing::info!(repo = %event.repo, "deployment recorded");

    client.ux.print(&event.confirmation())?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_sdk::ux::Capture;
    use ops_sdk::{SdkError, TerminalPrompter, Tracker, Ux};
    use serde_json::Value;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(Vec<String>, String, Value)>>>;

    struct RecordingTracker(Calls);

    impl Tracker for RecordingTracker {
        fn track(&self, tags: &[String], event: &str, metadata: &Value) -> ops_sdk::Result<()> {
            self.0
                .lock()
                .unwrap()
                .push((tags.to_vec(), event.to_string(), metadata.clone()));
            Ok(())
        }
    }

    struct FailingTracker;

    impl Tracker for FailingTracker {
        fn track(&self, _: &[String], _: &str, _: &Value) -> ops_sdk::Result<()> {
            Err(SdkError::TrackRejected {
                status: 500,
                body: "boom".into(),
            })
        }
    }

    fn client(input: &str, tracker: Box<dyn Tracker>) -> (Client, Capture) {
        let capture = Capture::default();
        let prompt = TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let client = Client::new(Box::new(prompt), Ux::new(capture.clone()), tracker);
        (client, capture)
    }

    #[test]
    fn records_and_confirms_deployment() {
        let calls = Calls::default();
        let (mut client, out) = client("payments-api\n", Box::new(RecordingTracker(calls.clone())));

        let event = run(&mut client).unwrap();
        assert_eq!(event, DeploymentEvent::succeeded("payments-api"));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (tags, name, metadata) = &calls[0];
        assert!(tags.is_empty());
        assert_eq!(name, "");
        assert_eq!(metadata["event_name"], "deployment");
        assert_eq!(metadata["event_action"], "succeeded");
        assert_eq!(metadata["branch"], "main");
        assert_eq!(metadata["repo"], "payments-api");

        assert!(out.contents().contains("payments-api"));
    }

    #[test]
    fn empty_answers_are_skipped() {
        let calls = Calls::default();
        let (mut client, _) = client("\n\nbilling\n", Box::new(RecordingTracker(calls.clone())));
        let event = run(&mut client).unwrap();
        assert_eq!(event.repo, "billing");
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let calls = Calls::default();
        let (mut client, _) = client("   \n", Box::new(RecordingTracker(calls.clone())));
        let event = run(&mut client).unwrap();
        assert_eq!(event.repo, "   ");
        assert_eq!(calls.lock().unwrap()[0].2["repo"], "   ");
    }

    #[test]
    fn no_answer_tracks_nothing() {
        let calls = Calls::default();
        let (mut client, out) = client("", Box::new(RecordingTracker(calls.clone())));
        let err = run(&mut client).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read repository name"));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn tracking_failure_skips_confirmation() {
        let (mut client, out) = client("web\n", Box::new(FailingTracker));
        let err = run(&mut client).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to record deployment of 'web'"));
        assert!(msg.contains("500"));
        assert_eq!(out.contents(), "");
    }
}
