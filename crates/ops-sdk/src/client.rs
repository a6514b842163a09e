use crate::config::SdkConfig;
use crate::error::Result;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::track::{DaemonTracker, LogTracker, Tracker};
use crate::ux::Ux;

/// Handle on the prompt, print and tracking facilities. Built once in `main`
/// and passed to the template's entry point.
pub struct Client {
    pub prompt: Box<dyn Prompter>,
    pub ux: Ux,
    pub tracker: Box<dyn Tracker>,
}

impl Client {
    pub fn new(prompt: Box<dyn Prompter>, ux: Ux, tracker: Box<dyn Tracker>) -> Self {
        Self {
            prompt,
            ux,
            tracker,
        }
    }

    /// Terminal-backed client. Events go to the daemon when one is
    /// configured, otherwise to the log.
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        let tracker: Box<dyn Tracker> = match config.daemon_url.as_deref() {
            Some(url) => {
                let tracker = DaemonTracker::new(url, config)?;
                tracing::debug!(endpoint = tracker.endpoint(), "tracking via daemon");
                Box::new(tracker)
            }
            None => Box::new(LogTracker),
        };

        Ok(Self::new(
            Box::new(TerminalPrompter::stdio()),
            Ux::stdout(),
            tracker,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ux::Capture;
    use std::io::Cursor;

    #[test]
    fn parts_are_wired_through() {
        let capture = Capture::default();
        let mut client = Client::new(
            Box::new(TerminalPrompter::new(Cursor::new(b"x\n".to_vec()), Vec::new())),
            Ux::new(capture.clone()),
            Box::new(LogTracker),
        );

        let answer = client.prompt.input("q", "Q?", false).unwrap();
        client.ux.print(&answer).unwrap();
        assert_eq!(capture.contents(), "x\n");
    }

    #[test]
    fn from_config_builds_with_and_without_daemon() {
        assert!(Client::from_config(&SdkConfig::default()).is_ok());

        let config = SdkConfig {
            daemon_url: Some("http://127.0.0.1:1".into()),
            ..SdkConfig::default()
        };
        assert!(Client::from_config(&config).is_ok());
    }
}
