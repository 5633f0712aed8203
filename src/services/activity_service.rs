use crate::app::Command;
use crate::domain::Event;
use crate::ports::ActivitySource;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Coordinates activity loads between the UI and the ActivitySource port
///
/// Every load runs in its own task and reports back as an `Event`. Loads are
/// never cancelled or sequenced, so when two overlap the one that finishes
/// last determines what is shown.
pub struct ActivityService {
    source: Arc<dyn ActivitySource>,

    // Events for the UI
    event_tx: mpsc::UnboundedSender<Event>,

    command_rx: mpsc::UnboundedReceiver<Command>,

    tasks: JoinSet<()>,
}

impl ActivityService {
    pub fn new(
        source: Arc<dyn ActivitySource>,
    ) -> (Self, mpsc::UnboundedReceiver<Event>, mpsc::UnboundedSender<Command>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let service = Self {
            source,
            event_tx,
            command_rx,
            tasks: JoinSet::new(),
        };

        (service, event_rx, command_tx)
    }

    /// Handle a single command
    pub fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::LoadActivity { username } => {
                info!("Loading activity for {}", username);
                self.start_load(username);
            }
            Command::Quit => {
                info!("Quit command received");
                let _ = self.event_tx.send(Event::QuitRequested);
            }
        }
    }

    fn start_load(&mut self, username: String) {
        let _ = self.event_tx.send(Event::LoadStarted {
            username: username.clone(),
        });

        let source = self.source.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(async move {
            let event = load_event(source.as_ref(), username).await;
            if event_tx.send(event).is_err() {
                warn!("Event receiver dropped before load completed");
            }
        });
    }

    /// Process commands until Quit or until the command channel closes
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting activity service");

        loop {
            tokio::select! {
                command = self.command_rx.recv() => {
                    match command {
                        Some(Command::Quit) => {
                            self.handle_command(Command::Quit);
                            break;
                        }
                        Some(cmd) => self.handle_command(cmd),
                        None => {
                            info!("Command channel closed");
                            break;
                        }
                    }
                }

                task_result = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    if let Some(Err(e)) = task_result {
                        error!("Load task panicked: {}", e);
                    }
                }
            }
        }

        self.tasks.abort_all();
        Ok(())
    }
}

/// Run one load against the source and turn the outcome into an event
pub async fn load_event(source: &dyn ActivitySource, username: String) -> Event {
    match source.recent_events(&username).await {
        Ok(events) => {
            info!("Loaded {} events for {}", events.len(), username);
            Event::ActivityLoaded { username, events }
        }
        Err(e) => {
            warn!("Failed to load activity for {}: {}", username, e);
            Event::LoadFailed {
                username,
                msg: e.to_string(),
            }
        }
    }
}

impl Drop for ActivityService {
    fn drop(&mut self) {
        self.tasks.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityEvent;
    use crate::error::FetchError;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Answers after a per-user delay; "missing" gets a 404
    struct FakeSource;

    #[async_trait]
    impl ActivitySource for FakeSource {
        async fn recent_events(&self, username: &str) -> crate::error::Result<Vec<ActivityEvent>> {
            match username {
                "missing" => Err(FetchError::Status { status: 404 }),
                "slow" => {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(vec![ActivityEvent {
                        kind: "WatchEvent".to_string(),
                        ..ActivityEvent::default()
                    }])
                }
                _ => Ok(Vec::new()),
            }
        }
    }

    #[tokio::test]
    async fn test_load_emits_started_then_loaded() {
        let (mut service, mut event_rx, _command_tx) = ActivityService::new(Arc::new(FakeSource));
        service.handle_command(Command::LoadActivity {
            username: "octocat".to_string(),
        });

        assert!(matches!(event_rx.recv().await, Some(Event::LoadStarted { .. })));
        match event_rx.recv().await {
            Some(Event::ActivityLoaded { username, events }) => {
                assert_eq!(username, "octocat");
                assert!(events.is_empty());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_failure_reports_error() {
        let event = load_event(&FakeSource, "missing".to_string()).await;
        match event {
            Event::LoadFailed { username, msg } => {
                assert_eq!(username, "missing");
                assert!(msg.contains("404"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_overlapping_loads_both_complete() {
        let (mut service, mut event_rx, _command_tx) = ActivityService::new(Arc::new(FakeSource));
        service.handle_command(Command::LoadActivity {
            username: "slow".to_string(),
        });
        service.handle_command(Command::LoadActivity {
            username: "fast".to_string(),
        });

        let mut completed = Vec::new();
        while completed.len() < 2 {
            match event_rx.recv().await {
                Some(Event::ActivityLoaded { username, .. }) => completed.push(username),
                Some(_) => {}
                None => break,
            }
        }

        // Issued first, finishes last
        assert_eq!(completed, vec!["fast".to_string(), "slow".to_string()]);
    }

    #[tokio::test]
    async fn test_run_stops_on_quit() -> Result<()> {
        let (mut service, mut event_rx, command_tx) = ActivityService::new(Arc::new(FakeSource));
        command_tx.send(Command::Quit)?;
        service.run().await?;
        assert!(matches!(event_rx.recv().await, Some(Event::QuitRequested)));
        Ok(())
    }
}
