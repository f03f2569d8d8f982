//! One player's read → parse → tick → reply loop.

use house_core::{ActionOutcome, ActionResult};
use tracing::{debug, info};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::input::{PlayerCommand, USAGE, parse_command};
use crate::transport::{Transport, TransportError};

/// Drives a single player connection against the runtime.
///
/// Each action the player types is applied as a tick of its own, so its
/// result is visible before the next line is read.
pub struct Session<T> {
    handle: RuntimeHandle,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(handle: RuntimeHandle, transport: T) -> Self {
        Self { handle, transport }
    }

    /// Runs until the player quits or the input ends.
    ///
    /// Mistakes in player input are reported back to the player; only
    /// transport and worker failures end the session with an error.
    pub async fn run(&mut self) -> Result<()> {
        info!(target: "runtime::session", "Session started");

        loop {
            let line = match self.transport.read_line().await {
                Ok(line) => line,
                Err(TransportError::Closed) => {
                    debug!(target: "runtime::session", "Input closed");
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let reply = match parse_command(&line) {
                Ok(PlayerCommand::Quit) => {
                    self.transport.write_message("Goodbye.").await?;
                    break;
                }
                Ok(PlayerCommand::Help) => USAGE.to_owned(),
                Ok(PlayerCommand::Spawn { class, name, room }) => {
                    self.spawn(class, name, room).await?
                }
                Ok(PlayerCommand::Act(action)) => {
                    let report = self.handle.apply(action).await?;
                    report
                        .outcomes
                        .iter()
                        .map(render_outcome)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
                Err(e) => e.to_string(),
            };

            self.transport.write_message(&reply).await?;
        }

        info!(target: "runtime::session", "Session ended");
        Ok(())
    }

    async fn spawn(&self, class: String, name: String, room: String) -> Result<String> {
        let reply = format!("{name} appears in {room}.");
        match self.handle.spawn(class, name, Some(room)).await {
            Ok(()) => Ok(reply),
            Err(RuntimeError::House(e)) => Ok(format!("Can't do that: {e}.")),
            Err(e) => Err(e),
        }
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

/// Text shown to the player for one action outcome.
fn render_outcome(outcome: &ActionOutcome) -> String {
    match &outcome.result {
        Ok(ActionResult::Described { text, .. }) => text.clone(),
        Ok(ActionResult::Moved { mob, to, .. }) => format!("{mob} is now in {to}."),
        Err(e) => e.reason(),
    }
}
