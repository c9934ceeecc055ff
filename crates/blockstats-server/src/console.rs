//! Console input channel for the host harness.
//!
//! Stdin reads are blocking, so they run on a dedicated OS thread that
//! forwards complete lines into a tokio channel the game loop can select
//! on. The channel closes when stdin reaches EOF, which the loop treats
//! as a shutdown signal.

use std::io::stdin;
use std::thread;

use tokio::sync::mpsc::{self, Receiver};

/// Spawn the stdin reader thread and return the line channel.
pub fn console_input_channel() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel(100);
    thread::spawn(move || {
        let mut line = String::new();
        loop {
            line.clear();
            match stdin().read_line(&mut line) {
                // EOF: close the channel by dropping the sender.
                Ok(0) => break,
                Ok(_) => {
                    if sender.blocking_send(line.clone()).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "Failed to read console input");
                    break;
                }
            }
        }
    });
    receiver
}
