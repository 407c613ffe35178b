//! Response stream boundary: fragments arriving from a model producer.
//!
//! The model itself is an external collaborator. This module only defines
//! the event contract and two producers: a scripted replay (tests, demo
//! mode) and a reader-backed producer that accumulates a piped model's
//! output into cumulative fragments. Producers run on their own named
//! thread and feed the render loop over a bounded channel.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::io::{self, Read};
use std::thread;
use std::time::Duration;

/// Lifecycle events emitted by a response producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEvent {
    /// The full response text so far. Each fragment replaces the previous
    /// one; the sequence of texts is monotonically growing.
    Fragment {
        /// Cumulative response text.
        text: String,
    },
    /// The response finished cleanly; no more fragments follow.
    Completed,
    /// The producer failed mid-stream; no more fragments follow.
    Failed {
        /// Producer-reported reason.
        message: String,
    },
}

/// A finite, lazy sequence of [`ResponseEvent`]s.
///
/// Iterating blocks until the next event arrives and ends when the producer
/// disconnects. A stream that ends without a `Completed` or `Failed` event
/// was cancelled upstream.
pub struct ResponseStream {
    events: Receiver<ResponseEvent>,
}

impl ResponseStream {
    /// Wrap an existing receiver.
    pub const fn new(events: Receiver<ResponseEvent>) -> Self {
        Self { events }
    }

    /// Create a bounded producer/stream pair.
    pub fn channel() -> (Sender<ResponseEvent>, Self) {
        let (tx, rx) = bounded(16);
        (tx, Self::new(rx))
    }
}

impl Iterator for ResponseStream {
    type Item = ResponseEvent;

    fn next(&mut self) -> Option<ResponseEvent> {
        self.events.recv().ok()
    }
}

/// Spawn a producer that replays `reply` in growing word-boundary prefixes,
/// one fragment per `cadence` tick, then completes.
pub fn scripted(reply: impl Into<String>, cadence: Duration) -> ResponseStream {
    let reply = reply.into();
    let (tx, stream) = ResponseStream::channel();

    thread::Builder::new()
        .name("chatterbox-script".to_string())
        .spawn(move || {
            let mut sent = 0usize;
            for chunk in reply.split_inclusive(char::is_whitespace) {
                sent += chunk.len();
                let text = reply[..sent].to_string();
                if tx.send(ResponseEvent::Fragment { text }).is_err() {
                    return;
                }
                thread::sleep(cadence);
            }
            let _ = tx.send(ResponseEvent::Completed);
        })
        .expect("failed to spawn scripted producer thread");

    stream
}

/// Spawn a producer that reads raw model output from `reader`, emitting the
/// accumulated text after every chunk. EOF completes the stream; a read
/// error fails it.
pub fn from_reader<R: Read + Send + 'static>(mut reader: R) -> ResponseStream {
    let (tx, stream) = ResponseStream::channel();

    thread::Builder::new()
        .name("chatterbox-reader".to_string())
        .spawn(move || {
            let mut raw: Vec<u8> = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                match reader.read(&mut chunk) {
                    Ok(0) => {
                        let _ = tx.send(ResponseEvent::Completed);
                        return;
                    }
                    Ok(n) => {
                        raw.extend_from_slice(&chunk[..n]);
                        // A chunk may end mid code point; the replacement
                        // character is corrected by the next fragment.
                        let text = String::from_utf8_lossy(&raw).into_owned();
                        if tx.send(ResponseEvent::Fragment { text }).is_err() {
                            return;
                        }
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                    Err(err) => {
                        let _ = tx.send(ResponseEvent::Failed {
                            message: err.to_string(),
                        });
                        return;
                    }
                }
            }
        })
        .expect("failed to spawn reader producer thread");

    stream
}
