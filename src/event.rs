use std::io::Write;
use std::sync::mpsc::Sender;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::voting::{Choice, PollId, VoterId};

/// Notification emitted synchronously after a state mutation commits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum PollEvent {
    PollCreated {
        poll_id: PollId,
        created_at: DateTime<Utc>,
    },
    VoteCast {
        poll_id: PollId,
        voter: VoterId,
        choice: Choice,
    },
}

/// Pluggable observer for registry mutations. A sink that fails to deliver
/// never rolls the mutation back; delivery is its own concern.
pub trait EventSink: Send {
    fn publish(&mut self, event: &PollEvent);
}

/// Discards everything. The default when nobody is listening.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: &PollEvent) {}
}

/// Emits each event as a structured `tracing` record.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn publish(&mut self, event: &PollEvent) {
        match event {
            PollEvent::PollCreated {
                poll_id,
                created_at,
            } => {
                tracing::info!(%poll_id, %created_at, "poll created");
            }
            PollEvent::VoteCast {
                poll_id,
                voter,
                choice,
            } => {
                tracing::info!(%poll_id, %voter, ?choice, "vote cast");
            }
        }
    }
}

/// One JSON object per line, for off-process consumers tailing a pipe or
/// file.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> JsonLinesSink<W> {
        JsonLinesSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn publish(&mut self, event: &PollEvent) {
        if serde_json::to_writer(&mut self.out, event).is_ok() {
            let _ = self.out.write_all(b"\n");
        }
    }
}

/// Channels make a serviceable message bus; a dropped receiver just means
/// nobody is listening anymore.
impl EventSink for Sender<PollEvent> {
    fn publish(&mut self, event: &PollEvent) {
        let _ = self.send(*event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn created_at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn json_lines_sink_writes_one_tagged_object_per_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.publish(&PollEvent::PollCreated {
            poll_id: PollId(0),
            created_at: created_at(1000),
        });
        let voter = VoterId::new();
        sink.publish(&PollEvent::VoteCast {
            poll_id: PollId(0),
            voter,
            choice: Choice::Yes,
        });

        let buf = sink.into_inner();
        let text = std::str::from_utf8(&buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["kind"], "PollCreated");
        assert_eq!(first["poll_id"], 0);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["kind"], "VoteCast");
        assert_eq!(second["voter"], voter.0.to_string());
        assert_eq!(second["choice"], "Yes");
    }

    #[test]
    fn channel_sink_delivers_in_order() {
        let (tx, rx) = mpsc::channel();
        let mut sink = tx;
        let first = PollEvent::PollCreated {
            poll_id: PollId(0),
            created_at: created_at(5),
        };
        let second = PollEvent::VoteCast {
            poll_id: PollId(0),
            voter: VoterId::nil(),
            choice: Choice::No,
        };
        sink.publish(&first);
        sink.publish(&second);

        assert_eq!(rx.try_recv().unwrap(), first);
        assert_eq!(rx.try_recv().unwrap(), second);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_sink_survives_a_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut sink = tx;
        sink.publish(&PollEvent::PollCreated {
            poll_id: PollId(1),
            created_at: created_at(9),
        });
    }

    #[test]
    fn log_sink_emits_without_panicking() {
        tracing_subscriber::fmt().with_test_writer().try_init().ok();
        let mut sink = LogSink;
        sink.publish(&PollEvent::VoteCast {
            poll_id: PollId(2),
            voter: VoterId::new(),
            choice: Choice::No,
        });
    }
}
