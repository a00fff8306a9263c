//! Drives paced reveals on the tokio runtime and hands chunks back to the
//! render loop.

use futures_util::StreamExt;
use storygate_narrative::Reveal;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

/// Sections of one scene that still need revealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealRequest {
    /// Scene the chunks belong to
    pub epoch: u64,
    /// Section index and full text, in reveal order
    pub sections: Vec<(usize, String)>,
}

/// Output of a running reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// Next piece of a section's text
    Chunk {
        /// Scene the chunk belongs to
        epoch: u64,
        /// Section index within the scene
        section: usize,
        /// Chunk text
        text: String,
    },
    /// Every section of the scene has been revealed
    Finished {
        /// Scene that finished
        epoch: u64,
    },
}

impl RevealEvent {
    /// Scene this event belongs to.
    pub fn epoch(&self) -> u64 {
        match self {
            RevealEvent::Chunk { epoch, .. } | RevealEvent::Finished { epoch } => *epoch,
        }
    }
}

/// Runs at most one reveal at a time.
///
/// Starting a reveal aborts the previous one. Events are buffered in a
/// channel until the render loop drains them.
pub struct Narrator {
    handle: Handle,
    reveal: Reveal,
    sender: mpsc::UnboundedSender<RevealEvent>,
    receiver: mpsc::UnboundedReceiver<RevealEvent>,
    task: Option<JoinHandle<()>>,
}

impl Narrator {
    /// Narrator spawning onto `handle`.
    pub fn new(handle: Handle, reveal: Reveal) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            handle,
            reveal,
            sender,
            receiver,
            task: None,
        }
    }

    /// Begin revealing `request`, replacing any reveal in flight.
    #[instrument(skip_all, fields(epoch = request.epoch, sections = request.sections.len()))]
    pub fn start(&mut self, request: RevealRequest) {
        self.cancel();
        let sender = self.sender.clone();
        let reveal = self.reveal;
        let epoch = request.epoch;

        self.task = Some(self.handle.spawn(async move {
            for (position, (section, text)) in request.sections.into_iter().enumerate() {
                if position > 0 && !reveal.delay().is_zero() {
                    tokio::time::sleep(reveal.delay()).await;
                }
                let mut chunks = reveal.stream(&text);
                while let Some(text) = chunks.next().await {
                    if sender
                        .send(RevealEvent::Chunk {
                            epoch,
                            section,
                            text,
                        })
                        .is_err()
                    {
                        return;
                    }
                }
            }
            trace!(epoch, "Reveal complete");
            let _ = sender.send(RevealEvent::Finished { epoch });
        }));
    }

    /// Abort the reveal in flight, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Cancelling reveal");
            task.abort();
        }
    }

    /// Every event received since the last drain.
    pub fn drain(&mut self) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Drop for Narrator {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn settle(narrator: &mut Narrator, epoch: u64) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(50)).await;
            events.extend(narrator.drain());
            if events.contains(&RevealEvent::Finished { epoch }) {
                break;
            }
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_sends_chunks_then_finishes() {
        let mut narrator = Narrator::new(Handle::current(), Reveal::new(Duration::from_millis(10)));
        narrator.start(RevealRequest {
            epoch: 3,
            sections: vec![(0, "one, two".to_string()), (2, "three".to_string())],
        });

        let events = settle(&mut narrator, 3).await;
        let chunks: Vec<(usize, &str)> = events
            .iter()
            .filter_map(|event| match event {
                RevealEvent::Chunk { section, text, .. } => Some((*section, text.as_str())),
                RevealEvent::Finished { .. } => None,
            })
            .collect();
        assert_eq!(chunks, vec![(0, "one, "), (0, "two"), (2, "three")]);
        assert_eq!(events.last(), Some(&RevealEvent::Finished { epoch: 3 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_reveal_supersedes_old() {
        let mut narrator = Narrator::new(Handle::current(), Reveal::new(Duration::from_secs(1)));
        narrator.start(RevealRequest {
            epoch: 1,
            sections: vec![(0, "a b c d e f".to_string())],
        });
        tokio::time::sleep(Duration::from_millis(1500)).await;
        narrator.start(RevealRequest {
            epoch: 2,
            sections: vec![(0, "x".to_string())],
        });

        let events = settle(&mut narrator, 2).await;
        let after: Vec<u64> = events
            .iter()
            .skip_while(|event| event.epoch() == 1)
            .map(RevealEvent::epoch)
            .collect();
        assert!(after.iter().all(|epoch| *epoch == 2));
        assert!(!events.contains(&RevealEvent::Finished { epoch: 1 }));
    }
}
