//! Paced, clause-by-clause text reveal.
//!
//! Text is split on punctuation and whitespace into clause-sized chunks and
//! yielded one at a time with a fixed pause between chunks. Dropping the
//! stream cancels the reveal.

use crate::RevealConfig;
use futures_util::Stream;
use regex::Regex;
use std::pin::Pin;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{instrument, trace};

/// A run of ordinary characters followed by any clause separators.
static CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^，。！？；：,.!?;:\s]+[，。！？；：,.!?;:\s]*").expect("Valid clause regex")
});

/// Chunks produced by a [`Reveal`].
pub type RevealStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Split `text` into clause-sized chunks.
///
/// Each chunk keeps its trailing punctuation and whitespace, so joining the
/// chunks restores the text minus any leading separators.
///
/// # Examples
///
/// ```
/// use storygate_narrative::segment;
///
/// assert_eq!(
///     segment("The door opens, slowly. Light!"),
///     vec!["The ", "door ", "opens, ", "slowly. ", "Light!"]
/// );
/// assert_eq!(segment("门开了，光进来了。"), vec!["门开了，", "光进来了。"]);
/// ```
pub fn segment(text: &str) -> Vec<String> {
    CLAUSE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Produces paced chunk streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    delay: Duration,
}

impl Reveal {
    /// Reveal with `delay` between consecutive chunks.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Reveal paced by the configured delay.
    pub fn from_config(config: &RevealConfig) -> Self {
        Self::new(config.delay())
    }

    /// Pause between chunks.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stream the chunks of `text`.
    ///
    /// The first chunk is yielded immediately; every later chunk waits for
    /// the delay.
    #[instrument(skip(self, text), fields(len = text.len(), delay_ms = self.delay.as_millis() as u64))]
    pub fn stream(&self, text: &str) -> RevealStream {
        let chunks = segment(text);
        let delay = self.delay;
        Box::pin(async_stream::stream! {
            for (index, chunk) in chunks.into_iter().enumerate() {
                if index > 0 && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                trace!(index, "Revealing chunk");
                yield chunk;
            }
        })
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::from_config(&RevealConfig::default())
    }
}
