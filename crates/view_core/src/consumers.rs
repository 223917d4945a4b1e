//! Partitioned view over one peer's consumer records.

use shared::domain::MediaKind;
use shared::media::Consumer;

/// Borrowed partition of a peer's consumers for one refresh. At most one
/// audio consumer is expected per peer; video consumers keep source order.
#[derive(Debug)]
pub struct ConsumerSet<'a> {
    pub audio: Option<&'a Consumer>,
    pub videos: Vec<&'a Consumer>,
}

impl<'a> ConsumerSet<'a> {
    pub fn partition(consumers: &[&'a Consumer]) -> Self {
        let audio = consumers
            .iter()
            .copied()
            .find(|consumer| consumer.kind == MediaKind::Audio);
        let videos = consumers
            .iter()
            .copied()
            .filter(|consumer| consumer.kind == MediaKind::Video)
            .collect();
        Self { audio, videos }
    }
}
