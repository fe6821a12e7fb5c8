use crate::error::Result;
use crate::error::TranscriptError;
use crate::{Segment, VideoId};

/// One transcript track offered by the provider, with the opaque handle
/// needed to fetch its segments later.
#[derive(Debug, Clone)]
pub struct Track {
    pub code: String,
    pub name: String,
    pub is_generated: bool,
    pub handle: String,
}

/// External transcript source.
///
/// Listing and fetching go over the network; track selection is pure. The
/// trait exists so the orchestrator can run against an in-memory fake in
/// tests.
pub trait TranscriptProvider {
    /// List the transcript tracks available for a video, in provider order.
    async fn list_tracks(&self, video_id: &VideoId) -> Result<Vec<Track>>;

    /// Pick the best track for the given language codes: the codes are tried
    /// in order, and the first track whose code matches wins.
    fn find_track<'a>(&self, tracks: &'a [Track], codes: &[&str]) -> Result<&'a Track> {
        codes
            .iter()
            .find_map(|code| tracks.iter().find(|t| t.code == *code))
            .ok_or(TranscriptError::NoTranscriptFound)
    }

    /// Fetch the timed segments of one track.
    async fn fetch_segments(&self, track: &Track) -> Result<Vec<Segment>>;
}
