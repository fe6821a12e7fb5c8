use log::debug;

use crate::error::Result;
use crate::output;
use crate::provider::TranscriptProvider;
use crate::{LanguageTrack, Segment, TranscriptResult, VideoId};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fetch a transcript for `video_id`, preferring `language` if given.
///
/// Lists the available tracks, selects exactly one (the requested language,
/// or the provider's first match over all available codes when none is
/// requested), fetches its segments, and derives the plain and timestamped
/// renderings. Provider conditions propagate as their distinct error kinds;
/// nothing is retried.
pub async fn fetch_transcript<P: TranscriptProvider>(
    provider: &P,
    video_id: &VideoId,
    language: Option<&str>,
) -> Result<TranscriptResult> {
    let tracks = provider.list_tracks(video_id).await?;
    debug!("Video {video_id}: {} transcript track(s) available", tracks.len());

    let languages: Vec<LanguageTrack> = tracks
        .iter()
        .map(|t| LanguageTrack {
            code: t.code.clone(),
            name: t.name.clone(),
            is_generated: t.is_generated,
        })
        .collect();

    let selected = match language {
        Some(code) => provider.find_track(&tracks, &[code])?,
        None => {
            let codes: Vec<&str> = tracks.iter().map(|t| t.code.as_str()).collect();
            provider.find_track(&tracks, &codes)?
        }
    };
    debug!("Selected track: code={} generated={}", selected.code, selected.is_generated);

    let segments: Vec<Segment> = provider
        .fetch_segments(selected)
        .await?
        .into_iter()
        .map(|s| Segment {
            start: round2(s.start),
            duration: round2(s.duration),
            text: s.text,
        })
        .collect();

    let plain_text = output::render_plain(&segments);
    let timestamped_text = output::render_timestamped(&segments);

    Ok(TranscriptResult {
        video_id: video_id.clone(),
        languages,
        segments,
        plain_text,
        timestamped_text,
    })
}
