pub mod config;
pub mod error;
pub mod output;
pub mod provider;
pub mod transcript;
pub mod youtube;

use serde::Serialize;

const ID_LEN: usize = 11;

/// A canonical 11-character YouTube video ID.
///
/// Only constructible through [`resolve_video_id`], so holding one means the
/// input was successfully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One available transcript track as reported by the provider
#[derive(Debug, Clone, Serialize)]
pub struct LanguageTrack {
    pub code: String,
    pub name: String,
    pub is_generated: bool,
}

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub start: f64,
    pub duration: f64,
    pub text: String,
}

/// Complete transcript response for a video
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResult {
    pub video_id: VideoId,
    pub languages: Vec<LanguageTrack>,
    pub segments: Vec<Segment>,
    pub plain_text: String,
    pub timestamped_text: String,
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Take a valid 11-character ID from the front of `s`, if present.
fn take_id(s: &str) -> Option<&str> {
    let id = s.get(..ID_LEN)?;
    id.bytes().all(is_id_byte).then_some(id)
}

fn capture_after<'a>(input: &'a str, marker: &str) -> Option<&'a str> {
    let at = input.find(marker)? + marker.len();
    take_id(&input[at..])
}

fn match_short(input: &str) -> Option<&str> {
    capture_after(input, "youtu.be/")
}

fn match_watch(input: &str) -> Option<&str> {
    let at = input.find("youtube.com/watch?")? + "youtube.com/watch?".len();
    let query = &input[at..];
    query.match_indices("v=").find_map(|(i, _)| take_id(&query[i + 2..]))
}

fn match_embed(input: &str) -> Option<&str> {
    capture_after(input, "youtube.com/embed/")
}

fn match_shorts(input: &str) -> Option<&str> {
    capture_after(input, "youtube.com/shorts/")
}

const MATCHERS: [fn(&str) -> Option<&str>; 4] = [match_short, match_watch, match_embed, match_shorts];

/// Extract a video ID from various YouTube URL formats or a bare 11-char ID.
///
/// URL matchers are tried in a fixed order; if none hits, the whole trimmed
/// input must itself be a valid ID. Anything else resolves to `None`.
pub fn resolve_video_id(input: &str) -> Option<VideoId> {
    let input = input.trim();

    for matcher in MATCHERS {
        if let Some(id) = matcher(input) {
            return Some(VideoId(id.to_string()));
        }
    }

    if input.len() == ID_LEN && input.bytes().all(is_id_byte) {
        return Some(VideoId(input.to_string()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(input: &str) -> Option<String> {
        resolve_video_id(input).map(|id| id.as_str().to_string())
    }

    #[test]
    fn test_bare_video_id() {
        assert_eq!(resolved("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_short_url() {
        assert_eq!(resolved("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            resolved("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            resolved("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_v_not_first_param() {
        assert_eq!(
            resolved("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            resolved("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            resolved("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(resolved("not a url"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(resolved(""), None);
    }

    #[test]
    fn test_bare_id_too_short() {
        assert_eq!(resolved("dQw4w9WgXc"), None);
    }

    #[test]
    fn test_bare_id_too_long() {
        assert_eq!(resolved("dQw4w9WgXcQQ"), None);
    }

    #[test]
    fn test_bare_id_bad_character() {
        assert_eq!(resolved("dQw4w9Wg!cQ"), None);
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(resolved("  dQw4w9WgXcQ  "), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_short_url_with_query() {
        assert_eq!(
            resolved("https://youtu.be/dQw4w9WgXcQ?t=30"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_all_valid_id_alphabet() {
        assert_eq!(resolved("a_Z-09bcdef"), Some("a_Z-09bcdef".to_string()));
    }
}
