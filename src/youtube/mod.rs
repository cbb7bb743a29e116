//! YouTube URL validation and video id extraction.

/// URL shapes we accept, tried in order. The first match wins.
const ID_PREFIXES: [&str; 4] = [
    "youtube.com/watch?v=",
    "youtu.be/",
    "youtube.com/embed/",
    "youtube.com/shorts/",
];

/// Characters that terminate a video id.
const ID_DELIMITERS: [char; 4] = ['&', '\n', '?', '#'];

/// Extract a YouTube video id from a URL.
///
/// Returns `None` when the URL does not match any recognized shape; that is a
/// "no match", not an error - the caller decides it is a client problem.
pub fn extract_video_id(url: &str) -> Option<&str> {
    for prefix in ID_PREFIXES {
        if let Some(pos) = url.find(prefix) {
            let rest = &url[pos + prefix.len()..];
            let id = rest
                .split(ID_DELIMITERS)
                .next()
                .unwrap_or_default();

            // An empty id does not count as a match; keep trying later shapes.
            if !id.is_empty() {
                return Some(id);
            }
        }
    }

    None
}
