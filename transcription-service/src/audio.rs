//! Audio container sniffing.
//!
//! Uploaded audio is forwarded to the provider unmodified; the only
//! inspection is the container magic, used to set the outbound content
//! type. Unknown containers fall back to `application/octet-stream` and
//! are still sent - the provider decides whether it can decode them.

/// Detect the MIME type of an audio buffer from its leading bytes.
pub fn detect_content_type(data: &[u8]) -> &'static str {
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE" {
        "audio/wav"
    } else if data.starts_with(b"ID3")
        || (data.len() >= 2 && data[0] == 0xFF && data[1] & 0xE0 == 0xE0)
    {
        "audio/mpeg"
    } else if data.len() >= 12 && &data[4..8] == b"ftyp" {
        // MP4 container, covers .m4a uploads
        "audio/mp4"
    } else if data.starts_with(b"OggS") {
        "audio/ogg"
    } else if data.starts_with(b"fLaC") {
        "audio/flac"
    } else {
        "application/octet-stream"
    }
}
