//! Inline image embedding for the rendered report.
//!
//! Screenshots are base64-encoded into `data:` URIs so the artifact stays
//! self-contained. A screenshot that cannot be loaded degrades to a
//! generated placeholder graphic, never to an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

const PLACEHOLDER_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300"><rect fill="#f3f4f6" width="400" height="300"/><text x="200" y="150" text-anchor="middle" fill="#9ca3af" font-size="16">Screenshot not available</text></svg>"##;

/// Encode an image file as a `data:` URI, picking the MIME type from the
/// extension (default PNG). `None` when the file cannot be read.
pub fn encode_image(path: &Path) -> Option<String> {
    let data = fs::read(path).ok()?;
    let mime = match path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    };
    Some(format!("data:{mime};base64,{}", STANDARD.encode(data)))
}

/// Data URI of the "screenshot not available" placeholder.
pub fn placeholder_image() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(PLACEHOLDER_SVG))
}
