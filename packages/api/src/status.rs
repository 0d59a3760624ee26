//! Human-readable diagnostics for HTTP status codes.

/// Map a status code to a diagnostic message.
///
/// A handful of codes the server is known to answer with get dedicated
/// text; everything else falls back to the bare code.
pub fn describe(code: u16) -> String {
    match code {
        400 => "bad request".to_string(),
        403 => "forbidden".to_string(),
        405 => "method not allowed - are you using HTTPS?".to_string(),
        429 => "too many requests".to_string(),
        500 => "internal server error".to_string(),
        other => format!("HTTP {}", other),
    }
}

/// Check if the status indicates success (2xx).
pub fn is_success(code: u16) -> bool {
    (200..300).contains(&code)
}
