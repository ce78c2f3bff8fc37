//! Duration unit handling.
//!
//! Pickers report video duration in milliseconds on some platforms and
//! seconds on others, with no unit tag. Everything that needs seconds goes
//! through [`normalize_secs`].

/// Raw values above this are taken to be milliseconds.
pub const MILLIS_THRESHOLD: f64 = 1000.0;

/// Convert a raw picker duration to seconds.
///
/// Values above [`MILLIS_THRESHOLD`] are divided by 1000. A real video
/// longer than 1000 seconds reported in seconds is misread by this.
pub fn normalize_secs(raw: f64) -> f64 {
    if raw > MILLIS_THRESHOLD {
        raw / 1000.0
    } else {
        raw
    }
}
