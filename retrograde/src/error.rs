use std::fmt;

/// Rejected synchronously; the call fails and state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    NonPositivePeriod(f32),
    NonPositiveSpeed(f32),
    NegativeRadius(f32),
    ZeroFrameRate,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NonPositivePeriod(p) => write!(f, "orbital period must be positive, got {}", p),
            DomainError::NonPositiveSpeed(s) => write!(f, "playback speed must be positive, got {}", s),
            DomainError::NegativeRadius(r) => write!(f, "orbit radius must be non-negative, got {}", r),
            DomainError::ZeroFrameRate => write!(f, "target frame rate must be nonzero"),
        }
    }
}

impl std::error::Error for DomainError {}

/// A failed capture. Aborts the recording session only; live playback
/// is unaffected.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    EncoderUnavailable(String),
    EncodeFailed(String),
    NoCapture,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::EncoderUnavailable(why) => write!(f, "encoder unavailable: {}", why),
            EncodeError::EncodeFailed(why) => write!(f, "encoding failed: {}", why),
            EncodeError::NoCapture => write!(f, "no capture is awaiting finalization"),
        }
    }
}

impl std::error::Error for EncodeError {}
