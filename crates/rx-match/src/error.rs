use thiserror::Error;

/// Invalid matcher configuration, rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("suggestion floor {0} is outside [0, 1]")]
    FloorOutOfRange(f64),
    #[error("auto-match ceiling {0} is outside [0, 1]")]
    CeilingOutOfRange(f64),
    #[error("suggestion floor {floor} exceeds auto-match ceiling {ceiling}")]
    FloorAboveCeiling { floor: f64, ceiling: f64 },
    #[error("candidate cap must be at least 1")]
    ZeroCandidateCap,
}
