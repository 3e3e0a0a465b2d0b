//! Error types for the speed control and the Tauri bridge

use serde::{Serialize, Serializer};

/// Rejections reported by the speed slider
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControlError {
    #[error("speed must be a finite number")]
    NotFinite,

    #[error("speed {value} is outside the slider range [{min}, {max}]")]
    OutOfRange { value: f32, min: f32, max: f32 },
}

/// Errors surfaced to the frontend through Tauri commands
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Control(#[from] ControlError),

    #[error("shared state lock poisoned: {0}")]
    LockPoisoned(&'static str),

    #[error("no frame yet (scene still loading)")]
    FrameNotReady,

    #[error("frame encoding failed: {0}")]
    Encode(String),
}

// Tauri commands need a serializable error; the frontend only sees the message.
impl Serialize for BridgeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = ControlError::OutOfRange {
            value: 3.5,
            min: 0.1,
            max: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "speed 3.5 is outside the slider range [0.1, 3]"
        );
    }

    #[test]
    fn bridge_error_wraps_control_error_transparently() {
        let err = BridgeError::from(ControlError::NotFinite);
        assert_eq!(err.to_string(), "speed must be a finite number");
    }

    #[test]
    fn bridge_error_serializes_as_message() {
        let json = serde_json::to_string(&BridgeError::FrameNotReady).unwrap();
        assert_eq!(json, "\"no frame yet (scene still loading)\"");
    }
}
