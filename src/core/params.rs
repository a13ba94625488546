use std::num::NonZeroU32;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Raw invocation parameters suitable for config files and presets.
///
/// Nothing here is checked; turn it into a [`RifeConfig`](crate::RifeConfig)
/// before building commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RifeSettings {
    /// Path to the rife-ncnn-vulkan executable, or a name found on `PATH`
    pub binary: Option<PathBuf>,
    /// Model shipped with the binary (e.g. "rife-v4.6"); None uses the binary default
    pub model: Option<String>,
    pub scale: f64,
    /// Test-time augmentation
    pub tta: bool,
    /// UHD mode for very high resolution inputs
    pub uhd: bool,
    pub gpu_id: Option<u32>,
    pub threads: Option<NonZeroU32>,
}

impl RifeSettings {
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(binary.into()),
            ..Self::default()
        }
    }
}

impl Default for RifeSettings {
    fn default() -> Self {
        Self {
            binary: None,
            model: None,
            scale: 1.0,
            tta: false,
            uhd: false,
            gpu_id: None,
            threads: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_everything_to_the_binary() {
        let s = RifeSettings::default();
        assert_eq!(s.binary, None);
        assert_eq!(s.model, None);
        assert_eq!(s.scale, 1.0);
        assert!(!s.tta && !s.uhd);
        assert_eq!(s.gpu_id, None);
        assert_eq!(s.threads, None);
    }

    #[test]
    fn partial_preset_fills_in_defaults() {
        let s: RifeSettings =
            serde_json::from_str(r#"{"binary": "/opt/rife/rife-ncnn-vulkan", "uhd": true, "threads": 4}"#)
                .unwrap();
        assert_eq!(s.binary, Some(PathBuf::from("/opt/rife/rife-ncnn-vulkan")));
        assert!(s.uhd);
        assert_eq!(s.threads, NonZeroU32::new(4));
        assert_eq!(s.scale, 1.0);
    }

    #[test]
    fn zero_threads_is_rejected_by_the_type() {
        let parsed: Result<RifeSettings, _> = serde_json::from_str(r#"{"threads": 0}"#);
        assert!(parsed.is_err());
    }
}
