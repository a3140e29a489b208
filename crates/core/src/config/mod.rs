use serde::{Deserialize, Serialize};

/// Top-level configuration structure for the animator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimatorConfig {
    pub observer: ObserverConfig,
    pub frame: FrameConfig,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            observer: ObserverConfig::default(),
            frame: FrameConfig::default(),
        }
    }
}

/// Configuration for the viewport-intersection watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Fraction of an element's area that must be inside the viewport before
    /// the element counts as "entered".
    pub threshold: f32,
    /// Class applied to an element on its first entry into the viewport. A
    /// CSS rule in the hosting page owns the actual visual transition.
    pub revealed_class: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            revealed_class: "visible".to_string(),
        }
    }
}

/// Configuration for the frame pump that paces counter animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Nominal gap between frames in milliseconds. Drivers are free to tick
    /// at any cadence; this is the default used by simulations.
    pub interval_ms: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000.0 / 60.0,
        }
    }
}
