//! Core library for the viewport animator.
//!
//! The crate models the two effects a landing page wires to scroll position:
//! a one-way fade-in reveal for sections entering the viewport, and a timed
//! count-up for numeric stat headings. Everything is headless and
//! deterministic so the behaviour can be driven by tests and by the command
//! line simulation in the application crate; a real page supplies the same
//! inputs (element geometry, scroll offsets, frame timestamps) from the
//! browser instead.

pub mod animator;
pub mod config;
pub mod counter;
pub mod element;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod observer;
pub mod page;

pub use animator::ViewportAnimator;
pub use config::{AnimatorConfig, FrameConfig, ObserverConfig};
pub use counter::{CounterRun, CounterSpec};
pub use element::{ElementDescriptor, ElementHandle, ElementKind};
pub use error::{AnimatorError, Result};
pub use frame::{FrameClock, FramePump};
pub use geometry::{intersection_ratio, IntersectionEntry, Rect, Viewport};
pub use observer::ViewportWatcher;
pub use page::{PageDescriptor, PageModel};
