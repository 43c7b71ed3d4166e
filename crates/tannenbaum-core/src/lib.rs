//! Tannenbaum Core - Renderer-agnostic model of the rotating tree panel
//!
//! This crate provides:
//! - The tree layout (trunk, tiers, star) and seeded ornament placement
//! - Camera, lighting and rotation parameters
//! - Panel options parsed from JSON
//! - The host panel mount/dispose lifecycle

pub mod camera;
pub mod color;
pub mod config;
pub mod layout;
pub mod lighting;
pub mod panel;
pub mod spin;

pub use camera::{CameraSettings, PanelSize};
pub use color::Rgb;
pub use config::TreeConfig;
pub use layout::TreeLayout;
pub use panel::{PanelError, PanelHost, PanelLifecycle, PanelPhase};
pub use spin::Spin;
