//! Host panel lifecycle
//!
//! A panel owns one rendering surface inside a host container. Mounting
//! attaches the surface, hands the scene to the renderer and starts
//! listening for resizes. Disposal undoes that in a fixed order:
//!
//! 1. stop listening for resizes, so no callback reaches a torn-down camera
//! 2. detach the surface from the container, if it is still attached
//! 3. release the surface's graphics resources
//!
//! Disposal is idempotent and never fails.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::camera::PanelSize;
use crate::config::{ConfigError, TreeConfig};

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Host container not found: {0}")]
    ContainerNotFound(String),
    #[error("A tree panel is already mounted")]
    AlreadyMounted,
    #[error("Host operation failed: {0}")]
    Host(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The environment a panel is mounted into (a DOM container in the browser)
pub trait PanelHost {
    /// Current pixel size of the container
    fn size(&self) -> PanelSize;

    /// Insert the rendering surface into the container
    fn attach_surface(&mut self) -> Result<(), PanelError>;

    fn surface_attached(&self) -> bool;

    fn detach_surface(&mut self) -> Result<(), PanelError>;

    /// Ask the renderer to build the scene on the attached surface
    fn start_scene(&mut self, size: PanelSize, config: &TreeConfig) -> Result<(), PanelError>;

    fn listen_for_resize(&mut self) -> Result<(), PanelError>;

    fn stop_listening_for_resize(&mut self);

    /// Tear down the scene and free the surface's graphics resources
    fn release_surface(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Unmounted,
    Mounted,
    Disposed,
}

/// Drives a [`PanelHost`] through mount and dispose
pub struct PanelLifecycle<H: PanelHost> {
    host: H,
    config: TreeConfig,
    phase: PanelPhase,
}

impl<H: PanelHost> PanelLifecycle<H> {
    pub fn new(host: H, config: TreeConfig) -> Self {
        Self {
            host,
            config,
            phase: PanelPhase::Unmounted,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Attach, build the scene, start listening. Returns the size the scene
    /// was built at. A failed mount is rolled back before the error returns.
    pub fn mount(&mut self) -> Result<PanelSize, PanelError> {
        if self.phase == PanelPhase::Mounted {
            return Err(PanelError::AlreadyMounted);
        }

        let size = self.host.size();
        if size.is_empty() {
            warn!(
                width = size.width,
                height = size.height,
                "Mounting into a zero-sized container, aspect ratio clamped to 1"
            );
        }

        if let Err(e) = self.mount_steps(size) {
            warn!(error = %e, "Mount failed, rolling back");
            self.phase = PanelPhase::Mounted;
            self.dispose();
            return Err(e);
        }

        self.phase = PanelPhase::Mounted;
        info!(width = size.width, height = size.height, "Tree panel mounted");
        Ok(size)
    }

    fn mount_steps(&mut self, size: PanelSize) -> Result<(), PanelError> {
        self.host.attach_surface()?;
        self.host.start_scene(size, &self.config)?;
        self.host.listen_for_resize()?;
        Ok(())
    }

    /// Tear the panel down. Safe to call any number of times, mounted or not.
    pub fn dispose(&mut self) {
        if self.phase != PanelPhase::Mounted {
            debug!(phase = ?self.phase, "Dispose on a panel that is not mounted, nothing to do");
            return;
        }

        self.host.stop_listening_for_resize();

        if self.host.surface_attached() {
            if let Err(e) = self.host.detach_surface() {
                warn!(error = %e, "Failed to detach rendering surface");
            }
        } else {
            debug!("Rendering surface already detached");
        }

        self.host.release_surface();
        self.phase = PanelPhase::Disposed;
        info!("Tree panel disposed");
    }
}
