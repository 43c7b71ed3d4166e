//! The host panel as a DOM container holding one canvas

use std::sync::atomic::{AtomicU32, Ordering};
use tannenbaum_core::{PanelError, PanelHost, PanelSize, TreeConfig};
use tannenbaum_scene::{MountPanel, PanelCommand, PanelInbox};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

/// Canvas ids must be unique in the document for winit to find them
static NEXT_CANVAS: AtomicU32 = AtomicU32::new(0);

pub struct DomPanel {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    canvas_id: String,
    inbox: PanelInbox,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl DomPanel {
    /// Look up the container and create (but not attach) its canvas
    pub fn new(container_id: &str, inbox: PanelInbox) -> Result<Self, PanelError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PanelError::Host("no document".to_string()))?;

        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PanelError::ContainerNotFound(container_id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PanelError::Host(format!("#{container_id} is not an HTML element")))?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| host_error("create canvas", e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PanelError::Host("created element is not a canvas".to_string()))?;

        let canvas_id = format!(
            "tannenbaum-canvas-{}",
            NEXT_CANVAS.fetch_add(1, Ordering::Relaxed)
        );
        canvas.set_id(&canvas_id);

        Ok(Self {
            container,
            canvas,
            canvas_id,
            inbox,
            on_resize: None,
        })
    }
}

impl PanelHost for DomPanel {
    fn size(&self) -> PanelSize {
        container_size(&self.container)
    }

    fn attach_surface(&mut self) -> Result<(), PanelError> {
        let panel_style = self.container.style();
        panel_style.set_property("border-radius", "10px").ok();
        panel_style.set_property("overflow", "hidden").ok();

        let canvas_style = self.canvas.style();
        canvas_style.set_property("display", "block").ok();
        canvas_style.set_property("width", "100%").ok();
        canvas_style.set_property("height", "100%").ok();

        self.container
            .append_child(&self.canvas)
            .map_err(|e| host_error("append canvas", e))?;
        debug!(canvas = %self.canvas_id, "Canvas attached");
        Ok(())
    }

    fn surface_attached(&self) -> bool {
        self.container.contains(Some(&self.canvas))
    }

    fn detach_surface(&mut self) -> Result<(), PanelError> {
        self.container
            .remove_child(&self.canvas)
            .map_err(|e| host_error("remove canvas", e))?;
        debug!(canvas = %self.canvas_id, "Canvas detached");
        Ok(())
    }

    fn start_scene(&mut self, size: PanelSize, config: &TreeConfig) -> Result<(), PanelError> {
        self.inbox.post(PanelCommand::Mount(MountPanel {
            canvas_id: self.canvas_id.clone(),
            size,
            config: config.clone(),
        }));
        Ok(())
    }

    fn listen_for_resize(&mut self) -> Result<(), PanelError> {
        let window = web_sys::window().ok_or_else(|| PanelError::Host("no window".to_string()))?;

        let container = self.container.clone();
        let inbox = self.inbox.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            inbox.post(PanelCommand::Resize(container_size(&container)));
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| host_error("add resize listener", e))?;
        self.on_resize = Some(on_resize);
        Ok(())
    }

    fn stop_listening_for_resize(&mut self) {
        let Some(on_resize) = self.on_resize.take() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) =
            window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "Failed to remove resize listener");
        }
    }

    fn release_surface(&mut self) {
        self.inbox.post(PanelCommand::Unmount);
    }
}

fn container_size(container: &HtmlElement) -> PanelSize {
    PanelSize::new(
        container.client_width().max(0) as u32,
        container.client_height().max(0) as u32,
    )
}

fn host_error(action: &str, e: JsValue) -> PanelError {
    PanelError::Host(format!("{action}: {e:?}"))
}
