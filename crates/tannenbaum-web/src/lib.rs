//! Tannenbaum Web - The rotating tree panel for the browser
//!
//! ```js
//! import init, { TreePanel } from "./pkg/tannenbaum_web.js";
//! await init();
//! const panel = TreePanel.mount("tree-panel", JSON.stringify({ seed: 7 }));
//! // later
//! panel.dispose();
//! ```

mod app;
mod dom;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tannenbaum_core::{PanelError, PanelLifecycle, PanelPhase, TreeConfig};
use wasm_bindgen::prelude::*;

use crate::dom::DomPanel;

/// The renderer hosts one panel at a time
static PANEL_ACTIVE: AtomicBool = AtomicBool::new(false);
static LOGGING: Once = Once::new();

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();
}

/// Install the console subscriber; the first mount's `log_level` wins
fn init_logging(level: &str) {
    LOGGING.call_once(|| {
        let max_level = level.parse().unwrap_or(tracing::Level::WARN);
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(max_level)
                .build(),
        );
    });
}

/// Handle to a mounted tree panel
#[wasm_bindgen]
pub struct TreePanel {
    lifecycle: PanelLifecycle<DomPanel>,
}

#[wasm_bindgen]
impl TreePanel {
    /// Mount the tree into the element with id `container_id`.
    /// `options` is an optional JSON object of panel options.
    pub fn mount(container_id: &str, options: Option<String>) -> Result<TreePanel, JsValue> {
        Self::try_mount(container_id, options.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Tear the panel down. Calling it again is harmless.
    pub fn dispose(&mut self) {
        if self.lifecycle.phase() == PanelPhase::Mounted {
            self.lifecycle.dispose();
            PANEL_ACTIVE.store(false, Ordering::Release);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.lifecycle.phase() == PanelPhase::Mounted
    }
}

impl TreePanel {
    fn try_mount(container_id: &str, options: Option<&str>) -> Result<TreePanel, PanelError> {
        let config = TreeConfig::from_json(options)?;
        init_logging(&config.log_level);

        if PANEL_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PanelError::AlreadyMounted);
        }

        let mounted = DomPanel::new(container_id, app::runtime()).and_then(|host| {
            let mut lifecycle = PanelLifecycle::new(host, config);
            lifecycle.mount()?;
            Ok(TreePanel { lifecycle })
        });
        if mounted.is_err() {
            PANEL_ACTIVE.store(false, Ordering::Release);
        }
        mounted
    }
}

impl Drop for TreePanel {
    fn drop(&mut self) {
        self.dispose();
    }
}
