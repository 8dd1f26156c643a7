//! Editor configuration
//!
//! Persisted separately from the map in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_COLS, DEFAULT_RADIUS, DEFAULT_ROWS, MAX_GRID_DIM, MIN_RADIUS};

/// Grid dimensions, hex size and the DOM elements the editor binds to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Hex radius in CSS pixels
    pub radius: f32,
    pub cols: usize,
    pub rows: usize,
    /// Id of the `<canvas>` to draw on
    pub canvas_id: String,
    /// Id of the `<textarea>` that receives the export text
    pub export_id: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            canvas_id: "canvas".to_string(),
            export_id: "export".to_string(),
        }
    }
}

impl EditorConfig {
    /// Clamp values into a range the editor can draw
    pub fn sanitized(mut self) -> Self {
        if !self.radius.is_finite() || self.radius < MIN_RADIUS {
            self.radius = MIN_RADIUS;
        }
        self.cols = self.cols.clamp(1, MAX_GRID_DIM);
        self.rows = self.rows.clamp(1, MAX_GRID_DIM);
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hexmap_editor_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<EditorConfig>(&json) {
                    Ok(config) => {
                        log::info!("Loaded editor config from LocalStorage");
                        return config.sanitized();
                    }
                    Err(e) => log::warn!("Ignoring stored editor config: {}", e),
                }
            }
        }

        log::info!("Using default editor config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Editor config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
