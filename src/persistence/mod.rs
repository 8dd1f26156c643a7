//! Map persistence in LocalStorage
//!
//! The map is stored as its export text under a single key. Native builds
//! have no storage; loads find nothing and saves are dropped.

use crate::editor::Editor;

/// LocalStorage key for the map
pub const MAP_STORAGE_KEY: &str = "map";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Read the saved map text (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load_map() -> Option<String> {
    local_storage()?.get_item(MAP_STORAGE_KEY).ok()?
}

/// Write the map text (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save_map(text: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(MAP_STORAGE_KEY, text) {
            log::warn!("Failed to save map: {:?}", e);
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load_map() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_map(_text: &str) {
    // No-op for native
}

/// Load `saved` into the editor. Undecodable maps are logged and skipped.
pub fn restore_from(editor: &mut Editor, saved: Option<&str>) -> bool {
    let Some(text) = saved else {
        log::info!("No saved map found, starting fresh");
        return false;
    };

    match editor.load_snapshot(text) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Ignoring saved map: {}", e);
            false
        }
    }
}

/// Restore the map saved in storage, if any
pub fn restore(editor: &mut Editor) -> bool {
    restore_from(editor, load_map().as_deref())
}

/// Persist the editor's map and return the text that was saved
pub fn store(editor: &Editor) -> String {
    let text = editor.export_text();
    save_map(&text);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorInput;
    use crate::settings::EditorConfig;

    #[test]
    fn test_restore_from_nothing() {
        let mut editor = Editor::new(&EditorConfig::default());
        assert!(!restore_from(&mut editor, None));
    }

    #[test]
    fn test_restore_from_saved_text() {
        let config = EditorConfig::default();
        let mut source = Editor::new(&config);
        let pos = source.layout().cell_center(crate::hex::HexCell::new(2, 3));
        source.handle(&EditorInput::PrimaryClick(pos));
        let text = source.export_text();

        let mut editor = Editor::new(&config);
        assert!(restore_from(&mut editor, Some(&text)));
        assert_eq!(editor.grid(), source.grid());
    }

    #[test]
    fn test_restore_skips_corrupt_map() {
        let mut editor = Editor::new(&EditorConfig::default());
        let before = editor.grid().clone();
        assert!(!restore_from(&mut editor, Some("{\"p\":[[0]]")));
        assert_eq!(editor.grid(), &before);
    }

    #[test]
    fn test_native_storage_is_empty() {
        let editor = Editor::new(&EditorConfig::default());
        let text = store(&editor);
        assert_eq!(text, editor.export_text());
        assert_eq!(load_map(), None);
    }
}
