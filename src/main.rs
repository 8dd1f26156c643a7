//! Hexmap Editor entry point
//!
//! Wires the editor to the page in the browser; natively it inspects map
//! files.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_editor {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlTextAreaElement, KeyboardEvent, MouseEvent};

    use hexmap_editor::persistence;
    use hexmap_editor::renderer::CanvasRenderer;
    use hexmap_editor::{Editor, EditorConfig, EditorInput};

    /// Mouse buttons as reported by `MouseEvent.button`
    const BUTTON_PRIMARY: i16 = 0;
    const BUTTON_SECONDARY: i16 = 2;

    /// Editor instance plus the page elements it drives
    struct App {
        editor: Editor,
        renderer: CanvasRenderer,
        export: Option<HtmlTextAreaElement>,
    }

    impl App {
        /// Redraw, refresh the export box and save
        fn refresh(&self) {
            self.renderer.draw(&self.editor);
            let text = persistence::store(&self.editor);
            if let Some(export) = &self.export {
                export.set_value(&text);
            }
        }

        /// Feed one event to the editor, refreshing on change
        fn apply(&mut self, input: EditorInput) -> bool {
            let changed = self.editor.handle(&input);
            if changed {
                self.refresh();
            }
            changed
        }

        fn in_grid(&self, pos: Vec2) -> bool {
            let cell = self.editor.selected_cell(pos);
            self.editor.grid().contains(cell)
        }
    }

    fn event_pos(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Hexmap editor starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = EditorConfig::load();
        // Store the sanitized config so it can be edited in place
        config.save();
        let mut editor = Editor::new(&config);
        if persistence::restore(&mut editor) {
            log::info!("Restored saved map");
        }

        let renderer = CanvasRenderer::new(&document, &config.canvas_id)?;
        renderer.fit(&editor);

        let export = document
            .get_element_by_id(&config.export_id)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok());
        if export.is_none() {
            log::warn!("Export box #{} not found", config.export_id);
        }

        let app = Rc::new(RefCell::new(App {
            editor,
            renderer,
            export,
        }));
        app.borrow().refresh();

        setup_input_handlers(&document, app)?;

        log::info!(
            "Hexmap editor running ({}x{}, radius {})",
            config.cols,
            config.rows,
            config.radius
        );
        Ok(())
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let canvas = app.borrow().renderer.canvas().clone();

        // Mouse move - remember the hovered position for keyboard edits
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .apply(EditorInput::PointerMove(event_pos(&event)));
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Left click - cycle terrain
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != BUTTON_PRIMARY {
                    return;
                }
                let pos = event_pos(&event);
                let mut a = app.borrow_mut();
                if a.in_grid(pos) {
                    event.prevent_default();
                    a.apply(EditorInput::PrimaryClick(pos));
                }
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Right click - cycle owner instead of opening the context menu
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != BUTTON_SECONDARY {
                    return;
                }
                let pos = event_pos(&event);
                let mut a = app.borrow_mut();
                if a.in_grid(pos) {
                    event.prevent_default();
                    a.apply(EditorInput::SecondaryClick(pos));
                }
            });
            canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard - digits set the soldier count of the hovered tile
        {
            let body = document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().apply(EditorInput::Key(event.key())) {
                    event.prevent_default();
                }
            });
            body.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_editor::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use hexmap_editor::{Editor, EditorConfig};

    env_logger::init();
    log::info!("Hexmap editor (native) starting...");
    log::info!("The editor runs in the browser - build with `trunk serve` for the web version");

    let mut editor = Editor::new(&EditorConfig::load());

    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            editor.load_snapshot(&text)?;
            let grid = editor.grid();
            println!(
                "{}: {} columns x {} rows, {} land tiles",
                path,
                grid.cols(),
                grid.rows(),
                grid.land_count()
            );
        }
        None => log::info!("No map file given, printing an empty map"),
    }

    println!("{}", editor.export_text());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
