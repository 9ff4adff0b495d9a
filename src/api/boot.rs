//! Browser entry point: binds a [`GameCore`] to the page and drives it from
//! `requestAnimationFrame` and mouse events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::core::utils::random::Xorshift32;
use crate::domain::config::{DomConfig, GameConfig};
use crate::domain::geometry::Vec2;
use crate::domain::sprite::SpriteId;
use crate::simulation::GameCore;

use super::dom::DomScene;

type SharedGame = Rc<RefCell<GameCore<DomScene>>>;

/// Document-level move/up handlers, attached only while a drag is live so the
/// drag keeps tracking after the pointer leaves the sprite.
struct DocumentListeners {
    document: Document,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
    attached: Cell<bool>,
}

impl DocumentListeners {
    fn attach(&self) {
        if self.attached.replace(true) {
            return;
        }
        let _ = self
            .document
            .add_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .document
            .add_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
    }

    fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
    }
}

/// Handle to a game running on the page
#[wasm_bindgen]
pub struct GameHandle {
    game: SharedGame,
    running: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl GameHandle {
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 { self.game.borrow().score() }

    #[wasm_bindgen(getter)]
    pub fn captured_count(&self) -> usize { self.game.borrow().captured_count() }

    #[wasm_bindgen(getter)]
    pub fn sprite_count(&self) -> usize { self.game.borrow().sprite_count() }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.running.get() }

    /// Stop the frame loop after the current frame. Pointer input keeps working.
    pub fn stop(&self) {
        self.running.set(false);
    }
}

/// Start the game on the current page.
///
/// `config_json` is an optional partial [`GameConfig`] document.
#[wasm_bindgen(js_name = startGame)]
pub fn start_game(config_json: Option<String>) -> Result<GameHandle, JsValue> {
    let config = match config_json {
        Some(json) => GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
        None => GameConfig::default(),
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let dom = config.dom.clone();
    let scene = DomScene::from_document(&document, &dom)?;
    let mut rng = Xorshift32::from_js_entropy();
    let game: SharedGame = Rc::new(RefCell::new(GameCore::new(scene, config, &mut rng)));

    install_instructions_panel(&document, &dom)?;
    let listeners = install_document_listeners(&document, &game);
    install_drag_sources(&game, &listeners)?;

    let running = Rc::new(Cell::new(true));
    start_frame_loop(window, game.clone(), running.clone());

    Ok(GameHandle { game, running })
}

fn install_instructions_panel(document: &Document, dom: &DomConfig) -> Result<(), JsValue> {
    let panel = document.get_element_by_id(&dom.instructions_id);
    let close = document.get_element_by_id(&dom.close_instructions_id);
    let (Some(panel), Some(close)) = (panel, close) else {
        console_warn!("Instructions elements not found.");
        return Ok(());
    };

    let score_display = document
        .get_element_by_id(&dom.score_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let hidden_class = dom.hidden_class.clone();
    let score_top = dom.score_top_after_dismiss.clone();

    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let _ = panel.class_list().add_1(&hidden_class);
        if let Some(score) = &score_display {
            let _ = score.style().set_property("top", &score_top);
        }
    }));
    close.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

fn install_document_listeners(document: &Document, game: &SharedGame) -> Rc<DocumentListeners> {
    // The up handler detaches both listeners, so it needs a way back to them.
    let slot: Rc<RefCell<Option<Rc<DocumentListeners>>>> = Rc::new(RefCell::new(None));

    let on_move = {
        let game = game.clone();
        Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let pointer = Vec2::new(f64::from(e.client_x()), f64::from(e.client_y()));
            game.borrow_mut().pointer_move(pointer);
        }))
    };

    let on_up = {
        let game = game.clone();
        let slot = slot.clone();
        Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            game.borrow_mut().pointer_up();
            if let Some(listeners) = slot.borrow().as_ref() {
                listeners.detach();
            }
        }))
    };

    let listeners = Rc::new(DocumentListeners {
        document: document.clone(),
        on_move,
        on_up,
        attached: Cell::new(false),
    });
    *slot.borrow_mut() = Some(listeners.clone());
    listeners
}

fn install_drag_sources(game: &SharedGame, listeners: &Rc<DocumentListeners>) -> Result<(), JsValue> {
    let elements: Vec<HtmlElement> = game.borrow().scene().sprite_elements().to_vec();

    for (index, el) in elements.iter().enumerate() {
        el.set_attribute("draggable", "false")?;

        let game = game.clone();
        let listeners = listeners.clone();
        let id = SpriteId(index as u32);
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let pointer = Vec2::new(f64::from(e.client_x()), f64::from(e.client_y()));
            let started = game.borrow_mut().pointer_down(id, pointer);
            if started {
                listeners.attach();
            }
        }));
        el.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    Ok(())
}

fn start_frame_loop(window: Window, game: SharedGame, running: Rc<Cell<bool>>) {
    type FrameClosure = Closure<dyn FnMut(f64)>;
    let slot: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !running.get() {
            return;
        }
        game.borrow_mut().tick(timestamp);
        if let Some(cb) = next.borrow().as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    let first = slot.borrow();
    if let Some(cb) = first.as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
