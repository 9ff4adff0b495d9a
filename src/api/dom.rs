//! Scene implementation over live DOM elements.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::domain::config::DomConfig;
use crate::domain::geometry::{Rect, Vec2};
use crate::domain::sprite::SpriteId;
use crate::simulation::{Scene, SceneTarget};

/// CSS transform for a sprite's position and rotation.
pub fn transform_css(pos: Vec2, rotation: f64) -> String {
    format!("translate({}px, {}px) rotate({}deg)", pos.x, pos.y, rotation)
}

fn dom_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub struct DomScene {
    body: HtmlElement,
    sprites: Vec<HtmlElement>,
    score_display: Option<HtmlElement>,
    capture_zone: Option<Element>,
    dragging_class: String,
    captured_class: String,
}

impl DomScene {
    /// Look up every element the game touches.
    ///
    /// Fails only when the document has no body; a missing score display or
    /// capture zone is logged and the feature is simply unavailable.
    pub fn from_document(document: &Document, dom: &DomConfig) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?;

        let nodes = document.query_selector_all(&dom.sprite_selector)?;
        let mut sprites = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                sprites.push(el);
            }
        }

        let score_display = document
            .get_element_by_id(&dom.score_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if score_display.is_none() {
            console_warn!("Score display #{} not found.", dom.score_id);
        }

        let capture_zone = document.get_element_by_id(&dom.capture_zone_id);
        if capture_zone.is_none() {
            console_warn!("Capture zone #{} not found; drops will never capture.", dom.capture_zone_id);
        }

        Ok(Self {
            body,
            sprites,
            score_display,
            capture_zone,
            dragging_class: dom.dragging_class.clone(),
            captured_class: dom.captured_class.clone(),
        })
    }

    pub fn sprite_elements(&self) -> &[HtmlElement] {
        &self.sprites
    }

    pub fn sprite_element(&self, id: SpriteId) -> Option<&HtmlElement> {
        self.sprites.get(id.index())
    }
}

impl Scene for DomScene {
    fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    fn viewport(&self) -> Rect {
        dom_rect(&self.body)
    }

    fn measure(&self, id: SpriteId) -> Option<Vec2> {
        self.sprite_element(id)
            .map(|el| Vec2::new(f64::from(el.offset_width()), f64::from(el.offset_height())))
    }

    fn bounds(&self, target: SceneTarget) -> Option<Rect> {
        match target {
            SceneTarget::Sprite(id) => self.sprite_element(id).map(|el| dom_rect(el)),
            SceneTarget::CaptureZone => self.capture_zone.as_ref().map(dom_rect),
        }
    }

    fn set_transform(&mut self, id: SpriteId, pos: Vec2, rotation: f64) {
        if let Some(el) = self.sprite_element(id) {
            let _ = el.style().set_property("transform", &transform_css(pos, rotation));
        }
    }

    fn set_z_index(&mut self, id: SpriteId, z_index: i32) {
        if let Some(el) = self.sprite_element(id) {
            let _ = el.style().set_property("z-index", &z_index.to_string());
        }
    }

    fn set_dragging(&mut self, id: SpriteId, dragging: bool) {
        if let Some(el) = self.sprite_element(id) {
            let classes = el.class_list();
            let _ = if dragging {
                classes.add_1(&self.dragging_class)
            } else {
                classes.remove_1(&self.dragging_class)
            };
        }
    }

    fn set_captured(&mut self, id: SpriteId) {
        if let Some(el) = self.sprite_element(id) {
            let _ = el.class_list().add_1(&self.captured_class);
        }
    }

    fn set_score_text(&mut self, text: &str) {
        if let Some(el) = &self.score_display {
            el.set_text_content(Some(text));
        }
    }
}
