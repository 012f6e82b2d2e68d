//! Applies session effects to the DOM. Layout and colours come from external CSS;
//! this only creates elements and toggles classes.

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, window};

use crate::game::{CellId, Effect, GameSession};
use crate::heat::ParticleKind;

const TOAST_HTML: &str = "<b>Word not found</b><small>or maybe I forgot to add it</small>";

fn cell_dom_id(id: CellId) -> String {
    format!("hw-cell-{id}")
}

pub(super) struct Renderer {
    doc: Document,
    board: Element,
    toast: Element,
    toast_timer: Option<Timeout>,
    active: Option<CellId>,
    slide_out_ms: u32,
    particle_lifetime_ms: u32,
    toast_ms: u32,
}

impl Renderer {
    /// Find or create `.board` and `#toast`, then rebuild the cells from the session.
    pub(super) fn mount(doc: &Document, session: &GameSession) -> Result<Self, JsValue> {
        let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let board = match doc.query_selector(".board")? {
            Some(el) => el,
            None => {
                let el = doc.create_element("div")?;
                el.set_class_name("board");
                body.append_child(&el)?;
                el
            }
        };
        board.set_inner_html("");

        let toast = match doc.get_element_by_id("toast") {
            Some(el) => {
                // A previous game's hide timer died with its renderer.
                let classes = el.class_list();
                classes.remove_1("show")?;
                classes.add_1("hide")?;
                el
            }
            None => {
                let el = doc.create_element("div")?;
                el.set_id("toast");
                el.set_class_name("toast hide");
                body.append_child(&el)?;
                el
            }
        };

        let cfg = session.config();
        let renderer = Self {
            doc: doc.clone(),
            board,
            toast,
            toast_timer: None,
            active: None,
            slide_out_ms: cfg.slide_out_ms,
            particle_lifetime_ms: cfg.particle_lifetime_ms,
            toast_ms: cfg.toast_ms,
        };
        for cell in session.board().cells() {
            let input = renderer.create_cell(cell.id, "box")?;
            input.set_value(&cell.text);
            renderer.board.append_child(&input)?;
        }
        Ok(renderer)
    }

    fn create_cell(&self, id: CellId, class: &str) -> Result<HtmlInputElement, JsValue> {
        let input: HtmlInputElement = self.doc.create_element("input")?.dyn_into()?;
        input.set_id(&cell_dom_id(id));
        input.set_class_name(class);
        input.set_read_only(true);
        input.set_attribute("data-cell", &id.to_string())?;
        Ok(input)
    }

    fn cell(&self, id: CellId) -> Option<HtmlInputElement> {
        self.doc
            .get_element_by_id(&cell_dom_id(id))
            .and_then(|el| el.dyn_into().ok())
    }

    pub(super) fn apply(&mut self, effects: &[Effect]) -> Result<(), JsValue> {
        for effect in effects {
            self.apply_one(effect)?;
        }
        Ok(())
    }

    fn apply_one(&mut self, effect: &Effect) -> Result<(), JsValue> {
        match effect {
            Effect::SetText { cell, text } => {
                if let Some(el) = self.cell(*cell) {
                    el.set_value(text);
                }
            }
            Effect::Checking { cell } => self.toggle(*cell, "checking", true)?,
            Effect::ClearChecking { cell } => self.toggle(*cell, "checking", false)?,
            Effect::Submitted { cell } => self.toggle(*cell, "submitted", true)?,
            Effect::Heat { cell, heat } => self.toggle(*cell, heat.as_class(), true)?,
            Effect::Particles { cell, kind, count } => self.spawn_particles(*cell, *kind, *count)?,
            Effect::NotFound => self.show_toast()?,
            Effect::SlideOut { cell } => {
                if let Some(el) = self.cell(*cell) {
                    el.class_list().add_1("slide-out")?;
                    Timeout::new(self.slide_out_ms, move || el.remove()).forget();
                }
            }
            Effect::Append { cell } => {
                let input = self.create_cell(*cell, "box slide-in")?;
                self.board.append_child(&input)?;
            }
            Effect::Activate { cell } => {
                if let Some(prev) = self.active.take() {
                    self.toggle(prev, "current", false)?;
                }
                self.toggle(*cell, "current", true)?;
                self.active = Some(*cell);
            }
            Effect::Won { word } => {
                gloo::console::log!("heatwords: found", word.clone());
            }
        }
        Ok(())
    }

    fn toggle(&self, id: CellId, class: &str, on: bool) -> Result<(), JsValue> {
        let Some(el) = self.cell(id) else {
            return Ok(());
        };
        if on {
            el.class_list().add_1(class)
        } else {
            el.class_list().remove_1(class)
        }
    }

    fn spawn_particles(&self, id: CellId, kind: ParticleKind, count: u8) -> Result<(), JsValue> {
        let Some(cell) = self.cell(id) else {
            return Ok(());
        };
        cell.style().set_property("position", "relative")?;
        for _ in 0..count {
            let el: HtmlElement = self.doc.create_element("div")?.dyn_into()?;
            el.set_class_name(kind.as_class());
            el.style()
                .set_property("left", &format!("{:.1}%", particle_offset()))?;
            cell.append_child(&el)?;
            Timeout::new(self.particle_lifetime_ms, move || el.remove()).forget();
        }
        Ok(())
    }

    fn show_toast(&mut self) -> Result<(), JsValue> {
        self.toast.set_inner_html(TOAST_HTML);
        let classes = self.toast.class_list();
        classes.remove_1("hide")?;
        classes.add_1("show")?;
        let toast = self.toast.clone();
        // Replacing the handle cancels an older toast's pending hide.
        self.toast_timer = Some(Timeout::new(self.toast_ms, move || {
            let classes = toast.class_list();
            let _ = classes.remove_1("show");
            let _ = classes.add_1("hide");
        }));
        Ok(())
    }
}

/// Horizontal particle position in percent, `[0, 80)`.
fn particle_offset() -> f64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 4];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u32::from_le_bytes(buf) as f64 / (u32::MAX as f64 + 1.0) * 80.0;
        }
    }
    let now = window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    // Linear congruential step over the timer; good enough for decoration.
    let mixed = (now as u64).wrapping_mul(1664525).wrapping_add(1013904223);
    (mixed % 800) as f64 / 10.0
}
