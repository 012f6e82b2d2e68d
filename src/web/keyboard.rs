//! On-screen keyboard and hint trigger.
//!
//! The click handlers are returned to the caller and must outlive the elements
//! they are attached to; dropping them with the old `App` releases them on restart.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::game::{Key, LAYOUT};

pub(super) type ClickHandler = Closure<dyn FnMut(web_sys::MouseEvent)>;

fn find_or_create(
    doc: &Document,
    parent: &Element,
    selector: &str,
    build: impl FnOnce(&Element),
) -> Result<Element, JsValue> {
    if let Some(el) = doc.query_selector(selector)? {
        return Ok(el);
    }
    let el = doc.create_element("div")?;
    build(&el);
    parent.append_child(&el)?;
    Ok(el)
}

/// Populate `#row1`..`#row3` inside `.keyboard`, creating any that are missing.
pub(super) fn mount(doc: &Document) -> Result<Vec<ClickHandler>, JsValue> {
    let body: Element = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .into();
    let mut handlers = Vec::new();
    let keyboard = find_or_create(doc, &body, ".keyboard", |el| el.set_class_name("keyboard"))?;

    for (i, row) in LAYOUT.iter().enumerate() {
        let row_id = format!("row{}", i + 1);
        let row_el = find_or_create(doc, &keyboard, &format!("#{row_id}"), |el| {
            el.set_id(&row_id);
            el.set_class_name("row");
        })?;
        row_el.set_inner_html("");
        for &token in row.iter() {
            let key: HtmlElement = doc.create_element("div")?.dyn_into()?;
            key.set_class_name(if Key::is_wide(token) { "key wide" } else { "key" });
            key.set_text_content(Some(token));
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                super::dispatch_token(token);
            }) as Box<dyn FnMut(_)>);
            key.set_onclick(Some(closure.as_ref().unchecked_ref()));
            handlers.push(closure);
            row_el.append_child(&key)?;
        }
    }
    Ok(handlers)
}

/// Wire the hint trigger: the page's hint image if present, else `#hint`,
/// else a new button.
pub(super) fn mount_hint(doc: &Document) -> Result<ClickHandler, JsValue> {
    let existing = match doc.query_selector(r#"img[src="assets/hint.png"]"#)? {
        Some(el) => Some(el),
        None => doc.get_element_by_id("hint"),
    };
    let trigger: HtmlElement = match existing {
        Some(el) => el.dyn_into()?,
        None => {
            let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
            let btn: HtmlElement = doc.create_element("button")?.dyn_into()?;
            btn.set_id("hint");
            btn.set_text_content(Some("Hint"));
            body.append_child(&btn)?;
            btn
        }
    };
    trigger.style().set_property("cursor", "pointer")?;
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        super::reveal_hint();
    }) as Box<dyn FnMut(_)>);
    trigger.set_onclick(Some(closure.as_ref().unchecked_ref()));
    Ok(closure)
}
