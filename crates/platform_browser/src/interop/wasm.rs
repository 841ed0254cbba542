use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MediaQueryList, MutationObserver, MutationObserverInit};

use super::*;

/// Keep-alive handle for a registered media query listener.
///
/// Dropping the handle releases the `onchange` closure, which detaches the
/// listener.
pub struct MediaWatch {
    list: MediaQueryList,
    _closure: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for MediaWatch {
    fn drop(&mut self) {
        self.list.set_onchange(None);
    }
}

impl std::fmt::Debug for MediaWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaWatch")
            .field("media", &self.list.media())
            .finish()
    }
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| "browser call failed".to_string())
}

fn document() -> Result<Document, String> {
    web_sys::window()
        .ok_or_else(|| "no window available".to_string())?
        .document()
        .ok_or_else(|| "no document available".to_string())
}

fn element(id: &str) -> Result<web_sys::Element, String> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("element #{id} not found"))
}

fn html_element(id: &str) -> Result<HtmlElement, String> {
    element(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("element #{id} is not an HTML element"))
}

fn toggle_class(list: &web_sys::DomTokenList, class: &str, present: bool) -> Result<(), String> {
    if present {
        list.add_1(class).map_err(js_error)
    } else {
        list.remove_1(class).map_err(js_error)
    }
}

pub fn set_body_class(class: &str, present: bool) -> Result<(), String> {
    let body = document()?
        .body()
        .ok_or_else(|| "no document body".to_string())?;
    toggle_class(&body.class_list(), class, present)
}

pub fn set_element_class(id: &str, class: &str, present: bool) -> Result<(), String> {
    toggle_class(&element(id)?.class_list(), class, present)
}

pub fn set_element_style(id: &str, property: &str, value: Option<&str>) -> Result<(), String> {
    let style = html_element(id)?.style();
    match value {
        Some(value) => style.set_property(property, value).map_err(js_error),
        None => style.remove_property(property).map(|_| ()).map_err(js_error),
    }
}

pub fn element_height(id: &str) -> Result<i32, String> {
    Ok(html_element(id)?.offset_height())
}

pub fn set_document_title(title: &str) -> Result<(), String> {
    document()?.set_title(title);
    Ok(())
}

pub fn watch_media(query: &str, handler: Box<dyn Fn(bool)>) -> Result<MediaWatch, String> {
    let list = web_sys::window()
        .ok_or_else(|| "no window available".to_string())?
        .match_media(query)
        .map_err(js_error)?
        .ok_or_else(|| format!("media query {query:?} rejected"))?;
    let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        handler(event.matches());
    }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
    list.set_onchange(Some(closure.as_ref().unchecked_ref()));
    Ok(MediaWatch {
        list,
        _closure: closure,
    })
}

pub fn current_breakpoint(queries: &[(Breakpoint, &str)]) -> Result<Option<Breakpoint>, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    for (breakpoint, query) in queries {
        if let Some(list) = window.match_media(query).map_err(js_error)? {
            if list.matches() {
                return Ok(Some(*breakpoint));
            }
        }
    }
    Ok(None)
}

pub fn on_element_attach(id: &str, handler: Box<dyn FnOnce()>) -> Result<(), String> {
    let doc = document()?;
    if doc.get_element_by_id(id).is_some() {
        handler();
        return Ok(());
    }
    let body = doc.body().ok_or_else(|| "no document body".to_string())?;
    let id = id.to_owned();
    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(handler)));
    let observer: Rc<RefCell<Option<MutationObserver>>> = Rc::new(RefCell::new(None));

    let observer_slot = Rc::clone(&observer);
    let callback = Closure::wrap(Box::new(move || {
        let attached = document()
            .ok()
            .and_then(|doc| doc.get_element_by_id(&id))
            .is_some();
        if !attached {
            return;
        }
        if let Some(observer) = observer_slot.borrow_mut().take() {
            observer.disconnect();
        }
        if let Some(handler) = pending.borrow_mut().take() {
            handler();
        }
    }) as Box<dyn FnMut()>);

    let created =
        MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    created
        .observe_with_options(&body, &options)
        .map_err(js_error)?;
    *observer.borrow_mut() = Some(created);
    // One-shot hook; the callback stays alive until the page unloads.
    callback.forget();
    Ok(())
}
