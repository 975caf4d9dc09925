#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
const GRID_SELECTOR: &str = ".games-grid";
#[cfg(target_arch = "wasm32")]
const ITEM_SELECTOR: &str = ".game-capsule";
#[cfg(target_arch = "wasm32")]
const LONE_ITEM_CLASS: &str = "single-last";
#[cfg(target_arch = "wasm32")]
const RESIZE_DEBOUNCE_MS: u32 = 80;
#[cfg(target_arch = "wasm32")]
const SETTLE_DELAY_MS: u32 = 120;

pub fn lone_trailing_item(offsets: &[i32]) -> Option<usize> {
    let last_top = *offsets.last()?;
    let in_last_row = offsets.iter().filter(|top| **top == last_top).count();
    (in_last_row == 1).then(|| offsets.len() - 1)
}

#[cfg(target_arch = "wasm32")]
pub fn recompute() {
    let Some(document) = crate::dom::document() else {
        return;
    };
    let Ok(Some(grid)) = document.query_selector(GRID_SELECTOR) else {
        return;
    };
    let Ok(nodes) = grid.query_selector_all(ITEM_SELECTOR) else {
        return;
    };
    let items: Vec<web_sys::HtmlElement> = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect();
    for item in &items {
        let _ = item.class_list().remove_1(LONE_ITEM_CLASS);
    }
    let offsets: Vec<i32> = items.iter().map(|item| item.offset_top()).collect();
    if let Some(index) = lone_trailing_item(&offsets) {
        let _ = items[index].class_list().add_1(LONE_ITEM_CLASS);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct GridCorrector {
    _resize: crate::dom::EventListener,
    _pending: Rc<RefCell<Option<Timeout>>>,
    _settle: Timeout,
    observer: web_sys::MutationObserver,
    _on_mutation: Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl GridCorrector {
    pub fn install(content: &web_sys::Element) -> Option<Self> {
        let window = web_sys::window()?;

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let resize_pending = Rc::clone(&pending);
        let resize = crate::dom::EventListener::new(&window, "resize", move |_event| {
            // Replacing the timeout cancels the previous one.
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, recompute);
            resize_pending.borrow_mut().replace(timeout);
        })?;

        let on_mutation = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _observer: web_sys::MutationObserver| recompute(),
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>);
        let observer = web_sys::MutationObserver::new(on_mutation.as_ref().unchecked_ref()).ok()?;
        let options = web_sys::MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(content, &options).ok()?;

        recompute();
        let settle = Timeout::new(SETTLE_DELAY_MS, recompute);
        tracing::debug!("grid: corrector installed");

        Some(Self {
            _resize: resize,
            _pending: pending,
            _settle: settle,
            observer,
            _on_mutation: on_mutation,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GridCorrector {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(target_arch = "wasm32")]
pub fn use_grid_corrector(content_id: &'static str) {
    let mut corrector = use_signal(|| None::<GridCorrector>);
    use_effect(move || {
        if corrector.peek().is_some() {
            return;
        }
        let Some(content) = crate::dom::document().and_then(|d| d.get_element_by_id(content_id))
        else {
            return;
        };
        match GridCorrector::install(&content) {
            Some(installed) => corrector.set(Some(installed)),
            None => tracing::warn!("grid: failed to install corrector"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_item_on_last_row_is_flagged() {
        assert_eq!(lone_trailing_item(&[0, 0, 0, 240, 240, 240, 480]), Some(6));
    }

    #[test]
    fn full_last_row_is_not_flagged() {
        assert_eq!(lone_trailing_item(&[0, 0, 240, 240]), None);
        assert_eq!(lone_trailing_item(&[0, 0, 0, 240, 240]), None);
    }

    #[test]
    fn empty_grid_has_no_lone_item() {
        assert_eq!(lone_trailing_item(&[]), None);
    }

    #[test]
    fn single_column_layout_flags_only_the_last() {
        assert_eq!(lone_trailing_item(&[0, 100, 200]), Some(2));
    }
}
