//! WebAssembly bindings for the sift search widget.
//!
//! Provides the browser-facing `SiftWidget`: it fetches the article index,
//! listens to the search input, debounces keystrokes, and writes rendered
//! results into the dropdown container. All search semantics live in the
//! plain-Rust modules; this file is only DOM wiring.
//!
//! Typical page setup:
//!
//! ```text
//! import init, { SiftWidget } from "./sift.js";
//! await init();
//! const widget = new SiftWidget({ baseUrl: "/blog" });
//! widget.attach();
//! ```
//!
//! `attach()` is a silent no-op (returns `false`) on pages without the
//! search markup, so the same bundle can ship on every page.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Event, HtmlInputElement, Response};

use crate::query::{evaluate, QueryConfig, SearchOutcome};
use crate::render::{render_entries, RenderEntry};
use crate::store::{parse_index, IndexError, IndexStore};

/// Widget options passed from JavaScript.
///
/// Every field is optional on the JS side; missing fields take the defaults
/// below, which match the markup conventions of the stock site templates.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Prefix for the index URL; the widget fetches `{baseUrl}/search-index.json`.
    pub base_url: String,
    /// Queries shorter than this many characters hide the dropdown (default: 2).
    pub min_query_len: usize,
    /// Maximum results shown in the dropdown (default: 8).
    pub max_results: usize,
    /// Keystroke debounce window in milliseconds (default: 300).
    pub debounce_ms: u32,
    /// Selector for the query `<input>` element.
    pub input_selector: String,
    /// Element id of the results dropdown container.
    pub results_id: String,
    /// Selector for the form whose submit triggers an immediate search.
    pub form_selector: String,
    /// Selector for the widget root; clicks outside it close the dropdown.
    pub container_selector: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            min_query_len: 2,
            max_results: 8,
            debounce_ms: 300,
            input_selector: ".search-form input[name=\"q\"]".to_string(),
            results_id: "search-results".to_string(),
            form_selector: ".search-form".to_string(),
            container_selector: ".header-search-widget".to_string(),
        }
    }
}

impl WidgetOptions {
    fn query_config(&self) -> QueryConfig {
        QueryConfig {
            min_query_len: self.min_query_len,
            max_results: self.max_results,
            debounce_ms: self.debounce_ms,
        }
    }
}

/// A scheduled debounce timer. Dropping it cancels the timer, so replacing
/// the previous `PendingSearch` on every keystroke is all the debounce
/// bookkeeping there is.
struct PendingSearch {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for PendingSearch {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Event listeners installed by `attach()`, kept alive here and removed by
/// `detach()`.
#[derive(Default)]
struct Listeners {
    input: Option<Closure<dyn FnMut(Event)>>,
    submit: Option<Closure<dyn FnMut(Event)>>,
    outside_click: Option<Closure<dyn FnMut(Event)>>,
    placeholder_click: Option<Closure<dyn FnMut(Event)>>,
}

struct Inner {
    config: QueryConfig,
    options: WidgetOptions,
    store: IndexStore,
    input: Option<HtmlInputElement>,
    results: Option<Element>,
    form: Option<Element>,
    listeners: Listeners,
    pending: Option<PendingSearch>,
}

impl Inner {
    /// Read the input and present whatever it currently holds.
    ///
    /// Called from the debounce timer and from form submit. Only needs a
    /// shared borrow: the dropdown lives in the DOM, not in `Inner`.
    fn run_search(&self) {
        if let Some(input) = &self.input {
            self.present(&input.value());
        }
    }

    /// Evaluate a query and update the dropdown accordingly.
    fn present(&self, query: &str) {
        match evaluate(&self.store, query, &self.config) {
            SearchOutcome::Hidden => self.hide_results(),
            SearchOutcome::Placeholder(kind) => {
                let html = render_entries(&[RenderEntry::placeholder(kind)]);
                self.show_results(&html);
            }
            SearchOutcome::Results(results) => {
                let index = match self.store.index() {
                    Some(index) => index,
                    None => return,
                };
                let entries: Vec<RenderEntry> = results
                    .iter()
                    .filter_map(|r| index.get(r.article_id))
                    .map(RenderEntry::from_article)
                    .collect();
                self.show_results(&render_entries(&entries));
            }
        }
    }

    fn show_results(&self, html: &str) {
        if let Some(results) = &self.results {
            results.set_inner_html(html);
            let _ = results.class_list().add_1("active");
        }
    }

    fn hide_results(&self) {
        if let Some(results) = &self.results {
            let _ = results.class_list().remove_1("active");
            results.set_inner_html("");
        }
    }
}

/// The search widget: one per page.
///
/// Construct it with optional [`WidgetOptions`], then call
/// [`SiftWidget::attach`] once the DOM is ready. The index fetch starts
/// inside `attach()` and resolves in the background; queries typed before it
/// finishes get a loading placeholder instead of an error.
#[wasm_bindgen]
pub struct SiftWidget {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl SiftWidget {
    /// Create a widget. Does not touch the DOM, so this is safe to call
    /// before the document has loaded.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> SiftWidget {
        let options: WidgetOptions = match options {
            Some(opts) => from_value(opts).unwrap_or_default(),
            None => WidgetOptions::default(),
        };
        let config = options.query_config();
        SiftWidget {
            inner: Rc::new(RefCell::new(Inner {
                config,
                options,
                store: IndexStore::new(),
                input: None,
                results: None,
                form: None,
                listeners: Listeners::default(),
                pending: None,
            })),
        }
    }

    /// Find the search markup, wire up listeners, and start the index fetch.
    ///
    /// Returns `Ok(false)` without side effects when the page has no search
    /// input or results container. Errors only on malformed selectors or a
    /// selector matching a non-input element.
    pub fn attach(&self) -> Result<bool, JsValue> {
        if self.inner.borrow().input.is_some() {
            return Ok(true);
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let (input_selector, results_id, form_selector, container_selector) = {
            let inner = self.inner.borrow();
            (
                inner.options.input_selector.clone(),
                inner.options.results_id.clone(),
                inner.options.form_selector.clone(),
                inner.options.container_selector.clone(),
            )
        };

        let input = match document.query_selector(&input_selector)? {
            Some(el) => el,
            None => return Ok(false),
        };
        let results = match document.get_element_by_id(&results_id) {
            Some(el) => el,
            None => return Ok(false),
        };
        let input: HtmlInputElement = input
            .dyn_into()
            .map_err(|_| JsValue::from_str("input selector matched a non-input element"))?;
        let form = document.query_selector(&form_selector)?;

        // Keystrokes schedule a debounced search.
        let input_listener = {
            let state = Rc::clone(&self.inner);
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                schedule_search(&state);
            })
        };
        input.add_event_listener_with_callback("input", as_function(&input_listener))?;

        // Submit searches immediately instead of navigating away.
        let submit_listener = match &form {
            Some(form_el) => {
                let state = Rc::clone(&self.inner);
                let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                    event.prevent_default();
                    state.borrow().run_search();
                });
                form_el.add_event_listener_with_callback("submit", as_function(&closure))?;
                Some(closure)
            }
            None => None,
        };

        // Clicks outside the widget close the dropdown.
        let outside_listener = {
            let state = Rc::clone(&self.inner);
            let selector = container_selector;
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(&selector).ok().flatten())
                    .is_some();
                if !inside {
                    state.borrow().hide_results();
                }
            });
            document.add_event_listener_with_callback("click", as_function(&closure))?;
            closure
        };

        // Placeholder rows carry href="#"; swallow those clicks so they
        // don't scroll the page to the top.
        let placeholder_listener = {
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let on_placeholder = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(".search-result-placeholder").ok().flatten())
                    .is_some();
                if on_placeholder {
                    event.prevent_default();
                }
            });
            results.add_event_listener_with_callback("click", as_function(&closure))?;
            closure
        };

        {
            let mut inner = self.inner.borrow_mut();
            inner.input = Some(input);
            inner.results = Some(results);
            inner.form = form;
            inner.listeners.input = Some(input_listener);
            inner.listeners.submit = submit_listener;
            inner.listeners.outside_click = Some(outside_listener);
            inner.listeners.placeholder_click = Some(placeholder_listener);
        }

        spawn_index_fetch(&self.inner);
        Ok(true)
    }

    /// Remove listeners, cancel any pending search, and close the dropdown.
    ///
    /// Dropping the listener closures also breaks the reference cycle that
    /// `attach()` created, so a detached widget can be garbage collected.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.pending = None;
        inner.hide_results();

        if let (Some(input), Some(closure)) = (&inner.input, &inner.listeners.input) {
            let _ = input.remove_event_listener_with_callback("input", as_function(closure));
        }
        if let (Some(form), Some(closure)) = (&inner.form, &inner.listeners.submit) {
            let _ = form.remove_event_listener_with_callback("submit", as_function(closure));
        }
        if let Some(closure) = &inner.listeners.outside_click {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback("click", as_function(closure));
            }
        }
        if let (Some(results), Some(closure)) = (&inner.results, &inner.listeners.placeholder_click)
        {
            let _ = results.remove_event_listener_with_callback("click", as_function(closure));
        }

        inner.listeners = Listeners::default();
        inner.input = None;
        inner.results = None;
        inner.form = None;
    }

    /// Resolve the index from a JSON string instead of fetching it.
    ///
    /// Useful when the page embeds the index inline, and for tests that
    /// drive the widget without a server. The first resolution wins, so
    /// call this before `attach()` to skip the network fetch's result.
    pub fn set_index_json(&self, json: &str) -> Result<(), JsValue> {
        match parse_index(json) {
            Ok(index) => {
                self.inner.borrow_mut().store.resolve(Ok(index));
                Ok(())
            }
            Err(err) => {
                let msg = err.to_string();
                self.inner.borrow_mut().store.resolve(Err(err));
                Err(JsValue::from_str(&msg))
            }
        }
    }

    /// Evaluate `query` as if it had been typed, updating the dropdown
    /// immediately with no debounce. The input element is left untouched.
    pub fn run_query(&self, query: &str) {
        self.inner.borrow().present(query);
    }

    /// Rank `query` and return the hits as an array of `{articleId, score}`
    /// objects, capped the same way as the dropdown, without touching the
    /// DOM. For host pages that render results themselves; `articleId` is
    /// the article's position in the index file's array. Empty while the
    /// index is loading or unavailable, and for queries below the minimum
    /// length.
    pub fn query_results(&self, query: &str) -> Result<JsValue, JsValue> {
        let inner = self.inner.borrow();
        let results = match evaluate(&inner.store, query, &inner.config) {
            SearchOutcome::Results(results) => results,
            _ => Vec::new(),
        };
        to_value(&results).map_err(|e| e.to_string().into())
    }

    /// Close the dropdown and clear its contents.
    pub fn hide(&self) {
        self.inner.borrow().hide_results();
    }

    /// True once the index has loaded and queries return real results.
    pub fn is_ready(&self) -> bool {
        self.inner.borrow().store.index().is_some()
    }

    /// Number of articles in the loaded index (0 while loading or failed).
    pub fn article_count(&self) -> usize {
        self.inner.borrow().store.index().map_or(0, |index| index.len())
    }
}

/// View a closure as the [`Function`] the DOM callback APIs take.
fn as_function<T: ?Sized>(closure: &Closure<T>) -> &Function {
    closure.as_ref().unchecked_ref()
}

/// Replace any pending debounce timer with a fresh one.
fn schedule_search(state: &Rc<RefCell<Inner>>) {
    let closure = {
        let fire_state = Rc::clone(state);
        // The fired closure stays stored in `pending` while it runs; it is
        // only dropped when the next keystroke schedules a replacement.
        Closure::<dyn FnMut()>::new(move || {
            fire_state.borrow().run_search();
        })
    };

    let mut inner = state.borrow_mut();
    inner.pending = None;

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let delay = inner.config.debounce_ms as i32;
    if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        as_function(&closure),
        delay,
    ) {
        inner.pending = Some(PendingSearch {
            handle,
            _closure: closure,
        });
    }
}

/// Fetch and parse the index in the background, then resolve the store.
///
/// Fire-and-forget: failures downgrade the widget to placeholder responses
/// and log a console warning, mirroring what a static site wants when the
/// index file is missing.
fn spawn_index_fetch(state: &Rc<RefCell<Inner>>) {
    let url = {
        let inner = state.borrow();
        format!("{}/search-index.json", inner.options.base_url)
    };
    let state = Rc::clone(state);

    spawn_local(async move {
        match fetch_text(&url).await {
            Ok(body) => match parse_index(&body) {
                Ok(index) => {
                    let count = index.len();
                    state.borrow_mut().store.resolve(Ok(index));
                    web_sys::console::log_1(
                        &format!("Search index loaded: {} articles", count).into(),
                    );
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("Search index not available: {}", err).into(),
                    );
                    state.borrow_mut().store.resolve(Err(err));
                }
            },
            Err(err) => {
                let msg = err.as_string().unwrap_or_else(|| format!("{:?}", err));
                web_sys::console::warn_1(
                    &format!("Search index not available: {}", msg).into(),
                );
                state.borrow_mut().store.resolve(Err(IndexError::Fetch(msg)));
            }
        }
    });
}

/// GET a URL and return the response body, treating non-2xx as an error.
async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    let body = JsFuture::from(response.text()?).await?;
    Ok(body.as_string().unwrap_or_default())
}
