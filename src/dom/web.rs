use std::future::Future;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document,
    EventTarget,
    FormData,
    HtmlAnchorElement,
    HtmlButtonElement,
    HtmlFormElement,
    ScrollBehavior,
    ScrollToOptions,
    Storage,
    Window,
};
use crate::components::{ mount_all, Site };
use crate::configs::contact_endpoint;
use crate::server::{ HttpSubmitter, SimulatedSubmitter, Submitter };
use crate::utils::FormSubmission;
use super::{ Anchor, DomEvent, Element, KeyValueStore, Page };

#[derive(Clone, Debug)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        match self.0.query_selector_all(selector) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.get(i))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .map(WebElement)
                .collect(),
            Err(err) => {
                log::warn!("querySelectorAll({}) failed: {:?}", selector, err);
                Vec::new()
            }
        }
    }
}

impl Element for WebElement {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("Failed to remove class {}: {:?}", class, err);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &web_sys::Node = other.0.as_ref();
        self.0.contains(Some(other))
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            log::warn!("Failed to set attribute {}: {:?}", name, err);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            self.set_attribute("disabled", "");
        } else {
            let _ = self.0.remove_attribute("disabled");
        }
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(WebElement)
    }

    fn find_by_class(&self, class: &str) -> Option<Self> {
        self.0.query_selector(&format!(".{}", class)).ok().flatten().map(WebElement)
    }

    fn find_all_by_class(&self, class: &str) -> Vec<Self> {
        self.query_all(&format!(".{}", class))
    }

    fn append_child(&self, child: &Self) {
        if let Err(err) = self.0.append_child(&child.0) {
            log::warn!("Failed to append child: {:?}", err);
        }
    }

    fn detach(&self) {
        self.0.remove();
    }
}

/// Window and document of the running page.
#[derive(Clone, Debug)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn listen<F>(target: &EventTarget, kind: &str, mut handler: F)
        where F: FnMut(&DomEvent<WebElement>) + 'static
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(WebElement);
            let dom_event = DomEvent::new(target);
            handler(&dom_event);
            if dom_event.default_prevented() {
                event.prevent_default();
            }
        });
        if let Err(err) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            log::warn!("Failed to register {} listener: {:?}", kind, err);
        }
        // Listeners live as long as the page.
        closure.forget();
    }
}

impl Page for WebPage {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn root(&self) -> Option<WebElement> {
        self.document.document_element().map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|body| WebElement(body.into()))
    }

    fn main_region(&self) -> Option<WebElement> {
        self.document.query_selector("main").ok().flatten().map(WebElement)
    }

    fn create_element(&self, tag: &str) -> Option<WebElement> {
        match self.document.create_element(tag) {
            Ok(element) => Some(WebElement(element)),
            Err(err) => {
                log::warn!("Failed to create <{}>: {:?}", tag, err);
                None
            }
        }
    }

    fn anchors(&self) -> Vec<Anchor<WebElement>> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        root.query_all("a[href]")
            .into_iter()
            .filter_map(|element| {
                let anchor = element.0.dyn_ref::<HtmlAnchorElement>()?;
                Some(Anchor {
                    href: element.0.get_attribute("href").unwrap_or_default(),
                    resolved: anchor.href(),
                    target: anchor.target(),
                    element: element.clone(),
                })
            })
            .collect()
    }

    fn form_values(&self, form: &WebElement) -> FormSubmission {
        let Some(form) = form.0.dyn_ref::<HtmlFormElement>() else {
            return FormSubmission::new();
        };
        let data = match FormData::new_with_form(form) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Failed to read form data: {:?}", err);
                return FormSubmission::new();
            }
        };
        match js_sys::try_iter(&data) {
            Ok(Some(entries)) => entries
                .flatten()
                .filter_map(|entry| {
                    let pair: js_sys::Array = entry.unchecked_into();
                    Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
                })
                .collect(),
            _ => FormSubmission::new(),
        }
    }

    fn reset_form(&self, form: &WebElement) {
        if let Some(form) = form.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn submit_control(&self, form: &WebElement) -> Option<WebElement> {
        form.0.query_selector("button[type=\"submit\"]").ok().flatten().map(WebElement)
    }

    fn on_click<F>(&self, element: &WebElement, handler: F)
        where F: FnMut(&DomEvent<WebElement>) + 'static
    {
        Self::listen(element.0.as_ref(), "click", handler);
    }

    fn on_document_click<F>(&self, handler: F) where F: FnMut(&DomEvent<WebElement>) + 'static {
        Self::listen(self.document.as_ref(), "click", handler);
    }

    fn on_submit<F>(&self, form: &WebElement, handler: F)
        where F: FnMut(&DomEvent<WebElement>) + 'static
    {
        Self::listen(form.0.as_ref(), "submit", handler);
    }

    fn on_scroll<F>(&self, mut handler: F) where F: FnMut() + 'static {
        Self::listen(self.window.as_ref(), "scroll", move |_| handler());
    }

    fn scroll_offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(_) => self.root().map(|root| root.0.scroll_top() as f64).unwrap_or_default(),
        }
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_timeout<F>(&self, delay_ms: u32, callback: F) where F: FnOnce() + 'static {
        Timeout::new(delay_ms, callback).forget();
    }

    fn request_animation_frame<F>(&self, callback: F) where F: FnOnce() + 'static {
        let callback = Closure::once_into_js(callback);
        if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("Failed to request animation frame: {:?}", err);
        }
    }

    fn spawn<Fut>(&self, future: Fut) where Fut: Future<Output = ()> + 'static {
        wasm_bindgen_futures::spawn_local(future);
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", err);
        }
    }

    fn hostname(&self) -> String {
        self.window.location().hostname().unwrap_or_default()
    }

    fn navigate(&self, href: &str) {
        if let Err(err) = self.window.location().set_href(href) {
            log::error!("Navigation to {} failed: {:?}", href, err);
        }
    }
}

/// `window.localStorage`; reads as empty and drops writes when unavailable.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {:?}", err);
                None
            }
        };
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("Failed to persist {}: {:?}", key, err);
            }
        }
    }
}

/// Binds every site component to the live document.
pub fn mount_site() -> Option<Site<WebPage, LocalStore>> {
    let Some(page) = WebPage::new() else {
        log::error!("No window or document, site behavior not mounted");
        return None;
    };
    let store = LocalStore::new(page.window());
    let submitter: Rc<dyn Submitter> = match contact_endpoint() {
        Some(endpoint) => Rc::new(HttpSubmitter::new(endpoint)),
        None => Rc::new(SimulatedSubmitter::default()),
    };
    Some(mount_all(page, store, submitter))
}
