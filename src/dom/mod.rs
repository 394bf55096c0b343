//! The slice of the browser the site components talk to.
//!
//! Every lookup hands back an `Option`; components branch on it explicitly so
//! a page that omits part of the markup just loses that behavior.

use std::cell::Cell;
use std::future::Future;
use crate::utils::FormSubmission;

pub mod web;

pub trait Element: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// True when `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_html(&self, html: &str);
    fn set_attribute(&self, name: &str, value: &str);
    fn set_disabled(&self, disabled: bool);
    fn parent(&self) -> Option<Self>;
    fn find_by_class(&self, class: &str) -> Option<Self>;
    fn find_all_by_class(&self, class: &str) -> Vec<Self>;
    fn append_child(&self, child: &Self);
    fn detach(&self);

    fn add_classes(&self, classes: &str) {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
    }

    fn set_class_when(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// An anchor as the page sees it: the raw `href` attribute, the resolved URL
/// and its `target`.
#[derive(Clone, Debug)]
pub struct Anchor<E> {
    pub element: E,
    pub href: String,
    pub resolved: String,
    pub target: String,
}

/// Event handed to component listeners. Listeners call `prevent_default`,
/// the page implementation forwards it to the real event.
#[derive(Debug)]
pub struct DomEvent<E> {
    target: Option<E>,
    prevented: Cell<bool>,
}

impl<E> DomEvent<E> {
    pub fn new(target: Option<E>) -> Self {
        Self { target, prevented: Cell::new(false) }
    }

    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    pub fn prevent_default(&self) {
        self.prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

pub trait Page: Clone + 'static {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    fn main_region(&self) -> Option<Self::Element>;
    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    fn anchors(&self) -> Vec<Anchor<Self::Element>>;

    fn form_values(&self, form: &Self::Element) -> FormSubmission;
    fn reset_form(&self, form: &Self::Element);
    fn submit_control(&self, form: &Self::Element) -> Option<Self::Element>;

    fn on_click<F>(&self, element: &Self::Element, handler: F)
        where F: FnMut(&DomEvent<Self::Element>) + 'static;
    fn on_document_click<F>(&self, handler: F)
        where F: FnMut(&DomEvent<Self::Element>) + 'static;
    fn on_submit<F>(&self, form: &Self::Element, handler: F)
        where F: FnMut(&DomEvent<Self::Element>) + 'static;
    fn on_scroll<F>(&self, handler: F) where F: FnMut() + 'static;

    fn scroll_offset(&self) -> f64;
    fn scroll_to_top(&self);

    fn set_timeout<F>(&self, delay_ms: u32, callback: F) where F: FnOnce() + 'static;
    fn request_animation_frame<F>(&self, callback: F) where F: FnOnce() + 'static;
    fn spawn<Fut>(&self, future: Fut) where Fut: Future<Output = ()> + 'static;

    fn alert(&self, message: &str);
    fn hostname(&self) -> String;
    fn navigate(&self, href: &str);
}

/// Durable string storage surviving reloads.
pub trait KeyValueStore: 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
