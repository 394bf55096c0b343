use std::cell::RefCell;
use std::rc::Rc;
use crate::configs::{ classes, ids };
use crate::dom::{ Element, Page };

pub struct MobileMenu<P: Page> {
    page: P,
    is_open: bool,
}

impl<P: Page> MobileMenu<P> {
    pub fn new(page: P) -> Self {
        Self { page, is_open: false }
    }

    /// Binds the menu button and the document-wide outside-click listener.
    pub fn mount(page: P) -> Rc<RefCell<Self>> {
        let menu = Rc::new(RefCell::new(Self::new(page.clone())));

        let button = page.element_by_id(ids::MOBILE_MENU_BUTTON);
        if let (Some(button), Some(_)) = (&button, page.element_by_id(ids::MOBILE_MENU)) {
            let menu = menu.clone();
            page.on_click(button, move |_| menu.borrow_mut().toggle());
        }

        let outside = menu.clone();
        let lookup = page.clone();
        page.on_document_click(move |event| {
            let Some(panel) = lookup.element_by_id(ids::MOBILE_MENU) else {
                return;
            };
            let Some(target) = event.target() else {
                return;
            };
            let on_button = lookup
                .element_by_id(ids::MOBILE_MENU_BUTTON)
                .is_some_and(|button| button.contains(target));
            if !panel.contains(target) && !on_button {
                outside.borrow_mut().close();
            }
        });

        menu
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        if let Some(panel) = self.page.element_by_id(ids::MOBILE_MENU) {
            self.is_open = !self.is_open;
            panel.set_class_when(classes::HIDDEN, !self.is_open);
            log::debug!("Mobile menu {}", if self.is_open { "opened" } else { "closed" });
        }
    }

    pub fn close(&mut self) {
        if let Some(panel) = self.page.element_by_id(ids::MOBILE_MENU) {
            self.is_open = false;
            panel.add_class(classes::HIDDEN);
        }
    }
}
