use std::cell::{ Cell, RefCell };
use std::rc::Rc;
use crate::configs::{ classes, SCROLL_THRESHOLD };
use crate::dom::{ Element, Page };

const ARROW_ICON: &str = r#"
      <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18"></path>
      </svg>
    "#;

pub struct BackToTop<P: Page> {
    page: P,
    button: P::Element,
}

impl<P: Page> BackToTop<P> {
    /// Creates the floating button and starts watching the scroll position.
    pub fn mount(page: P) -> Option<Rc<RefCell<Self>>> {
        let button = page.create_element("button")?;
        button.add_class(classes::BACK_TO_TOP);
        button.set_attribute("aria-label", "Back to top");
        button.set_html(ARROW_ICON);

        let scroller = page.clone();
        page.on_click(&button, move |_| scroller.scroll_to_top());
        match page.body() {
            Some(body) => body.append_child(&button),
            None => log::warn!("Page has no body, back-to-top button not attached"),
        }

        let back_to_top = Rc::new(RefCell::new(Self { page: page.clone(), button }));

        // One visibility check per animation frame, however many scroll events arrive.
        let frame_pending = Rc::new(Cell::new(false));
        let watcher = back_to_top.clone();
        let frames = page.clone();
        page.on_scroll(move || {
            if frame_pending.replace(true) {
                return;
            }
            let watcher = watcher.clone();
            let frame_pending = frame_pending.clone();
            frames.request_animation_frame(move || {
                watcher.borrow().update_visibility();
                frame_pending.set(false);
            });
        });

        Some(back_to_top)
    }

    pub fn button(&self) -> &P::Element {
        &self.button
    }

    pub fn update_visibility(&self) {
        let visible = self.page.scroll_offset() > SCROLL_THRESHOLD;
        self.button.set_class_when(classes::VISIBLE, visible);
    }
}
