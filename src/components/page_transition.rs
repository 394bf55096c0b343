use crate::configs::{
    classes,
    EXTERNAL_LINK_PREFIXES,
    NAVIGATION_DELAY_MS,
    TRANSITION_START_DELAY_MS,
};
use crate::dom::{ Anchor, Element, Page };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Fade out, then navigate.
    Transition,
    /// Let the browser handle the click.
    Native,
}

/// Decides how a click on `anchor` is handled on a page served from `hostname`.
pub fn classify_link<E>(anchor: &Anchor<E>, hostname: &str) -> LinkAction {
    let href = anchor.href.trim();
    let internal = is_relative(href) || (!hostname.is_empty() && href.contains(hostname));
    let external = EXTERNAL_LINK_PREFIXES.iter().any(|prefix| anchor.resolved.starts_with(prefix));

    if !internal || external || anchor.target == "_blank" {
        return LinkAction::Native;
    }
    if href.ends_with(".html") {
        LinkAction::Transition
    } else {
        LinkAction::Native
    }
}

/// Bare hrefs such as `about.html` count as relative too, not only `./` and `/` forms.
fn is_relative(href: &str) -> bool {
    if href.is_empty() || href.starts_with("//") {
        return false;
    }
    // A scheme is letters, digits, '+', '-' or '.' before the first ':'.
    match href.find(':') {
        Some(colon) => {
            let scheme = &href[..colon];
            scheme.is_empty() ||
                !scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => true,
    }
}

#[derive(Clone)]
pub struct PageTransition<P: Page> {
    page: P,
}

impl<P: Page> PageTransition<P> {
    pub fn mount(page: P) -> Self {
        let transition = Self { page };
        transition.start();
        transition.bind_links();
        transition
    }

    /// Two steps so the browser lays out the start state before `loaded` lands.
    fn start(&self) {
        if let Some(main) = self.page.main_region() {
            main.add_class(classes::PAGE_TRANSITION);
            self.page.set_timeout(TRANSITION_START_DELAY_MS, move || {
                main.add_class(classes::LOADED);
            });
        }
    }

    fn bind_links(&self) {
        let hostname = self.page.hostname();
        let mut bound = 0;
        for anchor in self.page.anchors() {
            if classify_link(&anchor, &hostname) != LinkAction::Transition {
                continue;
            }
            let transition = self.clone();
            let href = anchor.href.clone();
            self.page.on_click(&anchor.element, move |event| {
                event.prevent_default();
                transition.navigate(&href);
            });
            bound += 1;
        }
        log::debug!("Page transitions bound to {} link(s)", bound);
    }

    pub fn navigate(&self, href: &str) {
        match self.page.main_region() {
            Some(main) => {
                main.remove_class(classes::LOADED);
                let page = self.page.clone();
                let href = href.to_string();
                self.page.set_timeout(NAVIGATION_DELAY_MS, move || page.navigate(&href));
            }
            None => self.page.navigate(href),
        }
    }
}
