mod back_to_top;
mod contact_form;
mod mobile_menu;
mod page_transition;
mod theme_manager;

use std::cell::RefCell;
use std::rc::Rc;
use crate::dom::{ KeyValueStore, Page };
use crate::server::Submitter;

pub use back_to_top::BackToTop;
pub use contact_form::{ ContactForm, FormPhase };
pub use mobile_menu::MobileMenu;
pub use page_transition::{ classify_link, LinkAction, PageTransition };
pub use theme_manager::ThemeManager;

/// Handles to the mounted components. Listeners keep them alive on their own,
/// holding on to this is only needed to inspect state.
pub struct Site<P: Page, S: KeyValueStore> {
    pub theme: Rc<RefCell<ThemeManager<P, S>>>,
    pub menu: Rc<RefCell<MobileMenu<P>>>,
    pub contact: Option<Rc<RefCell<ContactForm<P>>>>,
    pub back_to_top: Option<Rc<RefCell<BackToTop<P>>>>,
    pub transition: PageTransition<P>,
}

pub fn mount_all<P: Page, S: KeyValueStore>(
    page: P,
    store: S,
    submitter: Rc<dyn Submitter>
) -> Site<P, S> {
    log::debug!("Mounting site components");
    let theme = ThemeManager::mount(page.clone(), store);
    let menu = MobileMenu::mount(page.clone());
    let contact = ContactForm::mount(page.clone(), submitter);
    let back_to_top = BackToTop::mount(page.clone());
    let transition = PageTransition::mount(page);

    Site { theme, menu, contact, back_to_top, transition }
}
