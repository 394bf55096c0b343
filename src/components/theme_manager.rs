use std::cell::RefCell;
use std::rc::Rc;
use crate::configs::{ classes, ids, THEME_STORAGE_KEY };
use crate::dom::{ Element, KeyValueStore, Page };
use crate::utils::Theme;

/// (sun, moon) icon ids, desktop then mobile.
const ICON_PAIRS: [(&str, &str); 2] = [
    (ids::SUN_ICON, ids::MOON_ICON),
    (ids::MOBILE_SUN_ICON, ids::MOBILE_MOON_ICON),
];

pub struct ThemeManager<P: Page, S: KeyValueStore> {
    page: P,
    store: S,
    theme: Theme,
}

impl<P: Page, S: KeyValueStore> ThemeManager<P, S> {
    pub fn new(page: P, store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        Self { page, store, theme }
    }

    /// Applies the stored theme and binds both toggle buttons.
    pub fn mount(page: P, store: S) -> Rc<RefCell<Self>> {
        let manager = Self::new(page.clone(), store);
        manager.apply();
        log::debug!("Theme restored: {}", manager.theme);
        let manager = Rc::new(RefCell::new(manager));

        for id in [ids::THEME_TOGGLE, ids::MOBILE_THEME_TOGGLE] {
            if let Some(button) = page.element_by_id(id) {
                let manager = manager.clone();
                page.on_click(&button, move |_| manager.borrow_mut().toggle());
            }
        }
        manager
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str());
        log::info!("Theme switched to {}", self.theme);
        self.apply();
    }

    fn apply(&self) {
        let dark = self.theme.is_dark();
        if let Some(root) = self.page.root() {
            root.set_class_when(classes::DARK, dark);
        }
        for (sun, moon) in ICON_PAIRS {
            if let Some(icon) = self.page.element_by_id(sun) {
                icon.set_class_when(classes::HIDDEN, !dark);
            }
            if let Some(icon) = self.page.element_by_id(moon) {
                icon.set_class_when(classes::HIDDEN, dark);
            }
        }
    }
}
