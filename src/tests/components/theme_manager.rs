use crate::components::ThemeManager;
use crate::configs::{ ids, THEME_STORAGE_KEY };
use crate::dom::{ Element, Page };
use crate::tests::common::{ self, mocks::{ MockPage, MockStore } };
use crate::utils::Theme;

fn icons_hidden(page: &MockPage) -> [bool; 4] {
    [ids::SUN_ICON, ids::MOON_ICON, ids::MOBILE_SUN_ICON, ids::MOBILE_MOON_ICON].map(|id|
        page.by_id(id).has_class("hidden")
    )
}

#[test]
fn test_defaults_to_light_without_stored_value() {
    common::setup();
    let page = common::marketing_page();
    let manager = ThemeManager::mount(page.clone(), MockStore::default());

    assert_eq!(manager.borrow().theme(), Theme::Light);
    assert!(!page.root().unwrap().has_class("dark"));
    // Light shows the moon, hides the sun.
    assert_eq!(icons_hidden(&page), [true, false, true, false]);
}

#[test]
fn test_restores_stored_dark_theme() {
    common::setup();
    let page = common::marketing_page();
    let manager = ThemeManager::mount(page.clone(), MockStore::with(THEME_STORAGE_KEY, "dark"));

    assert_eq!(manager.borrow().theme(), Theme::Dark);
    assert!(page.root().unwrap().has_class("dark"));
    assert_eq!(icons_hidden(&page), [false, true, false, true]);
}

#[test]
fn test_toggle_twice_round_trips_and_persists() {
    common::setup();
    let page = common::marketing_page();
    let store = MockStore::default();
    let manager = ThemeManager::mount(page.clone(), store.clone());

    page.click(&page.by_id(ids::THEME_TOGGLE));
    assert_eq!(manager.borrow().theme(), Theme::Dark);
    assert_eq!(store.value(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert!(page.root().unwrap().has_class("dark"));

    page.click(&page.by_id(ids::MOBILE_THEME_TOGGLE));
    assert_eq!(manager.borrow().theme(), Theme::Light);
    assert_eq!(store.value(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert!(!page.root().unwrap().has_class("dark"));
    assert_eq!(icons_hidden(&page), [true, false, true, false]);
}

#[test]
fn test_clicking_an_icon_toggles_through_its_button() {
    common::setup();
    let page = common::marketing_page();
    let manager = ThemeManager::mount(page.clone(), MockStore::default());

    page.click(&page.by_id(ids::MOON_ICON));
    assert_eq!(manager.borrow().theme(), Theme::Dark);
}

#[test]
fn test_unknown_stored_value_reads_as_light() {
    common::setup();
    let page = common::marketing_page();
    let manager = ThemeManager::mount(page, MockStore::with(THEME_STORAGE_KEY, "solarized"));
    assert_eq!(manager.borrow().theme(), Theme::Light);
}

#[test]
fn test_missing_markup_is_tolerated() {
    common::setup();
    let page = MockPage::new(common::HOSTNAME);
    let store = MockStore::default();
    let manager = ThemeManager::mount(page.clone(), store.clone());

    manager.borrow_mut().toggle();
    assert_eq!(store.value(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert!(page.root().unwrap().has_class("dark"));
}
