use std::rc::Rc;
use crate::components::mount_all;
use crate::configs::{ ids, THEME_STORAGE_KEY };
use crate::dom::{ Element, Page };
use crate::tests::common::{ self, mocks::{ MockPage, MockStore, MockSubmitter } };
use crate::utils::Theme;

#[test]
fn test_mount_all_wires_every_component() {
    common::setup();
    let page = common::marketing_page();
    let store = MockStore::with(THEME_STORAGE_KEY, "dark");
    let site = mount_all(page.clone(), store.clone(), Rc::new(MockSubmitter::succeeding()));

    assert_eq!(site.theme.borrow().theme(), Theme::Dark);
    assert!(page.root().unwrap().has_class("dark"));
    assert!(site.contact.is_some());
    assert!(site.back_to_top.is_some());
    assert!(page.main_region().unwrap().has_class("page-transition"));

    // Opening the menu and toggling the theme from inside it keeps it open.
    page.click(&page.by_id(ids::MOBILE_MENU_BUTTON));
    page.click(&page.by_id(ids::MOBILE_THEME_TOGGLE));
    assert!(site.menu.borrow().is_open());
    assert_eq!(store.value(THEME_STORAGE_KEY).as_deref(), Some("light"));

    // The desktop toggle sits outside the menu.
    page.click(&page.by_id(ids::THEME_TOGGLE));
    assert!(!site.menu.borrow().is_open());
    assert_eq!(site.theme.borrow().theme(), Theme::Dark);
}

#[test]
fn test_mount_all_on_empty_page() {
    common::setup();
    let page = MockPage::new(common::HOSTNAME);
    let site = mount_all(page.clone(), MockStore::default(), Rc::new(MockSubmitter::succeeding()));

    assert!(site.contact.is_none());
    assert_eq!(site.theme.borrow().theme(), Theme::Light);
    assert!(!site.menu.borrow().is_open());
    page.scroll_to(300.0);
    assert_eq!(page.run_frames(), 1);
}
