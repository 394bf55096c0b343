#![cfg(test)]

mod components;

use crate::configs::ids;
use crate::dom::Page;

#[test]
fn test_fixture_covers_markup_contract() {
    common::setup();
    let page = common::marketing_page();
    for id in [
        ids::THEME_TOGGLE,
        ids::MOBILE_THEME_TOGGLE,
        ids::SUN_ICON,
        ids::MOON_ICON,
        ids::MOBILE_SUN_ICON,
        ids::MOBILE_MOON_ICON,
        ids::MOBILE_MENU_BUTTON,
        ids::MOBILE_MENU,
        ids::CONTACT_FORM,
        ids::SUCCESS_MESSAGE,
    ] {
        assert!(page.element_by_id(id).is_some(), "missing #{}", id);
    }
    assert!(page.main_region().is_some());
}
