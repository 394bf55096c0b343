use std::rc::Rc;
use crate::components::{ ContactForm, FormPhase };
use crate::configs::{ ids, SUBMIT_FAILED_MESSAGE };
use crate::dom::{ Element, Page };
use crate::error::SubmitError;
use crate::tests::common::{ self, mocks::{ GatedSubmitter, MockElement, MockPage, MockSubmitter } };

fn submit_button(page: &MockPage) -> MockElement {
    page.submit_control(&page.by_id(ids::CONTACT_FORM)).unwrap()
}

fn error_messages(page: &MockPage) -> Vec<MockElement> {
    page.by_id(ids::CONTACT_FORM).find_all_by_class("error-message")
}

fn error_text(page: &MockPage, field: &str) -> Option<String> {
    page.by_id(field).parent()?.find_by_class("error-message").map(|message| message.text())
}

#[test]
fn test_submit_prevents_default_navigation() {
    common::setup();
    let page = common::marketing_page();
    ContactForm::mount(page.clone(), Rc::new(MockSubmitter::succeeding())).unwrap();

    assert!(page.submit(&page.by_id(ids::CONTACT_FORM)));
}

#[test]
fn test_blank_field_blocks_submission_with_inline_error() {
    common::setup();
    let page = common::marketing_page();
    let submitter = MockSubmitter::succeeding();
    ContactForm::mount(page.clone(), Rc::new(submitter.clone())).unwrap();
    common::fill_valid(&page);
    page.by_id("lastName").set_value("   ");

    page.submit(&page.by_id(ids::CONTACT_FORM));
    page.run_tasks();

    assert!(submitter.received().is_empty());
    assert!(page.by_id("lastName").has_class("form-error"));
    assert!(!page.by_id("firstName").has_class("form-error"));
    assert_eq!(error_text(&page, "lastName").as_deref(), Some("This field is required"));
    assert_eq!(error_messages(&page).len(), 1);
    assert!(!submit_button(&page).is_disabled());
}

#[test]
fn test_format_errors_are_reported_per_field() {
    common::setup();
    let page = common::marketing_page();
    ContactForm::mount(page.clone(), Rc::new(MockSubmitter::succeeding())).unwrap();
    common::fill_valid(&page);
    page.by_id("email").set_value("a@b");
    page.by_id("phone").set_value("abc");

    page.submit(&page.by_id(ids::CONTACT_FORM));

    assert_eq!(error_text(&page, "email").as_deref(), Some("Please enter a valid email address"));
    assert_eq!(error_text(&page, "phone").as_deref(), Some("Please enter a valid phone number"));
    let message = page.by_id("email").parent().unwrap().find_by_class("error-message").unwrap();
    assert_eq!(message.tag(), "p");
    assert!(message.has_class("text-red-500"));
}

#[test]
fn test_revalidation_does_not_accumulate_errors() {
    common::setup();
    let page = common::marketing_page();
    ContactForm::mount(page.clone(), Rc::new(MockSubmitter::succeeding())).unwrap();
    let form = page.by_id(ids::CONTACT_FORM);

    page.submit(&form);
    assert_eq!(error_messages(&page).len(), 6);

    page.submit(&form);
    assert_eq!(error_messages(&page).len(), 6);

    common::fill_valid(&page);
    page.by_id("email").set_value("");
    page.submit(&form);
    assert_eq!(error_messages(&page).len(), 1);
    assert_eq!(form.find_all_by_class("form-error").len(), 1);
}

#[test]
fn test_successful_submission_flow() {
    common::setup();
    let page = common::marketing_page();
    let submitter = GatedSubmitter::default();
    let contact = ContactForm::mount(page.clone(), Rc::new(submitter.clone())).unwrap();
    common::fill_valid(&page);

    page.submit(&page.by_id(ids::CONTACT_FORM));
    page.run_tasks();

    let button = submit_button(&page);
    assert_eq!(contact.borrow().phase(), FormPhase::Submitting);
    assert!(button.is_disabled());
    assert_eq!(button.text(), "Sending...");
    assert!(page.by_id(ids::CONTACT_FORM).has_class("loading"));

    submitter.resolve(Ok(()));
    page.run_tasks();

    assert_eq!(contact.borrow().phase(), FormPhase::Idle);
    assert!(!button.is_disabled());
    assert_eq!(button.text(), "Send Message");
    assert!(!page.by_id(ids::CONTACT_FORM).has_class("loading"));
    assert!(!page.by_id(ids::SUCCESS_MESSAGE).has_class("hidden"));
    assert_eq!(page.by_id("firstName").value(), "");
    assert_eq!(page.by_id("message").value(), "");

    page.advance(4_999);
    assert!(!page.by_id(ids::SUCCESS_MESSAGE).has_class("hidden"));
    page.advance(1);
    assert!(page.by_id(ids::SUCCESS_MESSAGE).has_class("hidden"));
}

#[test]
fn test_submitter_receives_all_fields() {
    common::setup();
    let page = common::marketing_page();
    let submitter = MockSubmitter::succeeding();
    ContactForm::mount(page.clone(), Rc::new(submitter.clone())).unwrap();
    common::fill_valid(&page);

    page.submit(&page.by_id(ids::CONTACT_FORM));
    page.run_tasks();

    let received = submitter.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].len(), 6);
    assert_eq!(received[0].get("email"), Some("ada@example.com"));
    assert_eq!(received[0].get("phone"), Some("(555) 123-4567"));
}

#[test]
fn test_failed_submission_alerts_and_keeps_values() {
    common::setup();
    let page = common::marketing_page();
    let submitter = MockSubmitter::failing(SubmitError::Rejected(502));
    let contact = ContactForm::mount(page.clone(), Rc::new(submitter)).unwrap();
    common::fill_valid(&page);

    page.submit(&page.by_id(ids::CONTACT_FORM));
    page.run_tasks();

    assert_eq!(page.alerts(), vec![SUBMIT_FAILED_MESSAGE.to_string()]);
    assert_eq!(page.by_id("firstName").value(), "Ada");
    assert!(page.by_id(ids::SUCCESS_MESSAGE).has_class("hidden"));
    assert_eq!(contact.borrow().phase(), FormPhase::Idle);
    let button = submit_button(&page);
    assert!(!button.is_disabled());
    assert_eq!(button.text(), "Send Message");
}

#[test]
fn test_submit_while_in_flight_is_ignored() {
    common::setup();
    let page = common::marketing_page();
    let submitter = GatedSubmitter::default();
    ContactForm::mount(page.clone(), Rc::new(submitter.clone())).unwrap();
    common::fill_valid(&page);
    let form = page.by_id(ids::CONTACT_FORM);

    page.submit(&form);
    page.submit(&form);
    page.run_tasks();
    assert_eq!(submitter.in_flight(), 1);

    submitter.resolve(Err(SubmitError::Network("offline".to_string())));
    page.run_tasks();
    assert_eq!(page.alerts().len(), 1);

    page.submit(&form);
    assert_eq!(submitter.in_flight(), 1);
}

#[test]
fn test_page_without_form_mounts_nothing() {
    common::setup();
    let page = MockPage::new(common::HOSTNAME);
    assert!(ContactForm::mount(page, Rc::new(MockSubmitter::succeeding())).is_none());
}
