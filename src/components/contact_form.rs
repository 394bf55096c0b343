use std::cell::RefCell;
use std::rc::Rc;
use crate::configs::{
    classes,
    ids,
    SENDING_LABEL,
    SUBMIT_FAILED_MESSAGE,
    SUBMIT_LABEL,
    SUCCESS_MESSAGE_DURATION_MS,
};
use crate::dom::{ Element, Page };
use crate::error::SubmitError;
use crate::server::Submitter;
use crate::utils::{ validate_submission, FieldError, FormSubmission };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

pub struct ContactForm<P: Page> {
    page: P,
    form: P::Element,
    success_message: Option<P::Element>,
    submitter: Rc<dyn Submitter>,
    phase: FormPhase,
    submit_label: Option<String>,
}

impl<P: Page> ContactForm<P> {
    /// `None` when the page has no contact form.
    pub fn mount(page: P, submitter: Rc<dyn Submitter>) -> Option<Rc<RefCell<Self>>> {
        let form = page.element_by_id(ids::CONTACT_FORM)?;
        let contact = Rc::new(
            RefCell::new(Self {
                success_message: page.element_by_id(ids::SUCCESS_MESSAGE),
                page: page.clone(),
                form: form.clone(),
                submitter,
                phase: FormPhase::Idle,
                submit_label: None,
            })
        );

        let handle = contact.clone();
        page.on_submit(&form, move |event| {
            event.prevent_default();
            Self::handle_submit(&handle);
        });

        Some(contact)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    fn handle_submit(this: &Rc<RefCell<Self>>) {
        let pending = {
            let mut contact = this.borrow_mut();
            if contact.phase == FormPhase::Submitting {
                log::debug!("Submission already in flight, ignoring submit");
                return;
            }

            let data = contact.page.form_values(&contact.form);
            if let Err(errors) = contact.validate(&data) {
                log::debug!("Contact form has {} invalid field(s)", errors.len());
                return;
            }

            contact.set_loading(true);
            contact.phase = FormPhase::Submitting;
            contact.submitter.submit(data)
        };

        let page = this.borrow().page.clone();
        let this = this.clone();
        page.spawn(async move {
            let outcome = pending.await;
            this.borrow_mut().finish(outcome);
        });
    }

    /// Clears old annotations, then marks every failing field.
    pub fn validate(&self, data: &FormSubmission) -> Result<(), Vec<FieldError>> {
        self.clear_errors();
        validate_submission(data).inspect_err(|errors| {
            for error in errors {
                self.show_field_error(error);
            }
        })
    }

    fn finish(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.show_success();
                self.page.reset_form(&self.form);
            }
            Err(err) => {
                log::error!("Contact submission failed: {}", err);
                self.page.alert(SUBMIT_FAILED_MESSAGE);
            }
        }
        self.set_loading(false);
        self.phase = FormPhase::Idle;
    }

    fn show_field_error(&self, error: &FieldError) {
        let Some(field) = self.page.element_by_id(error.field) else {
            return;
        };
        field.add_class(classes::FORM_ERROR);

        let Some(wrapper) = field.parent() else {
            return;
        };
        let message = match wrapper.find_by_class(classes::ERROR_MESSAGE) {
            Some(existing) => existing,
            None => {
                let Some(created) = self.page.create_element("p") else {
                    return;
                };
                created.add_classes(classes::ERROR_MESSAGE_STYLE);
                wrapper.append_child(&created);
                created
            }
        };
        message.set_text(error.message());
    }

    fn clear_errors(&self) {
        for field in self.form.find_all_by_class(classes::FORM_ERROR) {
            field.remove_class(classes::FORM_ERROR);
        }
        for message in self.form.find_all_by_class(classes::ERROR_MESSAGE) {
            message.detach();
        }
    }

    fn show_success(&self) {
        if let Some(message) = &self.success_message {
            message.remove_class(classes::HIDDEN);
            let message = message.clone();
            self.page.set_timeout(SUCCESS_MESSAGE_DURATION_MS, move || {
                message.add_class(classes::HIDDEN);
            });
        }
    }

    fn set_loading(&mut self, loading: bool) {
        let Some(button) = self.page.submit_control(&self.form) else {
            return;
        };
        if loading {
            self.submit_label = Some(button.text());
            button.set_text(SENDING_LABEL);
            button.set_disabled(true);
            self.form.add_class(classes::LOADING);
        } else {
            let label = self.submit_label.take().unwrap_or_else(|| SUBMIT_LABEL.to_string());
            button.set_text(&label);
            button.set_disabled(false);
            self.form.remove_class(classes::LOADING);
        }
    }
}
