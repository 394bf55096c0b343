mod contact_form;
mod site;
mod theme_manager;
