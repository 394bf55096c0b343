use dioxus::prelude::*;
use crate::configs::{ ids, SUBMIT_LABEL };

const INPUT_CLASS: &str = "w-full px-4 py-2 border rounded-lg dark:bg-gray-800";

#[component]
fn TextField(name: &'static str, label: &'static str, kind: &'static str) -> Element {
    rsx! {
        div {
            label { r#for: name, class: "block mb-1 font-medium", "{label}" }
            input { id: name, name: name, r#type: kind, class: INPUT_CLASS }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            class: "py-12 max-w-2xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Contact us" }
            div {
                id: ids::SUCCESS_MESSAGE,
                class: "hidden mb-6 p-4 rounded-lg bg-green-100 text-green-800",
                "Thank you! Your message has been sent. We'll get back to you soon."
            }
            form {
                id: ids::CONTACT_FORM,
                class: "space-y-4",
                "novalidate": "novalidate",
                div {
                    class: "grid md:grid-cols-2 gap-4",
                    TextField { name: "firstName", label: "First name", kind: "text" }
                    TextField { name: "lastName", label: "Last name", kind: "text" }
                }
                TextField { name: "email", label: "Email", kind: "email" }
                TextField { name: "phone", label: "Phone", kind: "tel" }
                div {
                    label { r#for: "service", class: "block mb-1 font-medium", "Service" }
                    select {
                        id: "service",
                        name: "service",
                        class: INPUT_CLASS,
                        option { value: "", "Select a service" }
                        option { value: "web-design", "Web design" }
                        option { value: "seo", "SEO" }
                        option { value: "hosting", "Hosting & care" }
                    }
                }
                div {
                    label { r#for: "message", class: "block mb-1 font-medium", "Message" }
                    textarea { id: "message", name: "message", rows: "5", class: INPUT_CLASS }
                }
                button {
                    r#type: "submit",
                    class: "button w-full",
                    "{SUBMIT_LABEL}"
                }
            }
        }
    }
}
