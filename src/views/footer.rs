use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "bg-gray-100 dark:bg-gray-900 py-8 mt-12",
            div {
                class: "container mx-auto px-4 flex flex-col md:flex-row justify-between gap-4",
                p { class: "text-gray-600 dark:text-gray-300", "© {year} Northwind Studio" }
                div {
                    class: "flex gap-4",
                    a { href: "tel:+15551234567", "+1 (555) 123-4567" }
                    a { href: "mailto:hello@northwind.studio", "hello@northwind.studio" }
                    a { href: "https://wa.me/15551234567", target: "_blank", "WhatsApp" }
                }
            }
        }
    }
}
