use dioxus::prelude::*;

const SERVICES: [(&str, &str); 3] = [
    ("Web design", "Responsive sites built around your brand."),
    ("SEO", "Get found by the people already searching for you."),
    ("Hosting & care", "Updates, backups and monitoring handled for you."),
];

#[component]
pub fn Services() -> Element {
    rsx! {
        section {
            class: "py-12",
            h1 { class: "text-3xl font-bold mb-8", "Services" }
            div {
                class: "grid md:grid-cols-3 gap-6",
                for (title, blurb) in SERVICES {
                    div {
                        class: "p-6 rounded-lg shadow bg-white dark:bg-gray-800",
                        h2 { class: "text-xl font-semibold mb-2", "{title}" }
                        p { class: "text-gray-600 dark:text-gray-300", "{blurb}" }
                    }
                }
            }
            a { class: "button mt-8 inline-block", href: "contact.html", "Start a project" }
        }
    }
}
