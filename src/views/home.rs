use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "py-16 text-center",
            h1 {
                class: "text-4xl font-bold mb-4",
                "Websites that bring customers to your door"
            }
            p {
                class: "text-gray-600 dark:text-gray-300 mb-8",
                "Design, development and hosting for small businesses."
            }
            div {
                class: "flex justify-center gap-4",
                a { class: "button", href: "services.html", "Our services" }
                a { class: "button button-outline", href: "contact.html", "Get a quote" }
            }
        }
    }
}

/// `/index.html` serves the same page as `/`.
#[component]
pub fn Index() -> Element {
    rsx! { Home {} }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        div {
            class: "py-16 text-center",
            h1 { class: "text-2xl font-bold mb-4", "Page not found" }
            p { class: "text-gray-600 mb-4", "Nothing lives at /{segments.join(\"/\")}." }
            a { class: "button", href: "index.html", "Back home" }
        }
    }
}
