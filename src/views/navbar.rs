use dioxus::prelude::*;
use crate::configs::ids;
use crate::routes::Route;
use crate::views::Footer;

const NAV_LINKS: [(&str, &str); 3] = [
    ("index.html", "Home"),
    ("services.html", "Services"),
    ("contact.html", "Contact"),
];

#[component]
fn ThemeIcons(sun: &'static str, moon: &'static str) -> Element {
    rsx! {
        span { id: sun, class: "hidden", "🌞" }
        span { id: moon, "🌙" }
    }
}

#[component]
pub fn Navbar() -> Element {
    // The markup is in place once the first render lands, bind behavior then.
    use_effect(|| {
        #[cfg(target_arch = "wasm32")]
        crate::dom::web::mount_site();
    });

    rsx! {
        header {
            class: "bg-white dark:bg-gray-900 shadow-lg transition-colors duration-200",
            nav {
                id: "navbar",
                class: "container mx-auto px-4 py-3 flex justify-between items-center",
                a { class: "text-xl font-bold text-primary", href: "index.html", "Northwind Studio" }
                div {
                    class: "hidden md:flex items-center space-x-6",
                    for (href, label) in NAV_LINKS {
                        a {
                            class: "text-gray-800 dark:text-white hover:text-primary transition-colors",
                            href: href,
                            "{label}"
                        }
                    }
                    button {
                        id: ids::THEME_TOGGLE,
                        class: "p-2 rounded-lg bg-gray-200 dark:bg-gray-700 transition-colors",
                        "aria-label": "Toggle theme",
                        ThemeIcons { sun: ids::SUN_ICON, moon: ids::MOON_ICON }
                    }
                }
                button {
                    id: ids::MOBILE_MENU_BUTTON,
                    class: "md:hidden p-2 rounded-lg",
                    "aria-label": "Open menu",
                    "☰"
                }
            }
            div {
                id: ids::MOBILE_MENU,
                class: "hidden md:hidden px-4 pb-4 space-y-2",
                for (href, label) in NAV_LINKS {
                    a { class: "block py-2 text-gray-800 dark:text-white", href: href, "{label}" }
                }
                button {
                    id: ids::MOBILE_THEME_TOGGLE,
                    class: "p-2 rounded-lg bg-gray-200 dark:bg-gray-700",
                    "aria-label": "Toggle theme",
                    ThemeIcons { sun: ids::MOBILE_SUN_ICON, moon: ids::MOBILE_MOON_ICON }
                }
            }
        }
        main {
            class: "container mx-auto p-4 min-h-screen",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
