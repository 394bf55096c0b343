use dioxus::prelude::*;
use crate::views::{ Contact, Home, Index, Navbar, PageNotFound, Services };

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home,
        #[route("/index.html")]
        Index,
        #[route("/services.html")]
        Services,
        #[route("/contact.html")]
        Contact,
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}
