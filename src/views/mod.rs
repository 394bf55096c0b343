mod contact;
mod footer;
mod home;
mod navbar;
mod services;

pub use contact::Contact;
pub use footer::Footer;
pub use home::{ Home, Index, PageNotFound };
pub use navbar::Navbar;
pub use services::Services;
