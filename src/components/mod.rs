pub mod footer;
pub mod navbar;
pub mod page_outlet;

pub use footer::{current_year, year_of, Footer};
pub use navbar::{nav_link_class, nav_links, NavLinkView, Navbar};
pub use page_outlet::PageOutlet;
