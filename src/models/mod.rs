pub mod nav_entry;
pub mod navigation_state;
pub mod page;

pub use nav_entry::{active_entry, NavEntry, NAV_ENTRIES};
pub use navigation_state::NavigationState;
pub use page::Page;
