pub mod matcher;
pub mod table;

pub use matcher::{matches_exact, matches_prefix};
pub use table::{match_route, resolve, Route, RoutePattern, ROUTES};
