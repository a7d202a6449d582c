//! Literal copy rendered by the pages, navbar and footer.

pub const SITE_NAME: &str = "MySite";

pub const HOME_HEADING: &str = "Welcome to MySite";
pub const HOME_BODY: &str = "This is the homepage. Use the navbar to navigate through the site.";

pub const ABOUT_HEADING: &str = "About Us";
pub const ABOUT_BODY: &str = "This project showcases a simple React + Vite app styled with Tailwind CSS. \
     Feel free to explore and customize it to fit your needs.";

pub const TOS_HEADING: &str = "Terms of Service";
pub const TOS_INTRO: &str = "By using this site, you agree to the following terms and conditions.";
pub const TOS_TERMS: [&str; 4] = [
    "This is a demo site intended for educational purposes only.",
    "No personal data is collected or stored.",
    "All content is provided \u{201c}as-is\u{201d} without warranty of any kind.",
    "We reserve the right to update these terms at any time without notice.",
];

pub const NOT_FOUND_HEADING: &str = "404 - Not Found";
pub const NOT_FOUND_BODY: &str = "The page you are looking for does not exist.";

/// Footer line for the given calendar year.
pub fn footer_text(year: u32) -> String {
    format!("\u{a9} {year} {SITE_NAME}. All rights reserved.")
}
