/// The pages the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    TermsOfService,
    /// Fallback for any path no named route claims
    NotFound,
}

impl Page {
    /// Every page, in route registration order.
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::TermsOfService, Self::NotFound];

    /// Title shown in the browser tab for this page
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::TermsOfService => "Terms of Service",
            Self::NotFound => "Not Found",
        }
    }

    /// HTTP-equivalent status of the rendered page.
    /// Only informs rendering; no response is ever sent.
    pub const fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Home | Self::About | Self::TermsOfService => 200,
        }
    }

    pub const fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Full document title, e.g. `About | MySite`
    pub fn document_title(self) -> String {
        format!("{} | {}", self.title(), crate::content::SITE_NAME)
    }
}
