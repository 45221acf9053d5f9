//! Routing definitions for the Clipstream UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/videos/:id")]
    VideoDetail { id: String },
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/inquiries")]
    Inquiries,
    #[at("/inquiries/:id")]
    InquiryDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
