//! Route table for the site.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::controllers::{faq, Page, Users};
use crate::error::NOT_FOUND_BODY;
use crate::views::Views;

/// Build the router serving every page in `views`.
///
/// Anything not listed here, including a known path with an unsupported
/// method, falls through to [`not_found`].
pub fn router(views: Views) -> Router {
    let Views {
        home,
        contact,
        faq: faq_page,
        signup,
    } = views;
    let users = Users::new(signup);

    Router::new()
        .route("/", get(Page::new(home)).fallback(not_found))
        .route("/contact", get(Page::new(contact)).fallback(not_found))
        .route("/faq", get(faq(faq_page)).fallback(not_found))
        .route(
            "/signup",
            get(users.new_user())
                .post(Users::create)
                .fallback(not_found),
        )
        .fallback(not_found)
}

/// Fixed 404 response for unmatched requests.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        NOT_FOUND_BODY,
    )
        .into_response()
}
