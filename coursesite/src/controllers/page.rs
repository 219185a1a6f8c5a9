//! Adapter from a renderer to an axum handler.

use axum::{
    extract::Request,
    handler::Handler,
    http::{header, request::Parts},
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use minijinja::{context, Value};
use std::sync::Arc;

use super::Renderer;

/// Derives page data from the incoming request.
pub type DataFn = Arc<dyn Fn(&Parts) -> Value + Send + Sync>;

/// A page handler: renders one template per request.
///
/// Register it directly with a method router, e.g. `get(Page::new(home))`.
/// A render failure is logged and answered with a fixed 500 response.
#[derive(Clone)]
pub struct Page {
    renderer: Arc<dyn Renderer>,
    data: Option<DataFn>,
}

impl Page {
    /// Page rendered without any data.
    pub fn new(renderer: impl Renderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
            data: None,
        }
    }

    /// Page whose data is derived from each request.
    pub fn with_data<F>(renderer: impl Renderer, data: F) -> Self
    where
        F: Fn(&Parts) -> Value + Send + Sync + 'static,
    {
        Self {
            renderer: Arc::new(renderer),
            data: Some(Arc::new(data)),
        }
    }

    /// Build the response for a request head.
    pub fn respond(&self, parts: &Parts) -> Response {
        let data = match &self.data {
            Some(derive) => derive(parts),
            None => context! {},
        };

        render_html(self.renderer.as_ref(), &data)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("has_data", &self.data.is_some())
            .finish_non_exhaustive()
    }
}

impl<S> Handler<(), S> for Page
where
    S: Send + Sync + 'static,
{
    type Future = BoxFuture<'static, Response>;

    fn call(self, req: Request, _state: S) -> Self::Future {
        Box::pin(async move {
            let (parts, _body) = req.into_parts();
            self.respond(&parts)
        })
    }
}

/// Render `data` into a complete HTML response.
///
/// The page is buffered before anything is sent, so a failing render never
/// reaches the client as a truncated page.
pub fn render_html(renderer: &dyn Renderer, data: &Value) -> Response {
    let mut body = Vec::new();
    match renderer.execute(&mut body, data) {
        Ok(()) => ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response(),
        Err(err) => err.into_response(),
    }
}
