//! Per-request exchange state

use std::collections::BTreeMap;

use serde_json::Value;

use crate::render::RenderDirective;
use crate::request::Request;
use crate::response::Response;
use crate::template::Assigns;

/// Identity of the controller/action pair handling the current request.
///
/// Recorded on the exchange when handling begins, so actions and later
/// pipeline steps can introspect where they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    /// Derived controller name, e.g. "articles"
    pub controller: String,
    /// Controller type name, e.g. "ArticlesController"
    pub type_name: String,
    /// Resolved action name
    pub action: String,
}

/// Mutable holder of one request/response cycle.
///
/// One exchange is created per inbound request, threaded through the
/// pipeline, and consumed by [`finish`](Exchange::finish). It owns the
/// request, the response under construction, the action's render directive
/// (if any), and the assigns exposed to the template.
#[derive(Debug)]
pub struct Exchange {
    request: Request,
    response: Response,
    route: Option<RouteContext>,
    directive: Option<RenderDirective>,
    assigns: Assigns,
}

impl Exchange {
    /// Wrap a parsed request into a fresh exchange.
    pub fn new(request: Request) -> Self {
        Self {
            request,
            response: Response::new(),
            route: None,
            directive: None,
            assigns: Assigns::new(),
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    /// The request parameter map.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.request.params
    }

    pub fn params_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.request.params
    }

    /// Controller/action identity. `None` until handling begins.
    pub fn route(&self) -> Option<&RouteContext> {
        self.route.as_ref()
    }

    pub(crate) fn set_route(&mut self, route: RouteContext) {
        self.route = Some(route);
    }

    /// Choose the response body source.
    ///
    /// Actions call this at most once per request; omitting it selects the
    /// controller's file template for the current action. A later call
    /// replaces an earlier one.
    pub fn render(&mut self, directive: RenderDirective) {
        self.directive = Some(directive);
    }

    /// The directive set by the action, if any.
    pub fn directive(&self) -> Option<&RenderDirective> {
        self.directive.as_ref()
    }

    /// Expose a value to the template under `key`.
    pub fn assign(&mut self, key: impl Into<String>, value: Value) {
        self.assigns.insert(key.into(), value);
    }

    /// Values assigned for the template so far.
    pub fn assigns(&self) -> &Assigns {
        &self.assigns
    }

    /// Finish the cycle, yielding the response triple.
    pub fn finish(self) -> Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_last_write_wins() {
        let mut exchange = Exchange::new(Request::default());
        assert!(exchange.directive().is_none());

        exchange.render(RenderDirective::plain("first"));
        exchange.render(RenderDirective::plain("second"));
        assert_eq!(
            exchange.directive(),
            Some(&RenderDirective::plain("second"))
        );
    }

    #[test]
    fn test_assigns_accumulate() {
        let mut exchange = Exchange::new(Request::default());
        exchange.assign("title", json!("hello"));
        exchange.assign("count", json!(3));

        assert_eq!(exchange.assigns().get("title"), Some(&json!("hello")));
        assert_eq!(exchange.assigns().get("count"), Some(&json!(3)));
    }

    #[test]
    fn test_finish_returns_response() {
        let mut exchange = Exchange::new(Request::default());
        exchange.response_mut().set_status(201);
        exchange.response_mut().write("done");

        let response = exchange.finish();
        assert_eq!(response.status, 201);
        assert_eq!(response.body, "done");
    }
}
