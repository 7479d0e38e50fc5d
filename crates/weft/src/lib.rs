//! weft - controller and response-assembly layer for a minimal web framework
//!
//! Given a parsed inbound request and an action name resolved by an external
//! router, weft synthesizes convention parameters, invokes the registered
//! action, determines response content-type and status, resolves a body
//! (a rendered template or a pre-serialized structured payload), logs
//! request/response summaries, and finishes the response triple.
//!
//! Routing, sessions, middleware, template engines, and log transports all
//! live outside this crate; [`TemplateRenderer`] and [`Logger`] are the
//! seams they plug into.

pub mod controller;
pub mod error;
pub mod exchange;
pub mod logger;
pub mod render;
pub mod request;
pub mod response;
pub mod template;

pub mod prelude {
    //! Common imports for weft controllers
    pub use crate::controller::{Action, Controller, Conventions};
    pub use crate::error::Error;
    pub use crate::exchange::{Exchange, RouteContext};
    pub use crate::logger::{Logger, MemoryLogger, TracingLogger};
    pub use crate::render::{BodyFormat, RenderDirective};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use crate::template::{Assigns, TemplateRenderer};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use controller::{Action, Controller, Conventions};
pub use error::Error;
pub use exchange::{Exchange, RouteContext};
pub use logger::{Logger, MemoryLogger, TracingLogger};
pub use render::{BodyFormat, RenderDirective};
pub use request::Request;
pub use response::Response;
pub use template::{Assigns, TemplateRenderer};
