//! Controller registration and the request handling pipeline
//!
//! A [`Controller`] is built once at application startup: its name is
//! derived from the controller type (or given explicitly) and its actions
//! are registered in an explicit table, so an unknown action stays a checked
//! condition instead of a reflective miss. Handling a request is a single
//! linear pass: record the route context, synthesize convention parameters,
//! log the request, invoke the action, resolve content-type, status, and
//! body from the render directive, write the body, log the response, and
//! finish the exchange.

use std::any::type_name;
use std::collections::BTreeMap;

use crate::error::Error;
use crate::exchange::{Exchange, RouteContext};
use crate::logger::Logger;
use crate::render::RenderDirective;
use crate::response::Response;
use crate::template::TemplateRenderer;

/// Naming conventions, resolved once when a controller is registered.
#[derive(Debug, Clone)]
pub struct Conventions {
    /// Suffix controller type names must carry, e.g. the "Controller" in
    /// `ArticlesController`. Matched case-insensitively.
    pub controller_suffix: String,

    /// Extension appended to `<controller>/<action>.` when computing
    /// template identifiers.
    pub template_extension: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            controller_suffix: "Controller".to_string(),
            template_extension: "html.tpl".to_string(),
        }
    }
}

/// A registered action body.
///
/// Actions receive the controller state and the exchange; they express their
/// response through [`Exchange::render`] and
/// [`Exchange::assign`](crate::exchange::Exchange::assign), or say nothing
/// and fall back to template rendering.
pub type Action<C> = Box<dyn Fn(&mut C, &mut Exchange) -> Result<(), Error> + Send + Sync>;

/// Registration-time description of one controller type.
///
/// `C` is the application's controller state struct, constructed per request
/// (or shared, at the application's discretion) and passed to every action.
///
/// # Example
/// ```ignore
/// struct ArticlesController;
///
/// let articles = Controller::<ArticlesController>::new(Conventions::default())?
///     .action("index", |_state, _exchange| Ok(()))
///     .action("show", |_state, exchange| {
///         exchange.render(RenderDirective::plain("hello"));
///         Ok(())
///     });
/// ```
pub struct Controller<C> {
    name: String,
    type_name: String,
    conventions: Conventions,
    actions: BTreeMap<&'static str, Action<C>>,
}

impl<C> std::fmt::Debug for Controller<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("conventions", &self.conventions)
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<C> Controller<C> {
    /// Register a controller, deriving its name from `C`'s type name.
    ///
    /// The type name must end with the configured suffix (case-insensitive);
    /// the suffix is stripped and the remainder lower-cased, so
    /// `ArticlesController` becomes `articles`. A type name that does not
    /// carry the suffix, or is nothing but the suffix, fails with
    /// [`Error::NameMismatch`]. Works on plain (non-generic) state structs.
    pub fn new(conventions: Conventions) -> Result<Self, Error> {
        let type_name = short_type_name::<C>();
        let name = derive_name(&type_name, &conventions.controller_suffix)?;
        Ok(Self {
            name,
            type_name,
            conventions,
            actions: BTreeMap::new(),
        })
    }

    /// Register a controller under an explicit name, skipping derivation.
    pub fn named(name: impl Into<String>, conventions: Conventions) -> Self {
        Self {
            name: name.into(),
            type_name: short_type_name::<C>(),
            conventions,
            actions: BTreeMap::new(),
        }
    }

    /// Register an action body under `name`. Builder-style.
    pub fn action<F>(mut self, name: &'static str, action: F) -> Self
    where
        F: Fn(&mut C, &mut Exchange) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.actions.insert(name, Box::new(action));
        self
    }

    /// The derived (or explicit) controller name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an action is registered under `name`.
    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Template identifier for `action`: `<controller>/<action>.<extension>`.
    pub fn template_path(&self, action: &str) -> String {
        format!(
            "{}/{}.{}",
            self.name, action, self.conventions.template_extension
        )
    }

    /// Run one full request/response cycle for `action` on this controller.
    ///
    /// The exchange is consumed; on success the finished response triple is
    /// returned. Two summary lines go to `logger`: the request line before
    /// the action is invoked and the response line after the body is
    /// written.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAction`] if no action is registered under `action`
    /// (nothing is written and no response line is logged). Errors returned
    /// by the action itself or by the renderer propagate unchanged and abort
    /// the cycle.
    pub fn handle(
        &self,
        state: &mut C,
        mut exchange: Exchange,
        action: &str,
        renderer: &dyn TemplateRenderer,
        logger: &dyn Logger,
    ) -> Result<Response, Error> {
        exchange.set_route(RouteContext {
            controller: self.name.clone(),
            type_name: self.type_name.clone(),
            action: action.to_string(),
        });

        synthesize_params(&mut exchange, action);

        logger.info(&format!(
            "Handler: {}#{}\nParameters: {}",
            self.type_name,
            action,
            params_repr(&exchange)
        ));

        let body_fn = self.actions.get(action).ok_or_else(|| Error::UnknownAction {
            controller: self.type_name.clone(),
            action: action.to_string(),
        })?;

        tracing::debug!(controller = %self.name, action = %action, "dispatching action");
        body_fn(state, &mut exchange)?;

        // Content-type and status come from the directive; template
        // responses stay on text/html and the default status.
        let content_type = match exchange.directive() {
            Some(RenderDirective::Structured { format, .. }) => format.content_type(),
            _ => "text/html",
        };
        exchange.response_mut().set_header("Content-Type", content_type);

        let status_override = match exchange.directive() {
            Some(RenderDirective::Structured { status, .. }) => *status,
            _ => None,
        };
        if let Some(status) = status_override {
            exchange.response_mut().set_status(status);
        }

        // Structured bodies are used verbatim; the action has already
        // serialized them. Template rendering sees the action's assigns.
        let (body, source) = match exchange.directive() {
            Some(RenderDirective::Structured { format, body, .. }) => {
                (body.clone(), format.tag().to_string())
            }
            _ => {
                let path = self.template_path(action);
                let body = renderer.render(&path, exchange.assigns())?;
                (body, path)
            }
        };
        exchange.response_mut().write(&body);

        logger.info(&format!(
            "Response: {} [{}] {}",
            exchange.response().status,
            content_type,
            source
        ));

        Ok(exchange.finish())
    }
}

/// Last path segment of `C`'s type name.
fn short_type_name<C>() -> String {
    let full = type_name::<C>();
    full.rsplit("::").next().unwrap_or(full).to_string()
}

/// Strip `suffix` (case-insensitive) from `type_name` and lower-case the
/// remainder. The suffix must be a proper, trailing part of the name.
fn derive_name(type_name: &str, suffix: &str) -> Result<String, Error> {
    let mismatch = || Error::NameMismatch {
        type_name: type_name.to_string(),
        suffix: suffix.to_string(),
    };

    if type_name.len() <= suffix.len() {
        return Err(mismatch());
    }
    let split = type_name.len() - suffix.len();
    if !type_name.is_char_boundary(split) {
        return Err(mismatch());
    }
    let (prefix, tail) = type_name.split_at(split);
    if !tail.eq_ignore_ascii_case(suffix) {
        return Err(mismatch());
    }
    Ok(prefix.to_lowercase())
}

/// Convention shortcut: `show` takes its `id` from the digits of the request
/// path, overwriting any existing value. Paths with several numeric segments
/// concatenate; routes that need more than one numeric segment are outside
/// this convention.
fn synthesize_params(exchange: &mut Exchange, action: &str) {
    if action == "show" {
        let id: String = exchange
            .request()
            .path
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        exchange.params_mut().insert("id".to_string(), id);
    }
}

fn params_repr(exchange: &Exchange) -> String {
    serde_json::to_string(exchange.params()).unwrap_or_else(|_| "{}".to_string())
}
