//! Template renderer seam

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Error;

/// Values an action exposes to its template, keyed by name.
pub type Assigns = BTreeMap<String, Value>;

/// Renders a named template into a body string.
///
/// Template engines live outside this crate; implementations adapt whatever
/// engine the embedding application uses. The controller pipeline calls
/// `render` with the template identifier it computed
/// (`<controller>/<action>.<extension>`) and the assigns the action
/// populated.
///
/// A missing template is reported as [`Error::TemplateNotFound`] and
/// propagates through the pipeline unchanged; the dispatching layer decides
/// what the client sees.
pub trait TemplateRenderer {
    fn render(&self, template: &str, assigns: &Assigns) -> Result<String, Error>;
}
