//! Demo blog application built on weft.
//!
//! There is no HTTP server here: the embedding layer that parses requests
//! and resolves actions is out of scope, so this demo builds requests by
//! hand, drives them through the controller pipeline, and prints the
//! finished responses. Run it from this directory so `templates/` resolves.

use std::fs;
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weft::prelude::*;

struct Article {
    id: u64,
    title: String,
    body: String,
}

/// Articles, kept in memory for the demo.
struct ArticlesController {
    articles: Vec<Article>,
}

fn articles_controller() -> Result<Controller<ArticlesController>, Error> {
    let controller = Controller::<ArticlesController>::new(Conventions::default())?
        .action("index", |state: &mut ArticlesController, exchange| {
            let items: String = state
                .articles
                .iter()
                .map(|a| format!("<li><a href=\"/articles/{}\">{}</a></li>", a.id, a.title))
                .collect();
            exchange.assign("items", json!(items));
            Ok(())
        })
        .action("show", |state: &mut ArticlesController, exchange| {
            let id: u64 = exchange.request().param_as("id").unwrap_or(0);
            match state.articles.iter().find(|a| a.id == id) {
                Some(article) => {
                    exchange.assign("title", json!(article.title));
                    exchange.assign("body", json!(article.body));
                }
                None => {
                    exchange.render(RenderDirective::plain("no such article").with_status(404));
                }
            }
            Ok(())
        })
        .action("create", |state: &mut ArticlesController, exchange| {
            let title = exchange
                .request()
                .param("title")
                .cloned()
                .unwrap_or_else(|| "untitled".to_string());
            let id = state.articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
            state.articles.push(Article {
                id,
                title,
                body: String::new(),
            });
            exchange.render(RenderDirective::json(json!({ "id": id }).to_string()).with_status(201));
            Ok(())
        });
    Ok(controller)
}

/// Loads template files from a root directory and substitutes `{{key}}`
/// placeholders with the action's assigns. Stands in for a real template
/// engine, which weft leaves to the embedding application.
struct DirTemplates {
    root: PathBuf,
}

impl TemplateRenderer for DirTemplates {
    fn render(&self, template: &str, assigns: &Assigns) -> Result<String, Error> {
        let path = self.root.join(template);
        if !path.is_file() {
            return Err(Error::TemplateNotFound(template.to_string()));
        }
        let mut rendered = fs::read_to_string(&path)
            .map_err(|e| Error::Render(format!("{template}: {e}")))?;
        for (key, value) in assigns {
            let text = match value {
                JsonValue::String(s) => s.clone(),
                other => other.to_string(),
            };
            rendered = rendered.replace(&format!("{{{{{key}}}}}"), &text);
        }
        Ok(rendered)
    }
}

fn print_response(label: &str, response: &Response) {
    println!("--- {label}");
    println!(
        "{} [{}]",
        response.status,
        response
            .content_type()
            .map(String::as_str)
            .unwrap_or("none")
    );
    println!("{}\n", response.body);
}

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let controller = articles_controller()?;
    tracing::info!(controller = %controller.name(), "controller registered");
    let renderer = DirTemplates {
        root: PathBuf::from("templates"),
    };
    let logger = TracingLogger;

    let mut state = ArticlesController {
        articles: vec![
            Article {
                id: 1,
                title: "Hello, weft".to_string(),
                body: "A controller layer in search of a server.".to_string(),
            },
            Article {
                id: 2,
                title: "Templates without an engine".to_string(),
                body: "Placeholders are enough for a demo.".to_string(),
            },
        ],
    };

    let index = controller.handle(
        &mut state,
        Exchange::new(Request {
            path: "/articles".to_string(),
            ..Request::default()
        }),
        "index",
        &renderer,
        &logger,
    )?;
    print_response("GET /articles", &index);

    let show = controller.handle(
        &mut state,
        Exchange::new(Request {
            path: "/articles/2".to_string(),
            ..Request::default()
        }),
        "show",
        &renderer,
        &logger,
    )?;
    print_response("GET /articles/2", &show);

    let missing = controller.handle(
        &mut state,
        Exchange::new(Request {
            path: "/articles/99".to_string(),
            ..Request::default()
        }),
        "show",
        &renderer,
        &logger,
    )?;
    print_response("GET /articles/99", &missing);

    let mut create_request = Request {
        method: "POST".to_string(),
        path: "/articles".to_string(),
        ..Request::default()
    };
    create_request
        .params
        .insert("title".to_string(), "Fresh off the press".to_string());
    let created = controller.handle(
        &mut state,
        Exchange::new(create_request),
        "create",
        &renderer,
        &logger,
    )?;
    print_response("POST /articles", &created);

    Ok(())
}
