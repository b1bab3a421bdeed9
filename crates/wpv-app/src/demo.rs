//! Bundled demo page.
//!
//! A small card page with a name field and two buttons, plus an about page
//! and a not-found page for any other path. It exercises every host feature:
//! console capture, internal and external links, and the failure boundary.

use wpv_core::{console_args, ConsoleArg};

use crate::document::{Document, Node};
use crate::hosted::{AppContext, HostedApplication, RenderError};

/// Source text shown in the code view when no source file is configured
pub const DEMO_SOURCE: &str = include_str!("demo.rs");

const PRIMARY_ACTION: &str = "primary";
const SECONDARY_ACTION: &str = "secondary";
const CRASH_ACTION: &str = "crash";
const HOME_ACTION: &str = "home";

#[derive(Debug, Default)]
pub struct DemoApp {
    mounted_logged: bool,
    primary_clicks: u32,
    crash_pending: bool,
}

impl DemoApp {
    pub fn new() -> Self {
        Self::default()
    }

    fn home(&self) -> Document {
        let mut buttons = vec![
            Node::button("Primary action", PRIMARY_ACTION),
            Node::button("Secondary", SECONDARY_ACTION),
        ];
        if self.primary_clicks > 0 {
            buttons.push(Node::muted(format!("clicked {}x", self.primary_clicks)));
        }

        Document::new(vec![
            Node::Card {
                title: Some("shadcn/ui Demo".to_string()),
                description: Some("A simple page.tsx showing a few basic components.".to_string()),
                children: vec![
                    Node::field("Your name", "Jane Doe"),
                    Node::Row(buttons),
                ],
            },
            Node::Row(vec![
                Node::link("/about", "About this page"),
                Node::link("https://ui.shadcn.com", "shadcn/ui docs"),
            ]),
            Node::Separator,
            Node::button("Simulate render error", CRASH_ACTION),
        ])
    }

    fn about(&self) -> Document {
        Document::new(vec![
            Node::heading("About"),
            Node::text("This page is rendered inside the preview host."),
            Node::text(
                "Links starting with / stay in the preview; other links open in your browser.",
            ),
            Node::Row(vec![
                Node::link("/", "Back to demo"),
                Node::link("/missing", "A page that does not exist"),
            ]),
        ])
    }

    fn not_found(path: &str) -> Document {
        Document::new(vec![
            Node::heading("Page Not Found"),
            Node::muted(format!("The page \"{}\" doesn't exist.", path)),
            Node::Link {
                href: "/".to_string(),
                children: vec![Node::button("Go Home", HOME_ACTION)],
            },
        ])
    }
}

impl HostedApplication for DemoApp {
    fn title(&self) -> &str {
        "shadcn/ui Demo"
    }

    fn render(&mut self, path: &str, ctx: &mut AppContext<'_>) -> Result<Document, RenderError> {
        if !self.mounted_logged {
            self.mounted_logged = true;
            ctx.console().info(&console_args![
                "%c Preview %c mounted at ",
                "color: white; background-color: #2563eb; font-weight: bold",
                "color: inherit",
                path
            ]);
        }

        if std::mem::take(&mut self.crash_pending) {
            return Err(RenderError::new("Simulated render failure"));
        }

        Ok(match path {
            "/" | "" => self.home(),
            "/about" => self.about(),
            other => Self::not_found(other),
        })
    }

    fn on_action(&mut self, action: &str, ctx: &mut AppContext<'_>) -> Result<(), RenderError> {
        match action {
            PRIMARY_ACTION => {
                self.primary_clicks += 1;
                ctx.console().log(&console_args!["Primary action clicked"]);
                if self.primary_clicks % 5 == 0 {
                    ctx.console().warn(&[
                        ConsoleArg::from("Primary clicked"),
                        ConsoleArg::serialize(&serde_json::json!({ "count": self.primary_clicks })),
                    ]);
                }
            }
            SECONDARY_ACTION => ctx.console().log(&console_args!["Secondary action clicked"]),
            CRASH_ACTION => self.crash_pending = true,
            HOME_ACTION => ctx.console().log(&console_args!["Going home"]),
            other => tracing::debug!("Demo ignores action '{}'", other),
        }
        Ok(())
    }
}
