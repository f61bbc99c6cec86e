//! HTML pages for the web front end.

use super::DashboardView;
use crate::types::{ClassSession, Weekday};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde_json::json;

const PAGE_TEMPLATE: &str = include_str!("templates/page.hbs");
const CONFIRM_TEMPLATE: &str = include_str!("templates/confirm.hbs");

/// Sections of the dashboard page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Classrooms,
    Timetable,
    Classes,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Classrooms,
        Tab::Timetable,
        Tab::Classes,
        Tab::Reports,
    ];

    /// Unknown names fall back to the dashboard.
    pub fn parse(value: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| Some(tab.id()) == value)
            .unwrap_or_default()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Classrooms => "classrooms",
            Tab::Timetable => "timetable",
            Tab::Classes => "classes",
            Tab::Reports => "reports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Classrooms => "Classrooms",
            Tab::Timetable => "Timetable",
            Tab::Classes => "Classes",
            Tab::Reports => "Reports",
        }
    }
}

/// Renders the dashboard and confirmation pages.
///
/// Every interpolated value is HTML-escaped by handlebars.
pub struct PageRenderer {
    hbs: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut hbs = Handlebars::new();
        hbs.register_template_string("page", PAGE_TEMPLATE)?;
        hbs.register_template_string("confirm", CONFIRM_TEMPLATE)?;
        Ok(Self { hbs })
    }

    /// Renders the full dashboard with `tab` shown.
    ///
    /// `today` is printed at the top, e.g. "Tue Oct 14 2026".
    pub fn dashboard(&self, view: &DashboardView, tab: Tab, today: &str) -> Result<String, RenderError> {
        let tabs: Vec<_> = Tab::ALL
            .iter()
            .map(|t| json!({ "id": t.id(), "label": t.label(), "active": *t == tab }))
            .collect();
        let days: Vec<_> = Weekday::ALL.iter().map(|d| d.as_str()).collect();
        let mut active = serde_json::Map::new();
        active.insert(tab.id().to_string(), json!(true));

        let context = json!({
            "title": "Classboard",
            "today": today,
            "tabs": tabs,
            "active": active,
            "days": days,
            "view": view,
        });

        self.hbs.render("page", &context)
    }

    /// Renders the "Delete class?" prompt for `id`.
    ///
    /// `class` is the cached class, if it is still known.
    pub fn confirm_delete(&self, id: i64, class: Option<&ClassSession>) -> Result<String, RenderError> {
        let context = json!({
            "title": "Delete class? | Classboard",
            "id": id,
            "class": class,
        });
        self.hbs.render("confirm", &context)
    }
}

/// Today's date in the "Tue Oct 14 2026" style.
pub fn today() -> String {
    chrono::Local::now().format("%a %b %d %Y").to_string()
}
