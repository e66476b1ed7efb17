// ============================================================================
// STUDENT DASHBOARD VIEW
// ============================================================================
// Renders a loading screen into a container, loads, then replaces the
// container content. Submitting the application form reloads.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::application_form::render_application_form;
use super::shared::{card, loading_screen};
use crate::dom::{append_child, replace_children, text_element, ElementBuilder};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::student_dashboard_viewmodel::{
    StatusPanel, StudentDashboardModel, ACHIEVEMENTS, EVENTS, PROGRAMS,
};
use crate::viewmodels::{StudentDashboardViewModel, StudentPanel};

struct StudentPage {
    vm: StudentDashboardViewModel,
    api: Rc<ApiClient>,
    container: Element,
}

pub fn render_student_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("dashboard student-dashboard").build();
    let page = Rc::new(StudentPage {
        vm: StudentDashboardViewModel::new(state.api.clone()),
        api: state.api.clone(),
        container: container.clone(),
    });
    reload(page);
    Ok(container)
}

fn reload(page: Rc<StudentPage>) {
    if let Ok(loading) = loading_screen("Loading your dashboard...") {
        if let Err(e) = replace_children(&page.container, &loading) {
            log::error!("❌ [STUDENT] {:?}", e);
        }
    }

    spawn_local(async move {
        page.vm.load().await;
        let model = page.vm.model();
        if let Err(e) = render_content(&page, &model) {
            log::error!("❌ [STUDENT] Render failed: {:?}", e);
        }
    });
}

fn render_content(page: &Rc<StudentPage>, model: &StudentDashboardModel) -> Result<(), JsValue> {
    let content = ElementBuilder::new("div")?.class("dashboard-content").build();

    let header = ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(text_element("h1", "dashboard-title", &format!("{} 👋", model.greeting))?)?
        .child(text_element(
            "p",
            "dashboard-subtitle",
            "Access mentorship, training, and resources to achieve your goals",
        )?)?
        .build();
    append_child(&content, &header)?;

    let stats = ElementBuilder::new("div")?.class("stats-strip").build();
    for stat in &model.stats {
        let tile = ElementBuilder::new("div")?
            .class("stat-card")
            .child(text_element("div", "stat-icon", stat.icon)?)?
            .child(text_element("h3", "stat-title", stat.title)?)?
            .child(text_element("span", "stat-value", &stat.value)?)?
            .build();
        append_child(&stats, &tile)?;
    }
    append_child(&content, &stats)?;

    let main = ElementBuilder::new("div")?.class("dashboard-main").build();
    match &model.panel {
        StudentPanel::ApplicationForm => append_child(&main, &application_panel(page)?)?,
        StudentPanel::Status(status) => {
            append_child(&main, &status_panel(status)?)?;
            append_child(&main, &programs_panel()?)?;
        }
    }

    let sidebar = ElementBuilder::new("aside")?.class("dashboard-sidebar").build();
    append_child(&sidebar, &events_panel()?)?;
    append_child(&sidebar, &achievements_panel()?)?;
    if let Some(mentor) = &model.mentor_contact {
        let panel = card("👨‍🎓 Your Mentor", "mentor-card")?;
        append_child(&panel, &text_element("div", "avatar", &mentor.initials)?)?;
        append_child(&panel, &text_element("p", "mentor-name", &mentor.name)?)?;
        append_child(&panel, &text_element("p", "muted", "Mentorship Specialist")?)?;
        append_child(&panel, &text_element("button", "btn btn-primary btn-block", "Contact Mentor")?)?;
        append_child(&sidebar, &panel)?;
    }

    let grid = ElementBuilder::new("div")?
        .class("dashboard-grid")
        .child(main)?
        .child(sidebar)?
        .build();
    append_child(&content, &grid)?;

    replace_children(&page.container, &content)
}

fn application_panel(page: &Rc<StudentPage>) -> Result<Element, JsValue> {
    let panel = card("🚀 Start Your Mentorship Journey", "application-card")?;
    append_child(
        &panel,
        &text_element(
            "p",
            "muted",
            "Join our comprehensive program offering career guidance, mentorship connections, \
             technology training, and community engagement opportunities.",
        )?,
    )?;

    let page_ref = page.clone();
    let on_submitted: Rc<dyn Fn()> = Rc::new(move || reload(page_ref.clone()));
    append_child(&panel, &render_application_form(page.api.clone(), on_submitted)?)?;
    Ok(panel)
}

fn status_panel(status: &StatusPanel) -> Result<Element, JsValue> {
    let panel = card("Application Status", "status-card")?;
    let rows = [
        ("Program:", text_element("span", "", &status.program)?),
        ("Status:", text_element("span", status.tone.css_class(), status.status.as_str())?),
        ("Applied:", text_element("span", "", &status.applied_on)?),
    ];
    for (label, value) in rows {
        let row = ElementBuilder::new("div")?
            .class("status-row")
            .child(text_element("span", "status-label", label)?)?
            .child(value)?
            .build();
        append_child(&panel, &row)?;
    }
    Ok(panel)
}

fn programs_panel() -> Result<Element, JsValue> {
    let panel = card("Available Mentorship Programs", "programs-card")?;
    for program in PROGRAMS.iter() {
        let item = ElementBuilder::new("div")?
            .class("program-item")
            .child(text_element("div", "program-icon", program.icon)?)?
            .child(text_element("h3", "program-title", program.title)?)?
            .child(text_element("p", "muted", program.description)?)?
            .child(text_element("button", "btn btn-success btn-block", "Open")?)?
            .build();
        append_child(&panel, &item)?;
    }
    Ok(panel)
}

fn events_panel() -> Result<Element, JsValue> {
    let panel = card("🌐 Community Events", "events-card")?;
    for event in EVENTS.iter() {
        let item = ElementBuilder::new("div")?
            .class("event-item")
            .child(text_element("h3", "event-title", event.title)?)?
            .child(text_element("p", "muted", event.kind)?)?
            .child(text_element("p", "muted", &format!("{} • {}", event.date, event.time))?)?
            .child(text_element("p", "muted", event.location)?)?
            .build();
        append_child(&panel, &item)?;
    }
    Ok(panel)
}

fn achievements_panel() -> Result<Element, JsValue> {
    let panel = card("🏆 Your Achievements", "achievements-card")?;
    for achievement in ACHIEVEMENTS.iter() {
        let item = ElementBuilder::new("div")?
            .class("achievement-item")
            .child(text_element("div", "achievement-icon", achievement.icon)?)?
            .child(text_element("p", "achievement-title", achievement.title)?)?
            .child(text_element("p", "muted", achievement.date)?)?
            .build();
        append_child(&panel, &item)?;
    }
    Ok(panel)
}
