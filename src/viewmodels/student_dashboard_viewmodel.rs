// ============================================================================
// STUDENT DASHBOARD VIEWMODEL
// ============================================================================
// Load once on mount: the first application (if any) is the student's own.
// Without one, the greeting name comes from `auth/user/`. Failures are only
// logged; the page renders with whatever was loaded.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{Application, ApplicationStatus};
use crate::services::ApiClient;

/// Status badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Yellow,
    Red,
}

impl BadgeTone {
    /// Approved is green, pending yellow, anything else red
    pub fn for_status(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Approved => BadgeTone::Green,
            ApplicationStatus::Pending => BadgeTone::Yellow,
            _ => BadgeTone::Red,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Green => "badge badge-green",
            BadgeTone::Yellow => "badge badge-yellow",
            BadgeTone::Red => "badge badge-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusPanel {
    pub program: String,
    pub status: ApplicationStatus,
    pub tone: BadgeTone,
    pub applied_on: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudentPanel {
    /// No application yet
    ApplicationForm,
    Status(StatusPanel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MentorContact {
    pub name: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentDashboardModel {
    pub greeting: String,
    pub stats: Vec<StatCard>,
    pub panel: StudentPanel,
    pub mentor_contact: Option<MentorContact>,
}

// Static catalog -------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommunityEvent {
    pub title: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub date: &'static str,
}

pub const PROGRAMS: [ProgramCard; 4] = [
    ProgramCard {
        icon: "💻",
        title: "Software Engineering Mentorship",
        description: "Connect with industry professionals",
    },
    ProgramCard {
        icon: "💼",
        title: "Business Mentorship",
        description: "Learn entrepreneurship skills",
    },
    ProgramCard {
        icon: "📱",
        title: "Technology Training",
        description: "Coding and digital literacy workshops",
    },
    ProgramCard {
        icon: "🎓",
        title: "Higher Education Guidance",
        description: "University applications and scholarships",
    },
];

pub const EVENTS: [CommunityEvent; 4] = [
    CommunityEvent {
        title: "Career Consultation Session",
        kind: "Workshop",
        date: "2025-01-25",
        time: "10:00 AM",
        location: "Online",
    },
    CommunityEvent {
        title: "Digital Skills Training",
        kind: "Training",
        date: "2025-01-27",
        time: "2:00 PM",
        location: "Community Center",
    },
    CommunityEvent {
        title: "Scholarship Opportunities Webinar",
        kind: "Webinar",
        date: "2025-01-30",
        time: "11:00 AM",
        location: "Online",
    },
    CommunityEvent {
        title: "Mentor-Student Meetup",
        kind: "Meetup",
        date: "2025-02-02",
        time: "3:00 PM",
        location: "University Campus",
    },
];

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        icon: "📊",
        title: "Completed Career Assessment",
        date: "1/15/2025",
    },
    Achievement {
        icon: "💻",
        title: "Finished Digital Skills Module",
        date: "1/10/2025",
    },
    Achievement {
        icon: "🤝",
        title: "Connected with Mentor",
        date: "1/05/2025",
    },
];

const RESOURCE_COUNT: usize = 4;

// ViewModel ------------------------------------------------------------------

pub struct StudentDashboardViewModel {
    api: Rc<ApiClient>,
    loading: Cell<bool>,
    application: RefCell<Option<Application>>,
    student_name: RefCell<String>,
}

impl StudentDashboardViewModel {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self {
            api,
            loading: Cell::new(true),
            application: RefCell::new(None),
            student_name: RefCell::new(String::new()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Fetch the student's application, or their name when there is none.
    /// Failures are logged and leave the dashboard in its empty state.
    pub async fn load(&self) {
        self.loading.set(true);

        match self.api.list_applications().await {
            Ok(applications) => {
                let first = applications.into_iter().next();
                match &first {
                    Some(application) => {
                        *self.student_name.borrow_mut() = application.first_name.clone();
                    }
                    None => match self.api.current_user().await {
                        Ok(user) => *self.student_name.borrow_mut() = user.first_name,
                        Err(e) => log::error!("❌ [STUDENT] Could not load profile: {}", e),
                    },
                }
                *self.application.borrow_mut() = first;
            }
            Err(e) => log::error!("❌ [STUDENT] Could not load application: {}", e),
        }

        self.loading.set(false);
    }

    /// Snapshot for rendering
    pub fn model(&self) -> StudentDashboardModel {
        let application = self.application.borrow();
        let name = self.student_name.borrow();

        let panel = match application.as_ref() {
            None => StudentPanel::ApplicationForm,
            Some(app) => StudentPanel::Status(StatusPanel {
                program: app.program.clone(),
                status: app.status,
                tone: BadgeTone::for_status(app.status),
                applied_on: app.applied_on(),
            }),
        };

        let mentor_contact = application.as_ref().and_then(|app| {
            let name = app.mentor_name()?.to_string();
            let initials = app.mentor_initials().unwrap_or_default();
            Some(MentorContact { name, initials })
        });

        let mentor_stat = mentor_contact
            .as_ref()
            .map(|contact| contact.name.clone())
            .unwrap_or_else(|| "None".to_string());

        StudentDashboardModel {
            greeting: format!("Welcome back, {}!", name),
            stats: vec![
                StatCard {
                    icon: "🎯",
                    title: "Career Guidance",
                    value: "Active".into(),
                },
                StatCard {
                    icon: "👨‍🎓",
                    title: "Mentor",
                    value: mentor_stat,
                },
                StatCard {
                    icon: "💻",
                    title: "Tech Training",
                    value: "Available".into(),
                },
                StatCard {
                    icon: "📚",
                    title: "Resources",
                    value: RESOURCE_COUNT.to_string(),
                },
                StatCard {
                    icon: "🌐",
                    title: "Events",
                    value: EVENTS.len().to_string(),
                },
            ],
            panel,
            mentor_contact,
        }
    }
}
