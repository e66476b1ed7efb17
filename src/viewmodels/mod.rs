pub mod application_form_viewmodel;
pub mod login_viewmodel;
pub mod mentor_dashboard_viewmodel;
pub mod navbar_viewmodel;
pub mod signup_viewmodel;
pub mod student_dashboard_viewmodel;

pub use application_form_viewmodel::{ApplicationFormViewModel, FormError};
pub use login_viewmodel::{LoginError, LoginForm, LoginViewModel};
pub use mentor_dashboard_viewmodel::{DashboardError, MentorDashboardViewModel, UpdateOutcome};
pub use navbar_viewmodel::{NavBarModel, NavBarViewModel, NavMode};
pub use signup_viewmodel::{SignupError, SignupForm, SignupViewModel};
pub use student_dashboard_viewmodel::{StudentDashboardViewModel, StudentPanel};
