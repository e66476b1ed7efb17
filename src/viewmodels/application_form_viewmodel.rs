// ============================================================================
// APPLICATION FORM VIEWMODEL - Student submits a mentorship application
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::models::NewApplication;
use crate::services::{ApiClient, ApiError};

/// Programs offered in the form's select
pub const PROGRAM_OPTIONS: [&str; 4] = [
    "Software Engineering Mentorship",
    "Business Mentorship",
    "Technology Training",
    "Higher Education Guidance",
];

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Your application is already being submitted")]
    Busy,
    #[error("Failed to submit application.")]
    Failed(ApiError),
}

pub struct ApplicationFormViewModel {
    api: Rc<ApiClient>,
    submitting: Cell<bool>,
}

impl ApplicationFormViewModel {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self {
            api,
            submitting: Cell::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// On `Ok` the caller reloads the dashboard
    pub async fn submit(&self, form: NewApplication) -> Result<(), FormError> {
        if self.submitting.get() {
            return Err(FormError::Busy);
        }

        let application = NewApplication {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            program: form.program.trim().to_string(),
            course: form.course.trim().to_string(),
        };
        let blank = [
            &application.first_name,
            &application.last_name,
            &application.program,
            &application.course,
        ]
        .iter()
        .any(|value| value.is_empty());
        if blank {
            return Err(FormError::MissingFields);
        }

        self.submitting.set(true);
        let result = self.api.submit_application(&application).await;
        self.submitting.set(false);

        match result {
            Ok(()) => {
                log::info!("📨 [APPLICATION] Submitted for {}", application.program);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [APPLICATION] {}", e);
                Err(FormError::Failed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{MockTransport, TEST_BASE_URL};
    use crate::services::Method;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use serde_json::Value;

    fn setup() -> (ApplicationFormViewModel, Rc<MockTransport>) {
        let transport = MockTransport::new();
        let api = ApiClient::new(TEST_BASE_URL, transport.clone(), Rc::new(MemoryStorage::new()));
        (ApplicationFormViewModel::new(Rc::new(api)), transport)
    }

    fn filled() -> NewApplication {
        NewApplication {
            first_name: " Amina ".into(),
            last_name: "Yusuf".into(),
            program: PROGRAM_OPTIONS[0].into(),
            course: "Computer Science".into(),
        }
    }

    #[test]
    fn posts_trimmed_fields() {
        let (vm, transport) = setup();
        transport.respond(Method::Post, "student/applications/", 201, "{}");

        block_on(vm.submit(filled())).unwrap();

        let sent = transport.requests_to(Method::Post, "student/applications/");
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["first_name"], "Amina");
        assert_eq!(body["program"], "Software Engineering Mentorship");
        assert!(!vm.is_submitting());
    }

    #[test]
    fn blank_course_is_rejected_locally() {
        let (vm, transport) = setup();
        let mut form = filled();
        form.course = "  ".into();

        assert_eq!(block_on(vm.submit(form)), Err(FormError::MissingFields));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn server_failure_is_reported() {
        let (vm, transport) = setup();
        transport.respond(Method::Post, "student/applications/", 400, r#"{"program":["required"]}"#);

        let err = block_on(vm.submit(filled())).unwrap_err();
        assert_eq!(err.to_string(), "Failed to submit application.");
        assert!(matches!(err, FormError::Failed(ApiError::Http { status: 400, .. })));
    }
}
