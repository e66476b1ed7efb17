// ============================================================================
// MENTOR DASHBOARD VIEWMODEL - Review queue, approve / reject
// ============================================================================
// Applications live in a keyed cache. A status update either patches the
// cache with the echoed record or triggers a full re-fetch. Updates are
// tracked per application id so one row can't be submitted twice.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{ApplicationStatus, StatusUpdateRequest};
use crate::services::{ApiClient, ApiError};
use crate::state::ApplicationCache;
use crate::utils::{FETCH_APPLICATIONS_FAILED_MESSAGE, UPDATE_STATUS_FAILED_MESSAGE};

pub const EMPTY_QUEUE_MESSAGE: &str = "No student applications assigned yet.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error("{}", FETCH_APPLICATIONS_FAILED_MESSAGE)]
    Fetch(ApiError),
    #[error("{}", UPDATE_STATUS_FAILED_MESSAGE)]
    Update(ApiError),
    #[error("Application {0} is already being updated")]
    Busy(i64),
}

/// Result of a successful status change
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// "Application Approved successfully!"
    pub message: String,
    /// Set when the follow-up list refresh failed
    pub refresh_error: Option<DashboardError>,
}

/// One table row, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationRow {
    pub id: i64,
    pub student: String,
    pub program: String,
    pub course: String,
    pub status: ApplicationStatus,
    pub applied_on: String,
    pub feedback: String,
    pub consultation: String,
    pub updating: bool,
}

pub struct MentorDashboardViewModel {
    api: Rc<ApiClient>,
    applications: RefCell<ApplicationCache>,
    updating: RefCell<HashSet<i64>>,
    loading: Cell<bool>,
}

impl MentorDashboardViewModel {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self {
            api,
            applications: RefCell::new(ApplicationCache::new()),
            updating: RefCell::new(HashSet::new()),
            loading: Cell::new(true),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Whether a command for `id` is in flight
    pub fn is_updating(&self, id: i64) -> bool {
        self.updating.borrow().contains(&id)
    }

    /// Table rows in server order
    pub fn rows(&self) -> Vec<ApplicationRow> {
        let updating = self.updating.borrow();
        self.applications
            .borrow()
            .iter()
            .map(|app| ApplicationRow {
                id: app.id,
                student: app.full_name(),
                program: app.program.clone(),
                course: app.course.clone().unwrap_or_default(),
                status: app.status,
                applied_on: app.applied_on(),
                feedback: app.feedback_text().to_string(),
                consultation: app.consultation_text().to_string(),
                updating: updating.contains(&app.id),
            })
            .collect()
    }

    /// Replace the cache with the server list
    pub async fn load(&self) -> Result<(), DashboardError> {
        self.loading.set(true);
        let result = self.api.list_applications().await;
        self.loading.set(false);

        match result {
            Ok(applications) => {
                log::info!("📋 [MENTOR] {} applications in queue", applications.len());
                self.applications.borrow_mut().replace_all(applications);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [MENTOR] Fetch failed: {}", e);
                Err(DashboardError::Fetch(e))
            }
        }
    }

    /// Approve and schedule the consultation at the moment of the click
    pub async fn approve(
        &self,
        id: i64,
        pressed_at: DateTime<Utc>,
    ) -> Result<UpdateOutcome, DashboardError> {
        self.update_status(id, StatusUpdateRequest::approve(pressed_at)).await
    }

    /// Reject and clear any scheduled consultation
    pub async fn reject(&self, id: i64) -> Result<UpdateOutcome, DashboardError> {
        self.update_status(id, StatusUpdateRequest::reject()).await
    }

    async fn update_status(
        &self,
        id: i64,
        update: StatusUpdateRequest,
    ) -> Result<UpdateOutcome, DashboardError> {
        let started = self.updating.borrow_mut().insert(id);
        if !started {
            log::warn!("⚠️ [MENTOR] Application {} already updating", id);
            return Err(DashboardError::Busy(id));
        }

        let outcome = self.apply_update(id, &update).await;
        self.updating.borrow_mut().remove(&id);
        outcome
    }

    async fn apply_update(
        &self,
        id: i64,
        update: &StatusUpdateRequest,
    ) -> Result<UpdateOutcome, DashboardError> {
        let echoed = self.api.update_application_status(id, update).await.map_err(|e| {
            if e.is_auth_rejection() {
                log::error!("❌ [MENTOR] Not allowed to update application {}: {}", id, e);
            } else {
                log::error!("❌ [MENTOR] Update of {} failed: {}", id, e);
            }
            DashboardError::Update(e)
        })?;

        let message = format!("Application {} successfully!", update.status);
        let refresh_error = match echoed {
            Some(record) => {
                self.applications.borrow_mut().upsert(record);
                None
            }
            None => self.load().await.err(),
        };

        Ok(UpdateOutcome {
            message,
            refresh_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{MockTransport, TEST_BASE_URL};
    use crate::services::Method;
    use crate::utils::MemoryStorage;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use futures::FutureExt;
    use serde_json::Value;

    const LIST: &str = "student/applications/";
    const UPDATE_7: &str = "student/applications/7/update_status/";

    fn pending_list() -> &'static str {
        r#"[
            {"id":7,"first_name":"Amina","last_name":"Yusuf","program":"Business Mentorship","status":"Pending","created_at":"2025-01-15"},
            {"id":8,"first_name":"Bilal","last_name":"Omar","program":"Technology Training","status":"Pending","created_at":"2025-01-16"}
        ]"#
    }

    fn setup() -> (Rc<MentorDashboardViewModel>, Rc<MockTransport>) {
        let transport = MockTransport::new();
        let api = ApiClient::new(TEST_BASE_URL, transport.clone(), Rc::new(MemoryStorage::new()));
        (Rc::new(MentorDashboardViewModel::new(Rc::new(api))), transport)
    }

    fn body(transport: &MockTransport, path: &str) -> Value {
        let sent = transport.requests_to(Method::Post, path);
        serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn approve_sends_timestamp_then_refetches() {
        let (vm, transport) = setup();
        transport.respond(Method::Get, LIST, 200, pending_list());
        transport.respond(Method::Post, UPDATE_7, 200, r#"{"message":"Status updated"}"#);
        block_on(vm.load()).unwrap();

        let pressed_at = Utc.with_ymd_and_hms(2025, 1, 20, 14, 5, 9).unwrap();
        let outcome = block_on(vm.approve(7, pressed_at)).unwrap();

        assert_eq!(outcome.message, "Application Approved successfully!");
        assert_eq!(outcome.refresh_error, None);
        assert_eq!(
            body(&transport, UPDATE_7),
            serde_json::json!({ "status": "Approved", "consultation_date": "2025-01-20T14:05:09.000Z" })
        );

        let methods: Vec<Method> = transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Get, Method::Post, Method::Get]);
        assert!(!vm.is_updating(7));
    }

    #[test]
    fn reject_sends_null_timestamp() {
        let (vm, transport) = setup();
        transport.respond(Method::Get, LIST, 200, pending_list());
        transport.respond(Method::Post, UPDATE_7, 200, "{}");
        block_on(vm.load()).unwrap();

        let outcome = block_on(vm.reject(7)).unwrap();

        assert_eq!(outcome.message, "Application Rejected successfully!");
        let sent = body(&transport, UPDATE_7);
        assert_eq!(sent["status"], "Rejected");
        assert!(sent["consultation_date"].is_null());
        assert_eq!(transport.requests_to(Method::Get, LIST).len(), 2);
    }

    #[test]
    fn echoed_record_is_patched_without_refetch() {
        let (vm, transport) = setup();
        transport.respond(Method::Get, LIST, 200, pending_list());
        transport.respond(
            Method::Post,
            UPDATE_7,
            200,
            r#"{"id":7,"first_name":"Amina","last_name":"Yusuf","program":"Business Mentorship",
                "status":"Rejected","feedback":"Incomplete","created_at":"2025-01-15"}"#,
        );
        block_on(vm.load()).unwrap();

        block_on(vm.reject(7)).unwrap();

        assert_eq!(transport.requests_to(Method::Get, LIST).len(), 1);
        let rows = vm.rows();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7, 8]);
        assert_eq!(rows[0].status, ApplicationStatus::Rejected);
        assert_eq!(rows[0].feedback, "Incomplete");
        assert_eq!(rows[1].status, ApplicationStatus::Pending);
    }

    #[test]
    fn second_command_on_same_row_is_rejected() {
        let (vm, transport) = setup();
        transport.respond(Method::Get, LIST, 200, pending_list());
        transport.respond(Method::Post, UPDATE_7, 200, "{}");
        block_on(vm.load()).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let vm = Rc::downgrade(&vm);
            let seen = seen.clone();
            transport.on_send(move |request| {
                if request.method != Method::Post {
                    return;
                }
                if let Some(vm) = vm.upgrade() {
                    seen.borrow_mut().push(vm.is_updating(7));
                    let row = vm.rows().into_iter().find(|row| row.id == 7);
                    seen.borrow_mut().push(row.map_or(false, |row| row.updating));
                    let second = vm.reject(7).now_or_never();
                    seen.borrow_mut().push(matches!(second, Some(Err(DashboardError::Busy(7)))));
                }
            });
        }

        block_on(vm.approve(7, Utc::now())).unwrap();

        assert_eq!(*seen.borrow(), vec![true, true, true]);
        assert_eq!(transport.requests_to(Method::Post, UPDATE_7).len(), 1);
        assert!(!vm.is_updating(7));
    }

    #[test]
    fn different_rows_update_independently() {
        let (vm, transport) = setup();
        transport.respond(Method::Get, LIST, 200, pending_list());
        transport.respond(Method::Post, UPDATE_7, 200, "{}");
        transport.respond(Method::Post, "student/applications/8/update_status/", 200, "{}");
        block_on(vm.load()).unwrap();

        let (first, second) =
            block_on(async { futures::join!(vm.approve(7, Utc::now()), vm.reject(8)) });

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert!(!vm.is_updating(7) && !vm.is_updating(8));
    }

    #[test]
    fn update_failure_keeps_cache_and_reports() {
        let (vm, transport) = setup();
        transport.respond(Method::Get, LIST, 200, pending_list());
        transport.respond(Method::Post, UPDATE_7, 403, r#"{"detail":"Not your application"}"#);
        block_on(vm.load()).unwrap();

        let err = block_on(vm.reject(7)).unwrap_err();

        assert_eq!(err.to_string(), "Failed to update status.");
        assert_eq!(vm.rows()[0].status, ApplicationStatus::Pending);
        assert_eq!(transport.requests_to(Method::Get, LIST).len(), 1);
        assert!(!vm.is_updating(7));
    }

    #[test]
    fn fetch_failure_message() {
        let (vm, transport) = setup();
        transport.fail(Method::Get, LIST, ApiError::Network("offline".into()));

        let err = block_on(vm.load()).unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch applications.");
        assert!(!vm.is_loading());
        assert!(vm.rows().is_empty());
    }

    #[test]
    fn refresh_failure_after_update_is_surfaced() {
        let (vm, transport) = setup();
        transport.respond(Method::Get, LIST, 200, pending_list());
        transport.respond(Method::Get, LIST, 500, "oops");
        transport.respond(Method::Post, UPDATE_7, 200, "{}");
        block_on(vm.load()).unwrap();

        let outcome = block_on(vm.reject(7)).unwrap();

        assert!(matches!(outcome.refresh_error, Some(DashboardError::Fetch(_))));
        assert_eq!(vm.rows().len(), 2);
    }
}
