use crate::modules::issues::use_cases::cast_vote::handler::CastVoteHandler;
use crate::modules::issues::use_cases::list_issues::handler::ListIssuesHandler;
use crate::modules::issues::use_cases::manage_issue::handler::ManageIssueHandler;
use crate::modules::issues::use_cases::report_issue::handler::ReportIssueHandler;
use crate::modules::issues::use_cases::view_dashboard::handler::DashboardHandler;
use crate::modules::issues::use_cases::view_profile::handler::ViewProfileHandler;
use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<InMemoryBackend>,
    pub report_handler: Arc<ReportIssueHandler<InMemoryBackend>>,
    pub manage_handler: Arc<ManageIssueHandler<InMemoryBackend>>,
    pub list_handler: Arc<ListIssuesHandler<InMemoryBackend>>,
    pub vote_handler: Arc<CastVoteHandler<InMemoryBackend>>,
    pub dashboard_handler: Arc<DashboardHandler<InMemoryBackend>>,
    pub profile_handler: Arc<ViewProfileHandler<InMemoryBackend>>,
}

impl AppState {
    pub fn new(backend: InMemoryBackend) -> Self {
        let backend = Arc::new(backend);
        Self {
            report_handler: Arc::new(ReportIssueHandler::new(backend.clone())),
            manage_handler: Arc::new(ManageIssueHandler::new(backend.clone())),
            list_handler: Arc::new(ListIssuesHandler::new(backend.clone())),
            vote_handler: Arc::new(CastVoteHandler::new(backend.clone())),
            dashboard_handler: Arc::new(DashboardHandler::new(backend.clone())),
            profile_handler: Arc::new(ViewProfileHandler::new(backend.clone())),
            backend,
        }
    }
}
