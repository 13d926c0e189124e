//! Scenario state for the review dashboard BDD tests.

use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use docquest_review::{
    BlockCard, DashboardState, DirectoryDownloads, EffectRunner, HttpBlockGateway, ReviewDashboard,
    ReviewError,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use tokio::runtime::{Builder, Runtime};
use url::Url;
use wiremock::{Mock, MockServer};

/// Current-thread runtime shared by every step of a scenario.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<Runtime>);

impl SharedRuntime {
    fn start() -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        Self(Rc::new(runtime))
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct DashboardScenario {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) downloads: Slot<TempDir>,
    pub(crate) dashboard: Slot<ReviewDashboard>,
    pub(crate) first_cards: Slot<Vec<BlockCard>>,
    pub(crate) save_result: Slot<Result<(), ReviewError>>,
    pub(crate) export_result: Slot<Result<Utf8PathBuf, ReviewError>>,
}

/// Returns the shared runtime, starting it and the mock server on first use.
pub(crate) fn shared_runtime(scenario: &DashboardScenario) -> SharedRuntime {
    let runtime = scenario.runtime.get().unwrap_or_else(|| {
        let started = SharedRuntime::start();
        scenario.runtime.set(started.clone());
        started
    });

    if scenario.server.with_ref(|_| ()).is_none() {
        scenario.server.set(runtime.block_on(MockServer::start()));
    }

    runtime
}

/// Mounts `mock` on the scenario's server.
pub(crate) fn mount(scenario: &DashboardScenario, mock: Mock) {
    let runtime = shared_runtime(scenario);
    scenario
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

/// Builds the dashboard against the mock server on first use.
pub(crate) fn ensure_dashboard(scenario: &DashboardScenario) {
    shared_runtime(scenario);
    if scenario.dashboard.with_ref(|_| ()).is_some() {
        return;
    }

    let server_uri = scenario
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"));
    let base_url = Url::parse(&server_uri)
        .unwrap_or_else(|error| panic!("mock server URL is invalid: {error}"));
    let gateway = HttpBlockGateway::new(&base_url, Some(Duration::from_secs(5)))
        .unwrap_or_else(|error| panic!("failed to build gateway: {error}"));

    let temp_dir = crate::support::create_temp_dir();
    let directory = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()));
    scenario.downloads.set(temp_dir);

    let runner = EffectRunner::new(
        Arc::new(gateway),
        Arc::new(DirectoryDownloads::new(directory)),
    );
    scenario
        .dashboard
        .set(ReviewDashboard::new(DashboardState::default(), runner));
}

/// Runs `operation` against the dashboard on the scenario's runtime.
pub(crate) fn with_dashboard<T>(
    scenario: &DashboardScenario,
    operation: impl AsyncFnOnce(&mut ReviewDashboard) -> T,
) -> T {
    ensure_dashboard(scenario);
    let runtime = shared_runtime(scenario);
    scenario
        .dashboard
        .with_mut(|dashboard| runtime.block_on(operation(dashboard)))
        .unwrap_or_else(|| panic!("dashboard not initialised"))
}
