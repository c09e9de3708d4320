mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;

pub use domain::{entities, use_cases};
pub use interfaces::{repositories, routes};
pub use infrastructure::{ids, storage, utils};

use entities::RecordCategory;
use errors::AppError;
use ids::ShortIdProvider;
use repositories::local_store::LocalRecordStore;
use routes::{AdminRoute, Resolution};
use storage::file::FileBackend;
use use_cases::auth::{AuthHandler, ConfigCredentials};
use use_cases::dashboard::DashboardHandler;
use use_cases::editor::EditorSession;
use use_cases::intake::MessageIntake;

pub type AdminStore = LocalRecordStore<FileBackend>;
pub type AdminAuthHandler = AuthHandler<ConfigCredentials, FileBackend>;

pub struct AdminState {
    pub auth_handler: AdminAuthHandler,
    pub dashboard: DashboardHandler<AdminStore>,
    pub intake: MessageIntake<AdminStore, ShortIdProvider>,
    store: AdminStore,
    ids: ShortIdProvider,
}

impl AdminState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let backend = FileBackend::new(&config.data_dir);
        let store = LocalRecordStore::new(backend.clone());
        let credentials = ConfigCredentials::from_config(config);

        AdminState {
            auth_handler: AuthHandler::new(credentials, backend),
            dashboard: DashboardHandler::new(store.clone(), config.name.clone()),
            intake: MessageIntake::new(store.clone(), ShortIdProvider),
            store,
            ids: ShortIdProvider,
        }
    }

    pub fn store(&self) -> &AdminStore {
        &self.store
    }

    /// Opens an editor session behind the admin guard. `id_param` is a
    /// stored id or the "new" sentinel.
    pub fn open_editor(
        &self,
        category: RecordCategory,
        id_param: &str,
    ) -> Result<EditorSession, AppError> {
        if !self.auth_handler.is_admin() {
            return Err(AppError::InvalidRoute("Admin session required".into()));
        }
        EditorSession::open(&self.store, &self.ids, category, id_param)
    }

    /// Runs the route guards against the current session and store.
    pub fn navigate(&self, route: AdminRoute) -> Result<Resolution, AppError> {
        routes::resolve(route, self.auth_handler.is_admin(), &self.store)
    }
}
