//! What every screen needs to talk to the outside world.

use std::rc::Rc;

use common::client::ApiClient;
use common::config::ApiConfig;
use common::routes::Route;
use common::session::Session;
use yew::prelude::*;

use crate::storage::LocalStorageStore;
use crate::transport::GlooTransport;

pub type Client = ApiClient<GlooTransport>;
pub type BrowserSession = Session<LocalStorageStore>;

/// The API client and the session, built once by the shell. A new value is
/// built whenever the session token changes.
#[derive(Debug, Clone, PartialEq)]
pub struct AppServices {
    pub client: Client,
    pub session: BrowserSession,
}

impl AppServices {
    pub fn new(config: ApiConfig) -> Self {
        let session = Session::new(LocalStorageStore);
        let client = ApiClient::new(GlooTransport, config).with_token(session.token());
        Self { client, session }
    }

    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone().with_token(token),
            session: self.session.clone(),
        }
    }
}

/// Properties shared by every screen mounted by the shell.
#[derive(Properties, Clone, PartialEq)]
pub struct ScreenProps {
    pub services: Rc<AppServices>,
    pub navigate: Callback<Route>,
}

/// Properties of an entity form. `id` selects edit mode.
#[derive(Properties, Clone, PartialEq)]
pub struct FormProps {
    pub services: Rc<AppServices>,
    pub navigate: Callback<Route>,
    #[prop_or_default]
    pub id: Option<i64>,
}
