use crate::config::Config;

use lattice_core::error::LtResult;
use lattice_core::{Profile, ProfileWithEmail, ScoredProfile, Token};
use lattice_profile::gateway::canned::CannedGateway;
use lattice_profile::gateway::http::HttpGateway;
use lattice_profile::ProfileGateway;

/// The gateway the running application talks to.
#[derive(Clone, Debug)]
pub enum App {
    Canned(CannedGateway),
    Http(HttpGateway),
}

impl App {
    pub fn from_config(config: &Config) -> LtResult<Self> {
        Ok(match &config.api_host {
            Some(api_host) => {
                tracing::info!(%api_host, "using profile service");
                App::Http(HttpGateway::new(api_host)?)
            }
            None => {
                tracing::info!("no API host configured, using canned profile data");
                App::Canned(CannedGateway)
            }
        })
    }
}

impl ProfileGateway for App {
    async fn get_profile(&self, token: &Token) -> LtResult<ProfileWithEmail> {
        match self {
            Self::Canned(gateway) => gateway.get_profile(token).await,
            Self::Http(gateway) => gateway.get_profile(token).await,
        }
    }

    async fn get_profiles(&self, token: &Token) -> LtResult<Vec<ScoredProfile>> {
        match self {
            Self::Canned(gateway) => gateway.get_profiles(token).await,
            Self::Http(gateway) => gateway.get_profiles(token).await,
        }
    }

    async fn start_profile(&self, token: &Token) -> LtResult<()> {
        match self {
            Self::Canned(gateway) => gateway.start_profile(token).await,
            Self::Http(gateway) => gateway.start_profile(token).await,
        }
    }

    async fn update_profile(&self, token: &Token, profile: Profile) -> LtResult<ProfileWithEmail> {
        match self {
            Self::Canned(gateway) => gateway.update_profile(token, profile).await,
            Self::Http(gateway) => gateway.update_profile(token, profile).await,
        }
    }

    async fn set_visible(&self, token: &Token, visible: bool) -> LtResult<ProfileWithEmail> {
        match self {
            Self::Canned(gateway) => gateway.set_visible(token, visible).await,
            Self::Http(gateway) => gateway.set_visible(token, visible).await,
        }
    }

    async fn complete_tour(&self, token: &Token, tour_id: &str) -> LtResult<()> {
        match self {
            Self::Canned(gateway) => gateway.complete_tour(token, tour_id).await,
            Self::Http(gateway) => gateway.complete_tour(token, tour_id).await,
        }
    }
}
