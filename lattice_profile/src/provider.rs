use crate::gateway::ProfileGateway;

use lattice_core::error::LtResult;
use lattice_core::{ProfileWithEmail, Token};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded(ProfileWithEmail),
    Failed(String),
}

/// The signed-in user's profile as known to the current session.
#[derive(Clone, Debug, Default)]
pub struct ProfileProvider {
    state: ProfileState,
}

impl ProfileProvider {
    pub fn is_loading(&self) -> bool {
        self.state == ProfileState::Loading
    }

    pub fn profile(&self) -> Option<&ProfileWithEmail> {
        match &self.state {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            ProfileState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub async fn load(&mut self, deps: &impl ProfileGateway, token: &Token) -> LtResult<()> {
        self.state = ProfileState::Loading;

        match deps.get_profile(token).await {
            Ok(profile) => {
                tracing::debug!(id = %profile.id, "profile loaded");
                self.state = ProfileState::Loaded(profile);
                Ok(())
            }
            Err(error) => {
                self.state = ProfileState::Failed(error.message());
                Err(error)
            }
        }
    }

    /// Take over the record returned by a successful save.
    pub fn replace(&mut self, profile: ProfileWithEmail) {
        self.state = ProfileState::Loaded(profile);
    }
}
