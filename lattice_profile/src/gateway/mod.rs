pub mod canned;
pub mod http;

use lattice_core::error::LtResult;
use lattice_core::{Profile, ProfileWithEmail, ScoredProfile, Token};

use entrait::entrait_export as entrait;

///
/// Data access for the signed-in user's profile, one method per lifecycle action.
///
/// Every method fails with an error whose `message()` is fit for showing to the user.
/// Only `update_profile` (a full-record replace) is naturally idempotent.
///
#[entrait(mock_api=ProfileGatewayMock)]
pub trait ProfileGateway {
    async fn get_profile(&self, token: &Token) -> LtResult<ProfileWithEmail>;

    async fn get_profiles(&self, token: &Token) -> LtResult<Vec<ScoredProfile>>;

    async fn start_profile(&self, token: &Token) -> LtResult<()>;

    async fn update_profile(&self, token: &Token, profile: Profile) -> LtResult<ProfileWithEmail>;

    async fn set_visible(&self, token: &Token, visible: bool) -> LtResult<ProfileWithEmail>;

    async fn complete_tour(&self, token: &Token, tour_id: &str) -> LtResult<()>;
}
