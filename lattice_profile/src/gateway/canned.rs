use super::ProfileGateway;

use lattice_core::error::LtResult;
use lattice_core::{Profile, ProfileWithEmail, ScoredProfile, Token};

/// Stand-in for the profile service: answers every call immediately without doing any I/O.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedGateway;

/// The record every read and update resolves to.
pub fn canned_profile() -> ProfileWithEmail {
    ProfileWithEmail {
        id: "1".to_string(),
        email: "hacker@example.com".to_string(),
        profile: Profile {
            name: "Lattice Hacker".to_string(),
            idea: "Idea".to_string(),
            skills: vec![],
            looking_for: vec![],
            discord: "".to_string(),
        },
        visible: true,
        started: true,
        completed: true,
    }
}

impl ProfileGateway for CannedGateway {
    async fn get_profile(&self, _token: &Token) -> LtResult<ProfileWithEmail> {
        Ok(canned_profile())
    }

    async fn get_profiles(&self, _token: &Token) -> LtResult<Vec<ScoredProfile>> {
        Ok(vec![])
    }

    async fn start_profile(&self, _token: &Token) -> LtResult<()> {
        Ok(())
    }

    async fn update_profile(&self, _token: &Token, _profile: Profile) -> LtResult<ProfileWithEmail> {
        tracing::debug!("canned gateway ignores profile update");
        Ok(canned_profile())
    }

    async fn set_visible(&self, _token: &Token, _visible: bool) -> LtResult<ProfileWithEmail> {
        Ok(canned_profile())
    }

    async fn complete_tour(&self, _token: &Token, _tour_id: &str) -> LtResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> Token {
        Token::new("t3stt0k1")
    }

    #[tokio::test]
    async fn reads_and_writes_resolve_to_the_same_record() {
        let gateway = CannedGateway;
        let updated = gateway
            .update_profile(
                &token(),
                Profile {
                    name: "Someone Else".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(canned_profile(), gateway.get_profile(&token()).await.unwrap());
        assert_eq!(canned_profile(), updated);
        assert!(gateway.set_visible(&token(), false).await.unwrap().visible);
    }

    #[tokio::test]
    async fn list_is_empty_and_actions_do_nothing() {
        let gateway = CannedGateway;

        assert!(gateway.get_profiles(&token()).await.unwrap().is_empty());
        gateway.start_profile(&token()).await.unwrap();
        gateway.complete_tour(&token(), "dashboard").await.unwrap();
    }
}
