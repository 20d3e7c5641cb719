pub mod error;
pub mod profile;
pub mod skill;

pub use profile::{Profile, ProfileWithEmail, ScoredProfile};
pub use skill::{Skill, SkillCatalog};

///
/// Bearer credential passed through to the profile service.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        self.0.as_str()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.token()
    }
}
