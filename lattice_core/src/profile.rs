/// The user-editable part of a profile, as sent to the backend on update.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub idea: String,
    pub skills: Vec<String>,
    pub looking_for: Vec<String>,
    pub discord: String,
}

/// A stored profile together with its account and onboarding state.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWithEmail {
    pub id: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
    pub visible: bool,
    pub started: bool,
    pub completed: bool,
}

/// Another user's profile as ranked by the matching service.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct ScoredProfile {
    pub id: String,
    #[serde(flatten)]
    pub profile: Profile,
    pub score: f64,
}
