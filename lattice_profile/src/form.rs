use crate::gateway::ProfileGateway;
use crate::validation::{self, Field, FieldError, FieldErrors};

use lattice_core::error::LtResult;
use lattice_core::skill::titles;
use lattice_core::{Profile, ProfileWithEmail, Skill, SkillCatalog, Token};

use std::collections::HashSet;

/// Where the user is sent after acknowledging a saved profile.
pub const PROFILE_PATH: &str = "/profile";

pub const FIX_ERRORS_TEXT: &str = "Please fix the above errors";

/// Current contents of the profile form, with skills as selected catalog entries.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub idea: String,
    pub skills: Vec<Skill>,
    pub looking_for: Vec<Skill>,
    pub discord: String,
}

impl FormValues {
    /// The update payload: selected skills are sent by title.
    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            idea: self.idea.clone(),
            skills: titles(&self.skills),
            looking_for: titles(&self.looking_for),
            discord: self.discord.clone(),
        }
    }
}

/// Form values for `profile`, with its skill titles mapped onto catalog entries.
pub fn reconcile(profile: &ProfileWithEmail, catalog: &SkillCatalog) -> FormValues {
    let values = FormValues {
        name: profile.profile.name.clone(),
        idea: profile.profile.idea.clone(),
        skills: catalog.select(&profile.profile.skills),
        looking_for: catalog.select(&profile.profile.looking_for),
        discord: profile.profile.discord.clone(),
    };
    tracing::debug!(
        skills = values.skills.len(),
        looking_for = values.looking_for.len(),
        "reconciled profile with skill catalog"
    );

    values
}

/// A single field-change event.
#[derive(Clone, Debug)]
pub enum FieldEdit {
    Name(String),
    Idea(String),
    Skills(Vec<Skill>),
    LookingFor(Vec<Skill>),
    Discord(String),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            Self::Name(_) => Field::Name,
            Self::Idea(_) => Field::Idea,
            Self::Skills(_) => Field::Skills,
            Self::LookingFor(_) => Field::LookingFor,
            Self::Discord(_) => Field::Discord,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Banner {
    FixErrors,
    SubmitFailed(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Self::FixErrors => FIX_ERRORS_TEXT,
            Self::SubmitFailed(message) => message,
        }
    }
}

#[derive(thiserror::Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitBlocked {
    #[error("a save is already in progress")]
    InFlight,

    #[error("the form has errors")]
    Invalid,

    #[error("no save is in progress")]
    NotInFlight,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Saved(ProfileWithEmail),
    Failed(String),
    Blocked(SubmitBlocked),
}

///
/// State of the profile editing form for one profile record.
///
/// Lives as long as the page showing it. All transitions are driven by discrete
/// events: edits, submit, the gateway's answer and dismissal of the confirmation.
///
#[derive(Debug, Default)]
pub struct ProfileForm {
    values: FormValues,
    errors: FieldErrors,
    banner: Option<Banner>,
    submitting: bool,
    confirmation_visible: bool,
    redirect: Option<&'static str>,
}

impl ProfileForm {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    pub fn from_profile(profile: &ProfileWithEmail, catalog: &SkillCatalog) -> Self {
        Self::new(reconcile(profile, catalog))
    }

    /// Replace all values, e.g. when the profile or the catalog changed.
    ///
    /// Field errors and the banner start over. The save in flight, the confirmation
    /// and a pending redirect belong to the page and are kept.
    pub fn reset(&mut self, values: FormValues) {
        *self = Self {
            submitting: self.submitting,
            confirmation_visible: self.confirmation_visible,
            redirect: self.redirect,
            ..Self::new(values)
        };
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Text under a field: its error if it has one, otherwise the hint.
    pub fn helper_text(&self, field: Field) -> String {
        match self.error(field) {
            Some(error) => error.to_string(),
            None => field.hint().to_string(),
        }
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_ref().map(Banner::text)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    /// Path the page should navigate to, once the confirmation was dismissed.
    pub fn redirect(&self) -> Option<&'static str> {
        self.redirect
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        let field = edit.field();
        match edit {
            FieldEdit::Name(name) => self.values.name = name,
            FieldEdit::Idea(idea) => self.values.idea = idea,
            FieldEdit::Skills(skills) => self.values.skills = distinct(skills),
            FieldEdit::LookingFor(skills) => self.values.looking_for = distinct(skills),
            FieldEdit::Discord(discord) => self.values.discord = discord,
        }

        match validation::validate_field(&self.values, field) {
            Some(error) => self.errors.insert(field, error),
            None => self.errors.remove(&field),
        };
        self.refresh_banner();
    }

    /// Validate everything and, if the form may be saved, enter the submitting state.
    ///
    /// Returns the payload for the gateway's update call.
    pub fn begin_submit(&mut self) -> Result<Profile, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.errors = validation::validate(&self.values);
        if matches!(self.banner, Some(Banner::SubmitFailed(_))) {
            self.banner = None;
        }
        self.refresh_banner();

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "profile form is invalid");
            return Err(SubmitBlocked::Invalid);
        }

        self.submitting = true;
        tracing::info!("saving profile");

        Ok(self.values.to_profile())
    }

    /// Leave the submitting state with the gateway's answer.
    ///
    /// An answer arriving while no save is in flight is ignored.
    pub fn finish_submit(&mut self, result: LtResult<ProfileWithEmail>) -> SubmitOutcome {
        if !self.submitting {
            tracing::warn!("ignoring profile save answer, no save in progress");
            return SubmitOutcome::Blocked(SubmitBlocked::NotInFlight);
        }
        self.submitting = false;

        match result {
            Ok(saved) => {
                self.confirmation_visible = true;
                SubmitOutcome::Saved(saved)
            }
            Err(error) => {
                let message = error.message();
                tracing::warn!(%message, "saving profile failed");
                self.banner = Some(Banner::SubmitFailed(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn submit(&mut self, deps: &impl ProfileGateway, token: &Token) -> SubmitOutcome {
        let profile = match self.begin_submit() {
            Ok(profile) => profile,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };

        let result = deps.update_profile(token, profile).await;
        self.finish_submit(result)
    }

    /// Hide the confirmation and return where to navigate.
    pub fn dismiss_confirmation(&mut self) -> &'static str {
        self.confirmation_visible = false;
        self.redirect = Some(PROFILE_PATH);
        PROFILE_PATH
    }

    fn refresh_banner(&mut self) {
        if !self.errors.is_empty() {
            self.banner = Some(Banner::FixErrors);
        } else if self.banner == Some(Banner::FixErrors) {
            self.banner = None;
        }
    }
}

fn distinct(skills: Vec<Skill>) -> Vec<Skill> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|skill| seen.insert(skill.title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::canned::{canned_profile, CannedGateway};
    use crate::gateway::ProfileGatewayMock;

    use assert_matches::*;
    use lattice_core::error::LtError;
    use unimock::*;

    fn token() -> Token {
        Token::new("t3stt0k1")
    }

    fn catalog() -> SkillCatalog {
        SkillCatalog::new(vec![
            Skill::new("Go"),
            Skill::new("Rust"),
            Skill::new("Design"),
        ])
    }

    fn valid_form() -> ProfileForm {
        ProfileForm::new(FormValues {
            name: "Grace".to_string(),
            idea: "A coronavirus map".to_string(),
            skills: vec![Skill::new("Rust")],
            looking_for: vec![Skill::new("Design")],
            discord: "grace#1906".to_string(),
        })
    }

    #[test]
    fn reconcile_preselects_catalog_skills_of_the_profile() {
        let catalog = SkillCatalog::new(vec![Skill::new("Go"), Skill::new("Rust")]);
        let mut profile = canned_profile();
        profile.profile.skills = vec!["Go".to_string()];
        profile.profile.looking_for = vec!["Rust".to_string(), "Elm".to_string()];

        let values = reconcile(&profile, &catalog);

        assert_eq!(vec![Skill::new("Go")], values.skills);
        assert_eq!(vec![Skill::new("Rust")], values.looking_for);
        assert_eq!(profile.profile.name, values.name);
    }

    #[test]
    fn reset_clears_errors_and_banner() {
        let mut form = valid_form();
        form.edit(FieldEdit::Name("".to_string()));
        assert_eq!(Some(FIX_ERRORS_TEXT), form.banner());

        form.reset(reconcile(&canned_profile(), &catalog()));

        assert!(form.errors().is_empty());
        assert_eq!(None, form.banner());
        assert_eq!("Lattice Hacker", form.values().name);
    }

    #[test]
    fn banner_follows_field_errors() {
        let mut form = valid_form();

        let eleven: Vec<Skill> = (0..11).map(|i| Skill::new(format!("s{i}"))).collect();
        form.edit(FieldEdit::Skills(eleven));
        assert_eq!(Some(FieldError::TooMany { max: 10 }), form.error(Field::Skills));
        assert_eq!("Please select no more than 10", form.helper_text(Field::Skills));
        assert_eq!(Some(FIX_ERRORS_TEXT), form.banner());

        form.edit(FieldEdit::Skills(vec![]));
        assert_eq!(Some(FieldError::NoneSelected), form.error(Field::Skills));
        assert_eq!(Some(FIX_ERRORS_TEXT), form.banner());

        form.edit(FieldEdit::Skills(vec![Skill::new("Go")]));
        assert_eq!(None, form.error(Field::Skills));
        assert_eq!(Field::Skills.hint(), form.helper_text(Field::Skills));
        assert_eq!(None, form.banner());
    }

    #[test]
    fn duplicate_selections_count_once() {
        let mut form = valid_form();
        form.edit(FieldEdit::LookingFor(vec![
            Skill::new("Go"),
            Skill::new("Go"),
            Skill::new("Rust"),
        ]));

        assert_eq!(
            vec![Skill::new("Go"), Skill::new("Rust")],
            form.values().looking_for
        );
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut form = ProfileForm::from_profile(&canned_profile(), &catalog());

        assert_matches!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(!form.is_submitting());
        assert_eq!(Some(FIX_ERRORS_TEXT), form.banner());
        assert_eq!(Some(FieldError::Required), form.error(Field::Discord));
    }

    #[test]
    fn payload_carries_skill_titles() {
        let mut form = valid_form();
        form.edit(FieldEdit::Skills(vec![Skill::new("Rust"), Skill::new("Go")]));

        let profile = form.begin_submit().unwrap();

        assert_eq!(vec!["Rust".to_string(), "Go".to_string()], profile.skills);
        assert_eq!(vec!["Design".to_string()], profile.looking_for);
        assert_eq!("grace#1906", profile.discord);
    }

    #[test]
    fn submitting_only_while_pending() {
        let mut form = valid_form();
        assert!(!form.is_submitting());

        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_matches!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        form.finish_submit(Err(LtError::rejected("nope")));
        assert!(!form.is_submitting());

        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        form.finish_submit(Ok(canned_profile()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn answer_without_save_in_flight_is_ignored() {
        let mut form = valid_form();

        assert_matches!(
            form.finish_submit(Ok(canned_profile())),
            SubmitOutcome::Blocked(SubmitBlocked::NotInFlight)
        );
        assert!(!form.confirmation_visible());

        assert_matches!(
            form.finish_submit(Err(LtError::rejected("late"))),
            SubmitOutcome::Blocked(SubmitBlocked::NotInFlight)
        );
        assert_eq!(None, form.banner());
    }

    #[tokio::test]
    async fn confirmation_survives_refresh_with_saved_profile() {
        let mut form = valid_form();
        let catalog = catalog();

        let saved = match form.submit(&CannedGateway, &token()).await {
            SubmitOutcome::Saved(saved) => saved,
            outcome => panic!("expected a saved profile, got {outcome:?}"),
        };
        form.reset(reconcile(&saved, &catalog));

        assert!(form.confirmation_visible());
        assert_eq!(saved.profile.name, form.values().name);
        assert_eq!("/profile", form.dismiss_confirmation());
        assert!(!form.confirmation_visible());

        form.reset(reconcile(&saved, &catalog));
        assert_eq!(Some("/profile"), form.redirect());
    }

    #[tokio::test]
    async fn successful_submit_shows_confirmation_then_navigates() {
        let deps = Unimock::new(
            ProfileGatewayMock::update_profile
                .next_call(matching!(_, _))
                .returns(Ok(canned_profile())),
        );
        let mut form = valid_form();

        assert_matches!(
            form.submit(&deps, &token()).await,
            SubmitOutcome::Saved(saved) if saved == canned_profile()
        );
        assert!(form.confirmation_visible());
        assert!(!form.is_submitting());
        assert_eq!(None, form.redirect());

        assert_eq!("/profile", form.dismiss_confirmation());
        assert!(!form.confirmation_visible());
        assert_eq!(Some("/profile"), form.redirect());
    }

    #[tokio::test]
    async fn rejected_submit_shows_message_as_banner() {
        let deps = Unimock::new(
            ProfileGatewayMock::update_profile
                .next_call(matching!(_, _))
                .returns(Err(LtError::rejected("network down"))),
        );
        let mut form = valid_form();

        assert_matches!(
            form.submit(&deps, &token()).await,
            SubmitOutcome::Failed(message) if message == "network down"
        );
        assert_eq!(Some("network down"), form.banner());
        assert!(!form.confirmation_visible());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn form_stays_usable_after_failure() {
        let deps = Unimock::new((
            ProfileGatewayMock::update_profile
                .next_call(matching!(_, _))
                .returns(Err(LtError::rejected("network down"))),
            ProfileGatewayMock::update_profile
                .next_call(matching!(_, _))
                .returns(Ok(canned_profile())),
        ));
        let mut form = valid_form();

        form.submit(&deps, &token()).await;
        assert_matches!(
            form.submit(&deps, &token()).await,
            SubmitOutcome::Saved(_)
        );
        assert_eq!(None, form.banner());
        assert!(form.confirmation_visible());
    }
}
