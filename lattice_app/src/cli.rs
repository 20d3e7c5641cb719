use lattice_core::error::{LtError, LtResult};
use lattice_core::{ProfileWithEmail, SkillCatalog, Token};
use lattice_profile::validation::Field;
use lattice_profile::{FieldEdit, ProfileForm, ProfileGateway, ProfileProvider, SubmitOutcome};

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Show your profile
    Show,

    /// List profiles suggested to you
    List,

    /// Begin onboarding
    Start,

    /// Change profile fields and save
    Edit(ProfileEdits),

    /// Show or hide your profile from other hackers
    Visibility {
        #[clap(long)]
        hidden: bool,
    },

    /// Mark a guided tour as completed
    CompleteTour { tour_id: String },
}

#[derive(clap::Args, Debug, Default)]
pub struct ProfileEdits {
    #[clap(long)]
    pub name: Option<String>,

    #[clap(long)]
    pub idea: Option<String>,

    #[clap(long)]
    pub discord: Option<String>,

    /// Replaces the selected skills. Repeat for several.
    #[clap(long = "skill")]
    pub skills: Vec<String>,

    /// Replaces the skills you are looking for. Repeat for several.
    #[clap(long = "looking-for")]
    pub looking_for: Vec<String>,
}

impl ProfileEdits {
    /// Field-change events in form order. Skill titles must exist in the catalog.
    pub fn field_edits(&self, catalog: &SkillCatalog) -> LtResult<Vec<FieldEdit>> {
        let mut edits = vec![];

        if let Some(name) = &self.name {
            edits.push(FieldEdit::Name(name.clone()));
        }
        if let Some(idea) = &self.idea {
            edits.push(FieldEdit::Idea(idea.clone()));
        }
        if !self.skills.is_empty() {
            edits.push(FieldEdit::Skills(catalog.resolve(&self.skills)?));
        }
        if !self.looking_for.is_empty() {
            edits.push(FieldEdit::LookingFor(catalog.resolve(&self.looking_for)?));
        }
        if let Some(discord) = &self.discord {
            edits.push(FieldEdit::Discord(discord.clone()));
        }

        Ok(edits)
    }
}

pub async fn run(
    deps: &impl ProfileGateway,
    token: &Token,
    catalog: &SkillCatalog,
    command: Command,
) -> LtResult<String> {
    match command {
        Command::Show => Ok(describe(&deps.get_profile(token).await?)),
        Command::List => {
            let profiles = deps.get_profiles(token).await?;
            if profiles.is_empty() {
                return Ok("No suggested profiles yet.".to_string());
            }
            Ok(profiles
                .iter()
                .map(|scored| format!("{:>5.1}  {}", scored.score, scored.profile.name))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Start => {
            deps.start_profile(token).await?;
            Ok("Onboarding started.".to_string())
        }
        Command::Edit(edits) => edit_profile(deps, token, catalog, &edits).await,
        Command::Visibility { hidden } => {
            let profile = deps.set_visible(token, !hidden).await?;
            Ok(format!(
                "Your profile is {}.",
                if profile.visible { "visible" } else { "hidden" }
            ))
        }
        Command::CompleteTour { tour_id } => {
            deps.complete_tour(token, &tour_id).await?;
            Ok(format!("Tour {tour_id} completed."))
        }
    }
}

async fn edit_profile(
    deps: &impl ProfileGateway,
    token: &Token,
    catalog: &SkillCatalog,
    edits: &ProfileEdits,
) -> LtResult<String> {
    let mut provider = ProfileProvider::default();
    provider.load(deps, token).await?;
    let profile = provider
        .profile()
        .ok_or_else(|| anyhow::anyhow!("profile missing after load"))?;

    let mut form = ProfileForm::from_profile(profile, catalog);
    for edit in edits.field_edits(catalog)? {
        form.edit(edit);
    }

    let mut lines = vec![];
    match form.submit(deps, token).await {
        SubmitOutcome::Saved(saved) => {
            lines.push("Profile saved.".to_string());
            lines.push(describe(&saved));
            provider.replace(saved);
            lines.push(format!("-> {}", form.dismiss_confirmation()));
        }
        SubmitOutcome::Failed(message) => lines.push(message),
        SubmitOutcome::Blocked(_) => {
            for field in Field::ALL {
                if form.error(field).is_some() {
                    lines.push(format!("{}: {}", field.key(), form.helper_text(field)));
                }
            }
            lines.extend(form.banner().map(str::to_string));
        }
    }

    Ok(lines.join("\n"))
}

fn describe(profile: &ProfileWithEmail) -> String {
    [
        format!("{} <{}>", profile.profile.name, profile.email),
        format!("idea: {}", profile.profile.idea),
        format!("skills: {}", profile.profile.skills.join(", ")),
        format!("looking for: {}", profile.profile.looking_for.join(", ")),
        format!("discord: @{}", profile.profile.discord),
        format!("visible: {}", profile.visible),
    ]
    .join("\n")
}

/// Unknown skills are a usage error rather than a service failure.
pub fn is_usage_error(error: &LtError) -> bool {
    matches!(error, LtError::UnknownSkill(_))
}
