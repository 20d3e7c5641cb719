use lattice_core::error::LtResult;
use lattice_core::SkillCatalog;

const BUNDLED_CATALOG: &str = include_str!("../skills.json");

#[derive(clap::Parser)]
#[clap(name = "lattice", about = "Edit your Lattice hackathon profile")]
pub struct Config {
    /// Profile service host. Without it the canned gateway answers every call.
    #[clap(long, env)]
    pub api_host: Option<String>,

    /// Bearer token of the signed-in user.
    #[clap(long = "token", env = "LATTICE_TOKEN", default_value = "")]
    pub token: String,

    /// JSON file with the selectable skills, `[{"title": ...}]`.
    #[clap(long, env, parse(from_os_str))]
    pub skill_catalog: Option<std::path::PathBuf>,

    #[clap(subcommand)]
    pub command: crate::cli::Command,
}

impl Config {
    pub fn load_catalog(&self) -> anyhow::Result<SkillCatalog> {
        use anyhow::Context;

        match &self.skill_catalog {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("could not read {}", path.display()))?;
                Ok(SkillCatalog::from_json(&json)?)
            }
            None => Ok(bundled_catalog()?),
        }
    }
}

pub fn bundled_catalog() -> LtResult<SkillCatalog> {
    SkillCatalog::from_json(BUNDLED_CATALOG)
}
