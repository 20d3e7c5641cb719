use crate::error::{LtError, LtResult};

/// A tagged capability or interest. Two skills are the same skill when their titles match.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Skill {
    pub title: String,
}

impl Skill {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// The skills a user can choose from, in display order.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, Eq, PartialEq)]
#[serde(transparent)]
pub struct SkillCatalog(Vec<Skill>);

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self(skills)
    }

    pub fn from_json(json: &str) -> LtResult<Self> {
        serde_json::from_str(json).map_err(LtError::InvalidCatalog)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.0
    }

    pub fn find(&self, title: &str) -> Option<&Skill> {
        self.0.iter().find(|skill| skill.title == title)
    }

    /// Catalog entries whose title appears in `titles`, in catalog order.
    ///
    /// Titles the catalog does not know about are dropped.
    pub fn select<S: AsRef<str>>(&self, titles: &[S]) -> Vec<Skill> {
        self.0
            .iter()
            .filter(|skill| titles.iter().any(|title| title.as_ref() == skill.title))
            .cloned()
            .collect()
    }

    /// Look up every title, in the order given, failing on the first unknown one.
    pub fn resolve<S: AsRef<str>>(&self, titles: &[S]) -> LtResult<Vec<Skill>> {
        titles
            .iter()
            .map(|title| {
                self.find(title.as_ref())
                    .cloned()
                    .ok_or_else(|| LtError::UnknownSkill(title.as_ref().to_string()))
            })
            .collect()
    }
}

/// Titles of the given skills, preserving order.
pub fn titles(skills: &[Skill]) -> Vec<String> {
    skills.iter().map(|skill| skill.title.clone()).collect()
}
