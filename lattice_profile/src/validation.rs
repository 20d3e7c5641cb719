use crate::form::FormValues;

use std::collections::BTreeMap;

pub const MAX_IDEA_CHARS: usize = 250;
pub const MAX_SKILLS: usize = 10;
pub const MAX_LOOKING_FOR: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Field {
    Name,
    Idea,
    Skills,
    LookingFor,
    Discord,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Idea,
        Field::Skills,
        Field::LookingFor,
        Field::Discord,
    ];

    /// Name of the field in the JSON payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Idea => "idea",
            Self::Skills => "skills",
            Self::LookingFor => "lookingFor",
            Self::Discord => "discord",
        }
    }

    /// Helper text shown under the field while it has no error.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Name => "Every hacker needs a public identity.",
            Self::Idea => "Share your innovative idea. It's fine if you don't have one.",
            Self::Skills => "What are you good at?",
            Self::LookingFor => "Which skills should your teammates bring?",
            Self::Discord => {
                "Please provide your discord tag. Your matches will use this to contact you."
            }
        }
    }
}

#[derive(thiserror::Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Please write no more than {max} characters")]
    TooLong { max: usize },

    #[error("Please select at least one")]
    NoneSelected,

    #[error("Please select no more than {max}")]
    TooMany { max: usize },
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

struct Rule {
    field: Field,
    holds: fn(&FormValues) -> bool,
    error: FieldError,
}

// Rules of a field are checked in order, the first one failing wins.
const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        holds: |values| !values.name.is_empty(),
        error: FieldError::Required,
    },
    // No required rule for the idea: an empty idea is fine.
    Rule {
        field: Field::Idea,
        holds: |values| values.idea.chars().count() <= MAX_IDEA_CHARS,
        error: FieldError::TooLong {
            max: MAX_IDEA_CHARS,
        },
    },
    Rule {
        field: Field::Skills,
        holds: |values| !values.skills.is_empty(),
        error: FieldError::NoneSelected,
    },
    Rule {
        field: Field::Skills,
        holds: |values| values.skills.len() <= MAX_SKILLS,
        error: FieldError::TooMany { max: MAX_SKILLS },
    },
    Rule {
        field: Field::LookingFor,
        holds: |values| !values.looking_for.is_empty(),
        error: FieldError::NoneSelected,
    },
    Rule {
        field: Field::LookingFor,
        holds: |values| values.looking_for.len() <= MAX_LOOKING_FOR,
        error: FieldError::TooMany {
            max: MAX_LOOKING_FOR,
        },
    },
    Rule {
        field: Field::Discord,
        holds: |values| !values.discord.is_empty(),
        error: FieldError::Required,
    },
];

pub fn validate_field(values: &FormValues, field: Field) -> Option<FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !(rule.holds)(values))
        .map(|rule| rule.error)
}

pub fn validate(values: &FormValues) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(values, field).map(|error| (field, error)))
        .collect()
}
