use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for candidate records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    /// Allocate a fresh identifier. Identifiers are opaque and never reused,
    /// including across sessions rehydrated from storage.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate record as held in the canonical collection and persisted blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
    pub experience: Experience,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    pub skills: Vec<String>,
}

impl Candidate {
    /// Case-insensitive substring match over name, email, and phone.
    /// The term must already be lowercased by the caller.
    pub(crate) fn matches_search(&self, lowercased_term: &str) -> bool {
        self.name.to_lowercase().contains(lowercased_term)
            || self.email.to_lowercase().contains(lowercased_term)
            || self.phone.to_lowercase().contains(lowercased_term)
    }
}

/// Candidate fields excluding the identifier; the input to create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
    pub experience: Experience,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    pub skills: Vec<String>,
}

impl CandidateDraft {
    /// Map an empty or whitespace-only qualification to `None` so the
    /// optional field never carries an empty-string sentinel.
    pub fn normalized(mut self) -> Self {
        if matches!(&self.qualification, Some(text) if text.trim().is_empty()) {
            self.qualification = None;
        }
        self
    }

    pub fn into_candidate(self, id: CandidateId) -> Candidate {
        Candidate {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            gender: self.gender,
            experience: self.experience,
            qualification: self.qualification,
            skills: self.skills,
        }
    }
}

/// Fixed gender enumeration used by candidate records and the gender facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.label() == value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed enumeration of experience duration labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "1 Year")]
    OneYear,
    #[serde(rename = "2 Years")]
    TwoYears,
    #[serde(rename = "3 Years")]
    ThreeYears,
    #[serde(rename = "4 Years")]
    FourYears,
    #[serde(rename = "5 Years")]
    FiveYears,
    #[serde(rename = "6 Years")]
    SixYears,
    #[serde(rename = "7 Years")]
    SevenYears,
    #[serde(rename = "8 Years")]
    EightYears,
    #[serde(rename = "9 Years")]
    NineYears,
    #[serde(rename = "10+ Years")]
    TenPlusYears,
}

impl Experience {
    pub const ALL: [Experience; 10] = [
        Experience::OneYear,
        Experience::TwoYears,
        Experience::ThreeYears,
        Experience::FourYears,
        Experience::FiveYears,
        Experience::SixYears,
        Experience::SevenYears,
        Experience::EightYears,
        Experience::NineYears,
        Experience::TenPlusYears,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Experience::OneYear => "1 Year",
            Experience::TwoYears => "2 Years",
            Experience::ThreeYears => "3 Years",
            Experience::FourYears => "4 Years",
            Experience::FiveYears => "5 Years",
            Experience::SixYears => "6 Years",
            Experience::SevenYears => "7 Years",
            Experience::EightYears => "8 Years",
            Experience::NineYears => "9 Years",
            Experience::TenPlusYears => "10+ Years",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|experience| experience.label() == value)
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reference skill catalog offered to presentation layers. Candidate skill
/// sets are drawn from, but not validated against, this list.
pub const SKILL_CATALOG: [&str; 20] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Python",
    "Java",
    "C#",
    "PHP",
    "HTML",
    "CSS",
    "SQL",
    "MongoDB",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "Redux",
    "GraphQL",
];

/// Active filter values for the three facets. An empty facet places no
/// constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub genders: Vec<Gender>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.genders.is_empty() && self.experience.is_empty() && self.skills.is_empty()
    }

    /// AND across facets; within a facet, gender and experience match on
    /// membership and skills match when at least one selected skill is held.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if !self.genders.is_empty() && !self.genders.contains(&candidate.gender) {
            return false;
        }

        if !self.experience.is_empty() && !self.experience.contains(&candidate.experience) {
            return false;
        }

        if !self.skills.is_empty()
            && !self
                .skills
                .iter()
                .any(|skill| candidate.skills.contains(skill))
        {
            return false;
        }

        true
    }

    pub fn apply(&mut self, selection: FilterSelection) {
        match selection {
            FilterSelection::Genders(values) => self.genders = values,
            FilterSelection::Experience(values) => self.experience = values,
            FilterSelection::Skills(values) => self.skills = values,
        }
    }

    pub fn clear(&mut self) {
        self.genders.clear();
        self.experience.clear();
        self.skills.clear();
    }
}

/// One facet's replacement values, used by `CandidateStore::set_filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    Genders(Vec<Gender>),
    Experience(Vec<Experience>),
    Skills(Vec<String>),
}
