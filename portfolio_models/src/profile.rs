use serde::{Deserialize, Serialize};
use url::Url;

/// The static profile content served by the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github: Option<Url>,
    pub demo: Option<Url>,
    pub highlights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}
