//! Portfolio content model
//!
//! Everything the page displays comes from a `Portfolio`, either the
//! built-in document or a user-supplied TOML file.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Built-in portfolio document
pub const BUILTIN_PORTFOLIO: &str = include_str!("../assets/portfolio.toml");

/// Navigable page sections, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionKind {
    /// All sections in the order they appear on the page
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Home,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Experience,
        SectionKind::Contact,
    ];

    /// Stable id used for section tracking
    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::Home => "home",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Experience => "experience",
            SectionKind::Contact => "contact",
        }
    }

    /// Navigation link text
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Home => "Home",
            SectionKind::About => "About",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Experience => "Experience",
            SectionKind::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Position in document order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|kind| kind == self)
            .unwrap_or_default()
    }

    /// Next section, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The person the portfolio is about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    /// Rotating headlines shown under the name
    #[serde(default)]
    pub taglines: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Short technology badges
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Live demo URL
    #[serde(default)]
    pub live: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub year: String,
    pub degree: String,
    pub institute: String,
    #[serde(default)]
    pub score: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub tagline: String,
}

/// A complete portfolio document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub footer: Footer,
}

impl Portfolio {
    /// The portfolio bundled with the binary
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(BUILTIN_PORTFOLIO)
    }

    /// Load and validate a portfolio from a TOML file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::parse(&raw)?;
        tracing::info!(path = %path.display(), "Loaded portfolio content");
        Ok(portfolio)
    }

    /// Parse and validate a portfolio from TOML text
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.owner.name.trim().is_empty() {
            return Err(ContentError::Invalid("owner name is empty".into()));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.name.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "skill with empty name (category {:?})",
                skill.category
            )));
        }
        if self.projects.iter().any(|p| p.title.trim().is_empty()) {
            return Err(ContentError::Invalid("project with empty title".into()));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.title.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate project title: {}",
                    project.title
                )));
            }
        }
        Ok(())
    }

    /// Skills grouped by category, preserving first-seen category order
    ///
    /// Uncategorized skills land under "Other".
    pub fn skills_by_category(&self) -> Vec<(&str, Vec<&Skill>)> {
        let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            let category = skill.category.as_deref().unwrap_or("Other");
            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, skills)) => skills.push(skill),
                None => groups.push((category, vec![skill])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_parses() {
        let portfolio = Portfolio::builtin().unwrap();
        assert!(!portfolio.owner.name.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.owner.taglines.is_empty());
    }

    #[test]
    fn test_section_ids_unique_and_round_trip() {
        let ids: HashSet<_> = SectionKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), SectionKind::ALL.len());

        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(SectionKind::from_id("blog"), None);
    }

    #[test]
    fn test_section_cycling_wraps() {
        assert_eq!(SectionKind::Home.next(), SectionKind::About);
        assert_eq!(SectionKind::Contact.next(), SectionKind::Home);
        assert_eq!(SectionKind::Home.prev(), SectionKind::Contact);
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let portfolio = Portfolio::parse("[owner]\nname = \"Sam\"\n").unwrap();
        assert_eq!(portfolio.owner.name, "Sam");
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.footer.tagline.is_empty());
    }

    #[test]
    fn test_rejects_blank_owner() {
        let err = Portfolio::parse("[owner]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_rejects_duplicate_project_titles() {
        let raw = r#"
[owner]
name = "Sam"

[[projects]]
title = "Site"
description = "one"

[[projects]]
title = "Site"
description = "two"
"#;
        let err = Portfolio::parse(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate project title"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Portfolio::parse("[owner\nname = 1").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_skills_grouped_in_order() {
        let raw = r#"
[owner]
name = "Sam"

[[skills]]
name = "Rust"
category = "Languages"

[[skills]]
name = "Git"

[[skills]]
name = "Go"
category = "Languages"
"#;
        let portfolio = Portfolio::parse(raw).unwrap();
        let groups = portfolio.skills_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Languages");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Other");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[owner]\nname = \"Robin\"").unwrap();

        let portfolio = Portfolio::load(file.path()).unwrap();
        assert_eq!(portfolio.owner.name, "Robin");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Portfolio::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }
}
