//! Entity catalog — the immutable, in-memory tables behind the site.
//!
//! Constructed once at startup (`Catalog::new`) and held in `AppState`
//! behind an `Arc`; every other module only reads by reference. Lookup is
//! exact string-key match — no fuzzy matching, no case normalization — and
//! cannot fail except by absence.

mod data;

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

/// A career path ("Choose Your Path" discipline) with its detail-page fields.
#[derive(Debug, Clone, Serialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub focus: Vec<String>,
    pub tech_stack: Vec<String>,
    pub core_docs: Vec<DocLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocLink {
    pub name: String,
    pub url: String,
}

/// A council member dossier, keyed by the `/member/:member_id` route param.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub codename: String,
    pub summary: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub projects: Vec<MemberProject>,
    pub stats: Vec<MemberStat>,
    pub location: String,
    pub joined: String,
    pub email: String,
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberProject {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// One era on the prophecy timeline.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapEntry {
    pub era: String,
    pub title: String,
    pub description: String,
    pub status: RoadmapStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoadmapStatus {
    Fulfilled,
    #[serde(rename = "In Progress")]
    InProgress,
    Prophesied,
}

/// An engineering artifact shown in the case log.
#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    pub id: String,
    pub title: String,
    pub category: ArtifactCategory,
    pub status: ArtifactStatus,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtifactCategory {
    #[serde(rename = "Living Demo")]
    LivingDemo,
    Research,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtifactStatus {
    Deployed,
    #[serde(rename = "In Development")]
    InDevelopment,
    #[serde(rename = "Failed Experiment")]
    FailedExperiment,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// All static tables, built once and never mutated.
pub struct Catalog {
    paths: Vec<CareerPath>,
    members: Vec<TeamMember>,
    roadmap: Vec<RoadmapEntry>,
    artifacts: Vec<Artifact>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            paths: data::career_paths(),
            members: data::team_members(),
            roadmap: data::roadmap(),
            artifacts: data::artifacts(),
        }
    }

    /// Exact-match lookup against the career path table.
    pub fn path(&self, id: &str) -> Option<&CareerPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// Exact-match lookup against the team member table.
    pub fn member(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn paths(&self) -> &[CareerPath] {
        &self.paths
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn roadmap(&self) -> &[RoadmapEntry] {
        &self.roadmap
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
