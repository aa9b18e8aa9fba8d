//! Static site copy and presentation lookups.
//!
//! Glyph names are derived here, keyed by record id or status tag — they are
//! presentation, so they never live on the catalog records themselves.

use crate::catalog::{ArtifactStatus, RoadmapStatus};

pub const HERO_TITLE: &str = "NIGHTSHADE";
pub const HERO_SUBTITLE: &str = "We don't chase trends. We build systems.";
pub const HERO_QUOTE: &str = "NightShade is not a community, not a startup, not a club. It \
    is a long-term system for building intelligent artifacts.";

pub const MANIFESTO_BODY: &str = "We operate in the unseen. While others hype, we build. We \
    don't seek validation. We seek mastery.";
pub const MANIFESTO_QUOTE: &str =
    "NightShade is a system for shaping future engineers through real work.";

pub const PROPHECY_TAGLINE: &str = "The path from origin to ascension";
pub const PROPHECY_FOOTNOTE: &str =
    "The prophecy is not fixed. It evolves with every system we build.";

pub const PATHS_HEADING: &str = "CHOOSE YOUR PATH";
pub const PATHS_BLURB: &str = "The Order is divided into specialized disciplines. To \
    Initiate, you must walk one of these paths.";

pub const ARTIFACTS_BLURB: &str = "Case logs of our engineering conquests.";

pub const COUNCIL_HEADING: &str = "THE COUNCIL";
pub const COUNCIL_BLURB: &str = "// The Architects of the Void";

pub const INITIATION_HEADING: &str = "BEGIN INITIATION";
pub const INITIATION_BLURB: &str = "To join the Order, you must pass the Trials. Submit \
    your identity to receive your first challenge.";

pub const FOOTER_TAGLINE: &str = "Built in the Shadows";

pub const CHAMBER_STATUS: &str = "Live Link";
pub const CHAMBER_ACCESS_NOTE: &str = "System Access Level: Initiate // Monitoring Active";
pub const CHAMBER_INPUT_PLACEHOLDER: &str = "Enter command or query...";
pub const RETURN_TO_NEXUS: &str = "Return to Nexus";

pub const PATH_NOT_FOUND_TITLE: &str = "Path Not Found";
pub const PATH_NOT_FOUND_MESSAGE: &str = "The path you seek does not exist in the Order.";
pub const MEMBER_NOT_FOUND_TITLE: &str = "Member Not Found";
pub const MEMBER_NOT_FOUND_MESSAGE: &str = "The member you seek walks unseen.";
pub const UNMATCHED_ROUTE_TITLE: &str = "Signal Lost";
pub const UNMATCHED_ROUTE_MESSAGE: &str = "Nothing manifests at this address.";

/// Internal-tools teaser shown on the home page. Static — these systems are
/// not reachable through this API.
pub const SHADOW_SYSTEMS: [(&str, &str, &str); 3] = [
    (
        "Shadow Console",
        "Real-time project status, server health, and AI experiment logs.",
        "terminal",
    ),
    (
        "The Grimoire",
        "Our private knowledge base. Whitepapers, architectural patterns, and forbidden \
         code snippets.",
        "database",
    ),
    (
        "Summoning Board",
        "Where new ideas are proposed and voted upon by the Entities.",
        "code",
    ),
];

pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", "#"),
    ("Twitter", "#"),
    ("LinkedIn", "#"),
    ("Discord", "#"),
];

pub fn path_glyph(path_id: &str) -> &'static str {
    match path_id {
        "ai-alchemist" => "flask-conical",
        "frontend-architect" => "terminal",
        "devops-warden" => "network",
        "robotics-engineer" => "circuit-board",
        "mobile-sorcerer" => "smartphone",
        _ => "cpu",
    }
}

pub fn member_glyph(member_id: &str) -> &'static str {
    match member_id {
        "nitesh-badgujar" => "code-2",
        "atharva-jangale" => "cpu",
        "om-satote" => "shield-check",
        "elara-x" => "radio",
        "atharva-k" => "smartphone",
        _ => "user",
    }
}

pub fn artifact_status_glyph(status: ArtifactStatus) -> &'static str {
    match status {
        ArtifactStatus::Deployed => "check-circle",
        ArtifactStatus::InDevelopment => "beaker",
        ArtifactStatus::FailedExperiment => "alert-triangle",
    }
}

pub fn roadmap_status_glyph(status: RoadmapStatus) -> &'static str {
    match status {
        RoadmapStatus::Fulfilled => "check-circle-2",
        RoadmapStatus::InProgress => "clock",
        RoadmapStatus::Prophesied => "sparkles",
    }
}
