//! Page documents and their route handlers.
//!
//! Every page the site can show is served as a structured JSON document;
//! rendering is the consumer's concern. Document assembly is kept in pure
//! functions over the catalog so it is directly testable.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::pages::content;
use crate::signup::KNOWN_PATHS;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Document builders
// ────────────────────────────────────────────────────────────────────────────

/// The home document: all sections in their fixed vertical order.
pub fn home_document(catalog: &Catalog) -> Value {
    let prophecy: Vec<Value> = catalog
        .roadmap()
        .iter()
        .map(|entry| {
            json!({
                "era": entry.era,
                "title": entry.title,
                "description": entry.description,
                "status": entry.status,
                "glyph": content::roadmap_status_glyph(entry.status),
            })
        })
        .collect();

    let paths: Vec<Value> = catalog
        .paths()
        .iter()
        .map(|path| {
            json!({
                "id": path.id,
                "title": path.title,
                "description": path.description,
                "skills": path.tech_stack,
                "glyph": content::path_glyph(&path.id),
                "href": format!("/path/{}", path.id),
            })
        })
        .collect();

    let artifacts: Vec<Value> = catalog
        .artifacts()
        .iter()
        .map(|artifact| {
            // The deployed chatbot artifact doubles as the chamber entrance.
            let action = if artifact.id == "1" {
                json!({ "label": "Enter the Chamber", "href": "/chamber" })
            } else {
                json!({ "label": "Access Log" })
            };
            json!({
                "id": artifact.id,
                "title": artifact.title,
                "category": artifact.category,
                "status": artifact.status,
                "description": artifact.description,
                "glyph": content::artifact_status_glyph(artifact.status),
                "action": action,
            })
        })
        .collect();

    let shadow_systems: Vec<Value> = content::SHADOW_SYSTEMS
        .iter()
        .map(|(name, description, glyph)| {
            json!({ "name": name, "description": description, "glyph": glyph })
        })
        .collect();

    let council: Vec<Value> = catalog
        .members()
        .iter()
        .map(|member| {
            json!({
                "id": member.id,
                "name": member.name,
                "role": member.role,
                "codename": member.codename,
                "summary": member.summary,
                "glyph": content::member_glyph(&member.id),
                "href": format!("/member/{}", member.id),
            })
        })
        .collect();

    let social: Vec<Value> = content::SOCIAL_LINKS
        .iter()
        .map(|(platform, url)| json!({ "platform": platform, "url": url }))
        .collect();

    json!({
        "page": "home",
        "sections": [
            {
                "kind": "hero",
                "title": content::HERO_TITLE,
                "subtitle": content::HERO_SUBTITLE,
                "quote": content::HERO_QUOTE,
            },
            {
                "kind": "manifesto",
                "body": content::MANIFESTO_BODY,
                "quote": content::MANIFESTO_QUOTE,
            },
            {
                "kind": "prophecy",
                "tagline": content::PROPHECY_TAGLINE,
                "entries": prophecy,
                "footnote": content::PROPHECY_FOOTNOTE,
            },
            {
                "kind": "paths",
                "heading": content::PATHS_HEADING,
                "blurb": content::PATHS_BLURB,
                "paths": paths,
            },
            {
                "kind": "artifacts",
                "blurb": content::ARTIFACTS_BLURB,
                "artifacts": artifacts,
            },
            {
                "kind": "shadow_systems",
                "tools": shadow_systems,
            },
            {
                "kind": "council",
                "heading": content::COUNCIL_HEADING,
                "blurb": content::COUNCIL_BLURB,
                "members": council,
            },
            {
                "kind": "initiation",
                "heading": content::INITIATION_HEADING,
                "blurb": content::INITIATION_BLURB,
                "path_options": KNOWN_PATHS,
                "submit": "/api/v1/join",
            },
            {
                "kind": "footer",
                "title": content::HERO_TITLE,
                "tagline": content::FOOTER_TAGLINE,
                "social": social,
            },
        ],
    })
}

pub fn chamber_document() -> Value {
    json!({
        "page": "echo_chamber",
        "title": "Echo_Chamber",
        "status": content::CHAMBER_STATUS,
        "access_note": content::CHAMBER_ACCESS_NOTE,
        "input_placeholder": content::CHAMBER_INPUT_PLACEHOLDER,
        "back": { "label": content::RETURN_TO_NEXUS, "href": "/" },
        "session": {
            "create": "/api/v1/chat/sessions",
            "kind": "chamber",
        },
    })
}

pub fn path_document(catalog: &Catalog, path_id: &str) -> Option<Value> {
    let path = catalog.path(path_id)?;
    Some(json!({
        "page": "path_detail",
        "back": { "label": content::RETURN_TO_NEXUS, "href": "/" },
        "glyph": content::path_glyph(&path.id),
        "path": path,
        "guide": {
            "label": format!("{} Guide", path.title),
            "session": {
                "create": "/api/v1/chat/sessions",
                "kind": "path",
                "path_id": path.id,
            },
        },
        "initiation_href": format!("/?path={}#initiation", path.title.replace(' ', "%20")),
    }))
}

pub fn member_document(catalog: &Catalog, member_id: &str) -> Option<Value> {
    let member = catalog.member(member_id)?;
    Some(json!({
        "page": "member_detail",
        "back": { "label": "// RETURN_TO_BASE", "href": "/" },
        "glyph": content::member_glyph(&member.id),
        "member": member,
    }))
}

/// The stable not-found view: a title, a line of copy, and exactly one
/// affordance back to the home route.
pub fn not_found_document(title: &str, message: &str) -> Value {
    json!({
        "page": "not_found",
        "title": title,
        "message": message,
        "home": { "label": content::RETURN_TO_NEXUS, "href": "/" },
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Json<Value> {
    Json(home_document(&state.catalog))
}

/// GET /chamber
pub async fn handle_chamber() -> Json<Value> {
    Json(chamber_document())
}

/// GET /path/:path_id
pub async fn handle_path_detail(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    match path_document(&state.catalog, &path_id) {
        Some(document) => (StatusCode::OK, Json(document)),
        None => (
            StatusCode::NOT_FOUND,
            Json(not_found_document(
                content::PATH_NOT_FOUND_TITLE,
                content::PATH_NOT_FOUND_MESSAGE,
            )),
        ),
    }
}

/// GET /member/:member_id
pub async fn handle_member_detail(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    match member_document(&state.catalog, &member_id) {
        Some(document) => (StatusCode::OK, Json(document)),
        None => (
            StatusCode::NOT_FOUND,
            Json(not_found_document(
                content::MEMBER_NOT_FOUND_TITLE,
                content::MEMBER_NOT_FOUND_MESSAGE,
            )),
        ),
    }
}

/// Router fallback for unmatched paths: a dedicated 404 document with the
/// home affordance, rather than a redirect.
pub async fn handle_fallback() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(not_found_document(
            content::UNMATCHED_ROUTE_TITLE,
            content::UNMATCHED_ROUTE_MESSAGE,
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_sections_in_fixed_order() {
        let catalog = Catalog::new();
        let document = home_document(&catalog);
        let kinds: Vec<&str> = document["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["kind"].as_str().unwrap())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "hero",
                "manifesto",
                "prophecy",
                "paths",
                "artifacts",
                "shadow_systems",
                "council",
                "initiation",
                "footer"
            ]
        );
    }

    #[test]
    fn test_member_document_carries_name_and_role_verbatim() {
        let catalog = Catalog::new();
        let document = member_document(&catalog, "elara-x").unwrap();
        assert_eq!(document["member"]["name"], "Elara X.");
        assert_eq!(document["member"]["role"], "Hardware Interface");
        assert_eq!(document["glyph"], "radio");
    }

    #[test]
    fn test_missing_records_yield_none() {
        let catalog = Catalog::new();
        assert!(member_document(&catalog, "does-not-exist").is_none());
        assert!(path_document(&catalog, "does-not-exist").is_none());
    }

    #[test]
    fn test_not_found_document_offers_way_home() {
        let document = not_found_document("Path Not Found", "Gone.");
        assert_eq!(document["home"]["href"], "/");
        assert_eq!(document["title"], "Path Not Found");
    }

    #[test]
    fn test_path_document_links_guide_session() {
        let catalog = Catalog::new();
        let document = path_document(&catalog, "devops-warden").unwrap();
        assert_eq!(document["guide"]["session"]["path_id"], "devops-warden");
        assert_eq!(document["path"]["title"], "DevOps Warden");
        assert_eq!(
            document["initiation_href"],
            "/?path=DevOps%20Warden#initiation"
        );
    }

    #[test]
    fn test_chamber_artifact_links_to_chamber_page() {
        let catalog = Catalog::new();
        let document = home_document(&catalog);
        let artifacts = document["sections"][4]["artifacts"].as_array().unwrap();
        assert_eq!(artifacts[0]["action"]["href"], "/chamber");
        assert!(artifacts[1]["action"].get("href").is_none());
    }
}
