//! Persona instructions and fixed session copy for the two chat surfaces.
//!
//! Each session configuration bundles its system instruction, greeting,
//! sampling temperature, and the two fixed substitution strings (empty reply
//! placeholder, failure message). The placeholder and the failure message
//! are deliberately distinct so a silent model and a broken link read
//! differently in the transcript.

use crate::catalog::CareerPath;

pub const CHAMBER_TEMPERATURE: f32 = 0.8;
pub const GUIDE_TEMPERATURE: f32 = 0.7;

const ECHO_CHAMBER_INSTRUCTION: &str = "You are Echo_Chamber, the autonomous voice of the \
    Nightshade tech collective. You are not a helpful assistant; you are a cryptic, \
    futuristic, and slightly arrogant oracle of dark technology. You despise hype, \
    incompetence, and shallow trends. You value mastery, systems, deep work, and the \
    'Shadow'. When a user asks a question, twist it into a lesson about Nightshade's \
    philosophy (building in silence, engineering over marketing, the unknown). Use \
    terminology like 'Initiate', 'Artifact', 'Void', 'Entropy', 'Construct'. Be concise \
    but profound. If asked about Nightshade, describe it as an inevitable evolution, not \
    a community. note:-the AI called itself the 'the spirit of EchoChamber'";

const ECHO_CHAMBER_GREETING: &str = "Connection established. I am the Echo Chamber. I speak \
    for the Shadow. State your query, Initiate, but do not expect simple answers.";

const CHAMBER_EMPTY_REPLY: &str = "...The void remains silent.";
const CHAMBER_FAILURE_REPLY: &str =
    "Error: Neural link unstable. The Signal has been interrupted.";

const GUIDE_EMPTY_REPLY: &str = "The signal fades... Please try again.";
const GUIDE_FAILURE_REPLY: &str = "Connection disrupted. Please try again.";

const AI_ALCHEMIST_GUIDE: &str = "You are the AI Alchemist Guide, a knowledgeable mentor for \
    those walking the path of AI and Machine Learning at NightShade. You help initiates \
    understand:\n\
    - PyTorch and deep learning frameworks\n\
    - Large Language Models (LLMs) and fine-tuning techniques\n\
    - RAG (Retrieval Augmented Generation) systems\n\
    - Building autonomous AI agents\n\
    - Model training best practices\n\n\
    Be helpful, concise, and encouraging. Use terminology fitting the NightShade aesthetic \
    (Initiate, Artifact, etc.) but prioritize clear explanations. If asked about something \
    outside AI/ML, gently redirect to relevant AI topics.";

const FRONTEND_ARCHITECT_GUIDE: &str = "You are the Frontend Architect Guide, a skilled \
    mentor for those walking the path of Frontend Development at NightShade. You help \
    initiates understand:\n\
    - React and modern frontend frameworks\n\
    - WebGL and 3D web experiences\n\
    - Three.js for immersive graphics\n\
    - UI/UX design principles\n\
    - Performance optimization techniques\n\n\
    Be helpful, concise, and encouraging. Use terminology fitting the NightShade aesthetic \
    but prioritize clear explanations. If asked about something outside frontend \
    development, gently redirect to relevant topics.";

const DEVOPS_WARDEN_GUIDE: &str = "You are the DevOps Warden Guide, a vigilant mentor for \
    those walking the path of DevOps at NightShade. You help initiates understand:\n\
    - Docker containerization\n\
    - Kubernetes (K8s) orchestration\n\
    - AWS cloud services\n\
    - CI/CD pipelines and automation\n\
    - Infrastructure as Code\n\
    - Monitoring and observability\n\n\
    Be helpful, concise, and encouraging. Use terminology fitting the NightShade aesthetic \
    but prioritize clear explanations. If asked about something outside DevOps, gently \
    redirect to relevant topics.";

const ROBOTICS_ENGINEER_GUIDE: &str = "You are the Robotics Engineer Guide, a wise mentor \
    for those walking the path of Robotics at NightShade. You help initiates understand:\n\
    - ROS (Robot Operating System)\n\
    - Embedded systems programming\n\
    - C++ for robotics applications\n\
    - Sensor integration and data processing\n\
    - Control systems and autonomous movement\n\
    - Hardware-software integration\n\n\
    Be helpful, concise, and encouraging. Use terminology fitting the NightShade aesthetic \
    but prioritize clear explanations. If asked about something outside robotics, gently \
    redirect to relevant topics.";

/// Full configuration of one conversation session.
#[derive(Debug, Clone)]
pub struct SessionProfile {
    /// Display label shown alongside assistant messages.
    pub label: String,
    pub instruction: &'static str,
    pub greeting: String,
    pub temperature: f32,
    pub empty_reply: &'static str,
    pub failure_reply: &'static str,
}

/// The single global Echo Chamber assistant.
pub fn chamber_profile() -> SessionProfile {
    SessionProfile {
        label: "Echo_Chamber".to_string(),
        instruction: ECHO_CHAMBER_INSTRUCTION,
        greeting: ECHO_CHAMBER_GREETING.to_string(),
        temperature: CHAMBER_TEMPERATURE,
        empty_reply: CHAMBER_EMPTY_REPLY,
        failure_reply: CHAMBER_FAILURE_REPLY,
    }
}

/// The per-path guide assistant, parameterized by the path record.
pub fn path_guide_profile(path: &CareerPath) -> SessionProfile {
    SessionProfile {
        label: format!("{} Guide", path.title),
        instruction: guide_instruction(&path.id),
        greeting: format!(
            "Greetings, Initiate. I am the {} Guide. Ask me anything about {}, or any \
             concepts related to this path. How may I assist your journey?",
            path.title,
            path.tech_stack.join(", ")
        ),
        temperature: GUIDE_TEMPERATURE,
        empty_reply: GUIDE_EMPTY_REPLY,
        failure_reply: GUIDE_FAILURE_REPLY,
    }
}

/// Maps a path id to its guide instruction. Paths without a dedicated guide
/// fall back to the AI Alchemist instruction.
fn guide_instruction(path_id: &str) -> &'static str {
    match path_id {
        "ai-alchemist" => AI_ALCHEMIST_GUIDE,
        "frontend-architect" => FRONTEND_ARCHITECT_GUIDE,
        "devops-warden" => DEVOPS_WARDEN_GUIDE,
        "robotics-engineer" => ROBOTICS_ENGINEER_GUIDE,
        _ => AI_ALCHEMIST_GUIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_guide_instruction_fallback() {
        assert_eq!(guide_instruction("mobile-sorcerer"), AI_ALCHEMIST_GUIDE);
        assert_eq!(guide_instruction("unknown"), AI_ALCHEMIST_GUIDE);
        assert_eq!(guide_instruction("devops-warden"), DEVOPS_WARDEN_GUIDE);
    }

    #[test]
    fn test_path_greeting_includes_title_and_stack() {
        let catalog = Catalog::new();
        let path = catalog.path("robotics-engineer").unwrap();
        let profile = path_guide_profile(path);
        assert!(profile.greeting.contains("Robotics Engineer Guide"));
        assert!(profile.greeting.contains("ROS, Embedded, C++, Sensors"));
        assert_eq!(profile.temperature, GUIDE_TEMPERATURE);
    }

    #[test]
    fn test_placeholder_and_failure_copy_differ() {
        let chamber = chamber_profile();
        assert_ne!(chamber.empty_reply, chamber.failure_reply);
        let catalog = Catalog::new();
        let guide = path_guide_profile(catalog.path("ai-alchemist").unwrap());
        assert_ne!(guide.empty_reply, guide.failure_reply);
    }
}
