//! Initiation signup flow.
//!
//! One submission = two sequential deliveries: the submitter's welcome email
//! first, then the operator notification. Both must succeed for the
//! submission to count; there is no partial-success state, and a failure
//! leaves the caller free to retry with the same form.

pub mod handlers;

use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::mailer::{Deliverer, DeliveryError};

/// The four path names a submitter can choose on the form. Anything else
/// falls back to the generic welcome text.
pub const KNOWN_PATHS: [&str; 4] = [
    "AI Alchemist",
    "Frontend Architect",
    "DevOps Warden",
    "Robotics Engineer",
];

#[derive(Debug, Clone, Deserialize)]
pub struct JoinForm {
    /// Full name.
    pub identity: String,
    /// Email address.
    pub comm: String,
    /// University / organization.
    pub origin: String,
    /// Chosen path title, e.g. "AI Alchemist".
    pub path: String,
}

impl JoinForm {
    /// Field-level validation. The delivery layer does not re-validate.
    pub fn validate(&self) -> Result<(), String> {
        if self.identity.trim().is_empty() {
            return Err("identity cannot be empty".to_string());
        }
        if self.origin.trim().is_empty() {
            return Err("origin cannot be empty".to_string());
        }
        if !is_email_shaped(&self.comm) {
            return Err("comm must be a valid email address".to_string());
        }
        Ok(())
    }
}

fn is_email_shaped(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Selects the welcome text by exact match on the chosen path name.
pub fn welcome_message(name: &str, path: &str) -> String {
    match path {
        "AI Alchemist" => format!(
            "Welcome, {name}. You have chosen the path of the AI Alchemist. Your journey \
             into the depths of machine intelligence begins now. Master the arcane arts of \
             neural networks and transform data into wisdom."
        ),
        "Frontend Architect" => format!(
            "Welcome, {name}. You have chosen the path of the Frontend Architect. Your \
             destiny is to craft digital realms that captivate and inspire. Build \
             interfaces that bridge the gap between human and machine."
        ),
        "DevOps Warden" => format!(
            "Welcome, {name}. You have chosen the path of the DevOps Warden. You shall \
             guard the sacred pipelines and ensure the eternal flow of deployment. \
             Infrastructure bends to your will."
        ),
        "Robotics Engineer" => format!(
            "Welcome, {name}. You have chosen the path of the Robotics Engineer. Breathe \
             life into metal and code. The physical and digital worlds merge under your \
             command."
        ),
        _ => format!("Welcome, {name}. Your journey with NightShade begins now."),
    }
}

/// Performs the two deliveries in order: submitter first, then operator.
/// Returns on the first failure; the operator email is never attempted when
/// the submitter delivery fails.
pub async fn submit_join(
    deliverer: &dyn Deliverer,
    config: &Config,
    form: &JoinForm,
) -> Result<(), DeliveryError> {
    let welcome = welcome_message(&form.identity, &form.path);

    deliverer
        .send(
            &config.emailjs_user_template_id,
            json!({
                "to_email": form.comm,
                "to_name": form.identity,
                "welcome_message": welcome,
                "chosen_path": form.path,
                "community_link": config.community_link,
            }),
        )
        .await?;

    deliverer
        .send(
            &config.emailjs_admin_template_id,
            json!({
                "user_name": form.identity,
                "user_email": form.comm,
                "user_origin": form.origin,
                "user_path": form.path,
                "submission_date": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            }),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    fn test_config() -> Config {
        Config {
            gemini_api_key: None,
            emailjs_service_id: "service".to_string(),
            emailjs_user_template_id: "tpl_user".to_string(),
            emailjs_admin_template_id: "tpl_admin".to_string(),
            emailjs_public_key: "key".to_string(),
            community_link: "https://discord.gg/nightshade".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn valid_form() -> JoinForm {
        JoinForm {
            identity: "Test Initiate".to_string(),
            comm: "initiate@example.com".to_string(),
            origin: "Some University".to_string(),
            path: "AI Alchemist".to_string(),
        }
    }

    /// Records the template ids it was asked to send, failing from the
    /// configured call index onward.
    struct RecordingDeliverer {
        sent: Mutex<Vec<String>>,
        fail_from_call: Option<usize>,
    }

    impl RecordingDeliverer {
        fn new(fail_from_call: Option<usize>) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_from_call,
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Deliverer for RecordingDeliverer {
        async fn send(&self, template_id: &str, _params: Value) -> Result<(), DeliveryError> {
            let mut sent = self.sent.lock().unwrap();
            let call_index = sent.len();
            sent.push(template_id.to_string());
            if matches!(self.fail_from_call, Some(n) if call_index >= n) {
                return Err(DeliveryError::Api {
                    status: 400,
                    message: "rejected".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_welcome_message_known_paths() {
        for path in KNOWN_PATHS {
            let message = welcome_message("Nyx", path);
            assert!(message.contains("Nyx"));
            assert!(message.contains(path), "missing path name in: {message}");
        }
    }

    #[test]
    fn test_welcome_message_falls_back_to_generic() {
        let message = welcome_message("Nyx", "Mobile Sorcerer");
        assert_eq!(
            message,
            "Welcome, Nyx. Your journey with NightShade begins now."
        );
        // Exact match only — close variants fall back too.
        assert_eq!(
            welcome_message("Nyx", "ai alchemist"),
            "Welcome, Nyx. Your journey with NightShade begins now."
        );
    }

    #[test]
    fn test_validation() {
        assert!(valid_form().validate().is_ok());

        let mut form = valid_form();
        form.identity = "  ".to_string();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.comm = "not-an-email".to_string();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.comm = "user@localhost".to_string();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.origin = String::new();
        assert!(form.validate().is_err());
    }

    #[tokio::test]
    async fn test_submitter_delivery_precedes_operator() {
        let deliverer = RecordingDeliverer::new(None);
        submit_join(&deliverer, &test_config(), &valid_form())
            .await
            .unwrap();
        assert_eq!(deliverer.sent(), vec!["tpl_user", "tpl_admin"]);
    }

    #[tokio::test]
    async fn test_operator_failure_fails_whole_submission() {
        let deliverer = RecordingDeliverer::new(Some(1));
        let result = submit_join(&deliverer, &test_config(), &valid_form()).await;
        assert!(result.is_err());
        // Submitter email went out first; the failure is still total.
        assert_eq!(deliverer.sent(), vec!["tpl_user", "tpl_admin"]);
    }

    #[tokio::test]
    async fn test_submitter_failure_skips_operator() {
        let deliverer = RecordingDeliverer::new(Some(0));
        let result = submit_join(&deliverer, &test_config(), &valid_form()).await;
        assert!(result.is_err());
        assert_eq!(deliverer.sent(), vec!["tpl_user"]);
    }
}
