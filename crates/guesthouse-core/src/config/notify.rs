//! Notification forwarder configuration.
//!
//! Every secret here is optional. A missing value downgrades the
//! corresponding forwarder to a logged no-op; it never becomes an error.

use serde::{Deserialize, Serialize};

/// Settings for both outbound notification forwarders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// WhatsApp gateway settings.
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
    /// Push gateway settings.
    #[serde(default)]
    pub push: PushConfig,
    /// Capacity of the in-process dispatch queue.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            whatsapp: WhatsAppConfig::default(),
            push: PushConfig::default(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// WhatsApp-via-gateway settings (CallMeBot-style API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Owner phone number that receives booking alerts.
    #[serde(default)]
    pub owner_phone: Option<String>,
    /// Gateway API key.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Gateway endpoint.
    #[serde(default = "default_whatsapp_endpoint")]
    pub endpoint: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            owner_phone: None,
            api_key: None,
            endpoint: default_whatsapp_endpoint(),
        }
    }
}

/// FCM push settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// FCM server key.
    #[serde(default)]
    pub server_key: Option<String>,
    /// FCM send endpoint.
    #[serde(default = "default_push_endpoint")]
    pub endpoint: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            server_key: None,
            endpoint: default_push_endpoint(),
        }
    }
}

fn default_whatsapp_endpoint() -> String {
    "https://api.callmebot.com/whatsapp.php".to_string()
}

fn default_push_endpoint() -> String {
    "https://fcm.googleapis.com/fcm/send".to_string()
}

fn default_queue_capacity() -> usize {
    64
}
