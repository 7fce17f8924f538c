//! `[site.schema]` section: facts used by structured data documents.

use serde::{Deserialize, Serialize};

/// Organization and software facts for JSON-LD output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaDefaults {
    /// Short organization description (the site description is used for
    /// the software document).
    pub organization_description: String,
    pub logo: String,
    pub founding_date: String,
    pub telephone: String,
    pub contact_type: String,
    pub available_language: String,

    pub application_category: String,
    pub operating_system: String,
    pub price: String,
    pub price_currency: String,
    pub offer_description: String,
    pub rating_value: String,
    pub rating_count: String,
    pub features: Vec<String>,
}

impl Default for SchemaDefaults {
    fn default() -> Self {
        Self {
            organization_description: "AI-powered productivity platform for teams".into(),
            logo: "/logo.png".into(),
            founding_date: "2024".into(),
            telephone: "+1-555-0123".into(),
            contact_type: "customer service".into(),
            available_language: "English".into(),
            application_category: "BusinessApplication".into(),
            operating_system: "Web".into(),
            price: "0".into(),
            price_currency: "USD".into(),
            offer_description: "Free forever plan available".into(),
            rating_value: "4.8".into(),
            rating_count: "1250".into(),
            features: [
                "Task Management",
                "Project Tracking",
                "Team Collaboration",
                "AI-Powered Automation",
                "Real-time Updates",
                "Mobile App",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}
