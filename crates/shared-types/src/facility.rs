use crate::Role;
use serde::{Deserialize, Serialize};

/// A health facility (clinic, hospital, health post).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub facility_type: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFacility {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Facility {
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.name.to_lowercase().contains(&q)
            || self.code.as_deref().is_some_and(|c| c.to_lowercase().contains(&q))
            || self
                .district
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&q))
    }
}

/// A portal account managed by super admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Raw role tag as stored by the API.
    pub role: String,
    #[serde(default)]
    pub facility_id: Option<i64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_search_matches_code_and_district() {
        let f = Facility {
            id: 1,
            name: "Korle Bu Polyclinic".to_string(),
            code: Some("KBP-01".to_string()),
            facility_type: Some("Clinic".to_string()),
            district: Some("Ablekuma South".to_string()),
            phone_number: None,
        };
        assert!(f.matches("korle"));
        assert!(f.matches("kbp"));
        assert!(f.matches("ablekuma"));
        assert!(!f.matches("tamale"));
    }

    #[test]
    fn user_role_is_parsed_leniently() {
        let u: User = serde_json::from_str(
            r#"{"id":2,"username":"kwame","email":"k@x.org","role":"ROLE_DATA_ANALYST"}"#,
        )
        .unwrap();
        assert!(u.active);
        assert_eq!(u.parsed_role(), Some(Role::DataAnalyst));
    }

    #[test]
    fn new_user_serializes_canonical_role() {
        let body = NewUser {
            username: "efua".to_string(),
            email: "efua@x.org".to_string(),
            password: "s3cret!".to_string(),
            role: Role::HealthWorker,
            facility_id: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["role"], "HEALTH_WORKER");
        assert!(json.get("facilityId").is_none());
    }
}
