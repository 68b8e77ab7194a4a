use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A registered parent (usually the mother) of one or more infants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub facility_id: Option<i64>,
}

/// Payload for creating or updating a parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewParent {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<i64>,
}

impl Parent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match over name, phone and national id.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.full_name().to_lowercase().contains(&q)
            || self.phone_number.as_deref().is_some_and(|p| p.contains(&q))
            || self
                .national_id
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&q))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// An infant under follow-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infant {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Kilograms.
    #[serde(default)]
    pub birth_weight: Option<f64>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInfant {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_weight: Option<f64>,
    pub parent_id: i64,
}

impl Infant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Completed months of age on `today`; zero before the date of birth.
    pub fn age_in_months(&self, today: NaiveDate) -> u32 {
        if today < self.date_of_birth {
            return 0;
        }
        let years = today.year() - self.date_of_birth.year();
        let mut months = years * 12 + today.month() as i32 - self.date_of_birth.month() as i32;
        if today.day() < self.date_of_birth.day() {
            months -= 1;
        }
        months.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent() -> Parent {
        Parent {
            id: 1,
            first_name: "Grace".to_string(),
            last_name: "Mensah".to_string(),
            phone_number: Some("0244123456".to_string()),
            email: None,
            national_id: Some("GHA-7781".to_string()),
            date_of_birth: None,
            address: None,
            facility_id: Some(3),
        }
    }

    fn infant(dob: NaiveDate) -> Infant {
        Infant {
            id: 7,
            first_name: "Kofi".to_string(),
            last_name: "Mensah".to_string(),
            date_of_birth: dob,
            gender: Some(Gender::Male),
            birth_weight: Some(3.2),
            parent_id: Some(1),
        }
    }

    #[test]
    fn parent_deserializes_from_camel_case() {
        let json = r#"{"id":4,"firstName":"Ama","lastName":"Owusu","phoneNumber":"055","dateOfBirth":"1996-04-02"}"#;
        let p: Parent = serde_json::from_str(json).unwrap();
        assert_eq!(p.full_name(), "Ama Owusu");
        assert_eq!(p.date_of_birth, NaiveDate::from_ymd_opt(1996, 4, 2));
        assert_eq!(p.facility_id, None);
    }

    #[test]
    fn new_parent_omits_empty_optionals() {
        let body = NewParent {
            first_name: "Ama".to_string(),
            last_name: "Owusu".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"firstName": "Ama", "lastName": "Owusu"}));
    }

    #[test]
    fn parent_search_covers_name_phone_and_id() {
        let p = parent();
        assert!(p.matches("grace"));
        assert!(p.matches("MENSAH"));
        assert!(p.matches("0244"));
        assert!(p.matches("gha-77"));
        assert!(p.matches("  "));
        assert!(!p.matches("kwame"));
    }

    #[test]
    fn infant_age_counts_completed_months() {
        let i = infant(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(i.age_in_months(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()), 0);
        assert_eq!(i.age_in_months(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()), 0);
        assert_eq!(i.age_in_months(NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()), 1);
        assert_eq!(i.age_in_months(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()), 13);
        assert_eq!(i.age_in_months(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()), 0);
    }

    #[test]
    fn gender_uses_upper_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"FEMALE\"");
    }
}
