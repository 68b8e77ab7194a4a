use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A health-worker visit with a parent (and optionally an infant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: i64,
    pub parent_id: i64,
    #[serde(default)]
    pub infant_id: Option<i64>,
    pub visit_date: NaiveDate,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisit {
    pub parent_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infant_id: Option<i64>,
    pub visit_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An administered (or scheduled) vaccine dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    pub id: i64,
    pub infant_id: i64,
    pub vaccine_name: String,
    #[serde(default = "first_dose")]
    pub dose_number: u32,
    #[serde(default)]
    pub date_administered: Option<NaiveDate>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub administered_by: Option<String>,
}

fn first_dose() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVaccination {
    pub infant_id: i64,
    pub vaccine_name: String,
    pub dose_number: u32,
    pub date_administered: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<NaiveDate>,
}

/// Where a dose stands relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoseStatus {
    Administered,
    Due,
    Overdue,
}

impl Vaccination {
    pub fn status_on(&self, today: NaiveDate) -> DoseStatus {
        if self.date_administered.is_some() {
            return DoseStatus::Administered;
        }
        match self.next_due_date {
            Some(due) if due < today => DoseStatus::Overdue,
            _ => DoseStatus::Due,
        }
    }
}

/// Share of doses administered, in percent, rounded down. `None` when empty.
pub fn coverage_percent(vaccinations: &[Vaccination]) -> Option<u32> {
    if vaccinations.is_empty() {
        return None;
    }
    let done = vaccinations
        .iter()
        .filter(|v| v.date_administered.is_some())
        .count();
    Some((done * 100 / vaccinations.len()) as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Pending,
    Completed,
    Missed,
    Cancelled,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "Pending",
            ScheduleStatus::Completed => "Completed",
            ScheduleStatus::Missed => "Missed",
            ScheduleStatus::Cancelled => "Cancelled",
        }
    }
}

/// An upcoming appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub title: String,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub infant_id: Option<i64>,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub title: String,
    pub scheduled_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infant_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dose(administered: Option<NaiveDate>, due: Option<NaiveDate>) -> Vaccination {
        Vaccination {
            id: 1,
            infant_id: 7,
            vaccine_name: "BCG".to_string(),
            dose_number: 1,
            date_administered: administered,
            next_due_date: due,
            administered_by: None,
        }
    }

    #[test]
    fn dose_status_by_date() {
        let today = day(2025, 6, 10);
        assert_eq!(
            dose(Some(day(2025, 6, 1)), None).status_on(today),
            DoseStatus::Administered
        );
        assert_eq!(dose(None, Some(day(2025, 6, 9))).status_on(today), DoseStatus::Overdue);
        assert_eq!(dose(None, Some(day(2025, 6, 10))).status_on(today), DoseStatus::Due);
        assert_eq!(dose(None, None).status_on(today), DoseStatus::Due);
    }

    #[test]
    fn coverage_rounds_down_and_handles_empty() {
        assert_eq!(coverage_percent(&[]), None);
        let doses = vec![
            dose(Some(day(2025, 1, 1)), None),
            dose(None, None),
            dose(None, None),
        ];
        assert_eq!(coverage_percent(&doses), Some(33));
    }

    #[test]
    fn vaccination_defaults_dose_number() {
        let v: Vaccination =
            serde_json::from_str(r#"{"id":3,"infantId":7,"vaccineName":"OPV"}"#).unwrap();
        assert_eq!(v.dose_number, 1);
        assert_eq!(v.date_administered, None);
    }

    #[test]
    fn schedule_status_wire_format() {
        let s: Schedule = serde_json::from_str(
            r#"{"id":1,"title":"Postnatal check","scheduledDate":"2025-07-01","status":"MISSED"}"#,
        )
        .unwrap();
        assert_eq!(s.status, ScheduleStatus::Missed);
    }
}
