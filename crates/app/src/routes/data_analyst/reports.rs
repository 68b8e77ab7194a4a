use crate::hooks::{fetched, use_api};
use crate::routes::common::columns;
use carelink_client::api;
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use shared_types::{Gender, Infant, Visit};
use shared_ui::{
    Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableEmpty, DataTableRow,
    PageHeader,
};
use std::collections::BTreeMap;

/// Visits per calendar month, newest month first.
fn visits_by_month(visits: &[Visit]) -> Vec<(String, usize)> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for visit in visits {
        *months
            .entry((visit.visit_date.year(), visit.visit_date.month()))
            .or_default() += 1;
    }
    months
        .into_iter()
        .rev()
        .filter_map(|((year, month), count)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some((first.format("%B %Y").to_string(), count))
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
struct BirthSummary {
    female: usize,
    male: usize,
    unrecorded: usize,
    low_birth_weight: usize,
    average_weight: Option<f64>,
}

/// Under 2.5 kg.
const LOW_BIRTH_WEIGHT_KG: f64 = 2.5;

fn birth_summary(infants: &[Infant]) -> BirthSummary {
    let mut summary = BirthSummary::default();
    let mut weights = Vec::new();
    for infant in infants {
        match infant.gender {
            Some(Gender::Female) => summary.female += 1,
            Some(Gender::Male) => summary.male += 1,
            None => summary.unrecorded += 1,
        }
        if let Some(kg) = infant.birth_weight {
            weights.push(kg);
            if kg < LOW_BIRTH_WEIGHT_KG {
                summary.low_birth_weight += 1;
            }
        }
    }
    if !weights.is_empty() {
        summary.average_weight = Some(weights.iter().sum::<f64>() / weights.len() as f64);
    }
    summary
}

#[component]
pub fn Reports() -> Element {
    let data = use_api(|client| async move {
        futures::try_join!(api::list_visits(&client), api::list_infants(&client))
    });

    rsx! {
        PageHeader { title: "Reports", subtitle: "Activity and birth outcomes" }
        {fetched(data, |(visits, infants)| {
            let months = visits_by_month(visits);
            let births = birth_summary(infants);
            let average = births
                .average_weight
                .map(|kg| format!("{kg:.2} kg"))
                .unwrap_or_else(|| "—".to_string());
            rsx! {
                div { class: "page-grid",
                    Card {
                        CardHeader { title: "Visits by month" }
                        CardContent {
                            DataTable { columns: columns(&["Month", "Visits"]),
                                if months.is_empty() {
                                    DataTableEmpty { colspan: 2, message: "No visits logged." }
                                }
                                for (month, count) in months {
                                    DataTableRow { key: "{month}",
                                        DataTableCell { "{month}" }
                                        DataTableCell { "{count}" }
                                    }
                                }
                            }
                        }
                    }
                    Card {
                        CardHeader { title: "Births", description: "Registered infants" }
                        CardContent {
                            dl { class: "detail-list",
                                dt { "Female" }
                                dd { "{births.female}" }
                                dt { "Male" }
                                dd { "{births.male}" }
                                dt { "Not recorded" }
                                dd { "{births.unrecorded}" }
                                dt { "Low birth weight" }
                                dd { "{births.low_birth_weight}" }
                                dt { "Average weight" }
                                dd { "{average}" }
                            }
                        }
                    }
                }
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn visit(y: i32, m: u32, d: u32) -> Visit {
        Visit {
            id: 1,
            parent_id: 1,
            infant_id: None,
            visit_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            purpose: None,
            notes: None,
        }
    }

    fn infant(gender: Option<Gender>, weight: Option<f64>) -> Infant {
        Infant {
            id: 1,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            gender,
            birth_weight: weight,
            parent_id: None,
        }
    }

    #[test]
    fn months_are_newest_first() {
        let visits = [visit(2024, 12, 5), visit(2025, 2, 1), visit(2025, 2, 20)];
        assert_eq!(
            visits_by_month(&visits),
            vec![("February 2025".to_string(), 2), ("December 2024".to_string(), 1)]
        );
    }

    #[test]
    fn birth_summary_counts_low_weight() {
        let infants = [
            infant(Some(Gender::Female), Some(2.0)),
            infant(Some(Gender::Male), Some(3.0)),
            infant(None, None),
        ];
        let summary = birth_summary(&infants);
        assert_eq!(summary.female, 1);
        assert_eq!(summary.unrecorded, 1);
        assert_eq!(summary.low_birth_weight, 1);
        assert_eq!(summary.average_weight, Some(2.5));
    }
}
