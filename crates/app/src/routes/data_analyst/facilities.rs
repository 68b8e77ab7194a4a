use crate::format_helpers::or_dash;
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, SearchBox};
use carelink_client::api;
use dioxus::prelude::*;
use shared_types::Facility;
use shared_ui::{DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader};

/// Read-only facility listing for analysts.
#[component]
pub fn FacilityDirectory() -> Element {
    let facilities = use_api(|client| async move { api::list_facilities(&client).await });
    let query = use_signal(String::new);

    rsx! {
        PageHeader { title: "Facilities", subtitle: "Health facilities in the programme" }
        SearchBox { query, placeholder: "Name, code or district" }
        {fetched(facilities, |facilities| {
            let q = query();
            let visible: Vec<&Facility> = facilities.iter().filter(|f| f.matches(&q)).collect();
            rsx! {
                DataTable { columns: columns(&["Name", "Code", "Type", "District", "Phone"]),
                    if visible.is_empty() {
                        DataTableEmpty { colspan: 5, message: "No facilities match your search." }
                    }
                    for facility in visible {
                        DataTableRow { key: "{facility.id}",
                            DataTableCell { "{facility.name}" }
                            DataTableCell { {or_dash(facility.code.as_deref())} }
                            DataTableCell { {or_dash(facility.facility_type.as_deref())} }
                            DataTableCell { {or_dash(facility.district.as_deref())} }
                            DataTableCell { {or_dash(facility.phone_number.as_deref())} }
                        }
                    }
                }
            }
        })}
    }
}
