use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, optional, parse_id, SearchBox};
use carelink_client::{api, ApiClient};
use dioxus::prelude::*;
use shared_types::{Facility, NewUser, Role, User, ALL_ROLES};
use shared_ui::{
    Badge, BadgeTone, Button, ButtonVariant, Card, CardContent, CardHeader, DataTable,
    DataTableCell, DataTableEmpty, DataTableRow, Form, FormAlert, PageHeader, SelectField,
    TextField,
};
use std::collections::HashMap;

fn user_matches(user: &User, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    q.is_empty()
        || user.username.to_lowercase().contains(&q)
        || user.email.to_lowercase().contains(&q)
}

/// Display label for a stored role tag. Unknown tags are shown as sent.
fn role_label(user: &User) -> String {
    user.parsed_role()
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| user.role.clone())
}

#[component]
pub fn UserAdmin() -> Element {
    let mut data = use_api(|client| async move {
        futures::try_join!(api::list_users(&client), api::list_facilities(&client))
    });
    let query = use_signal(String::new);

    rsx! {
        PageHeader { title: "Users", subtitle: "Portal accounts and their roles" }
        {fetched(data, |(users, facilities)| {
            let q = query();
            let visible: Vec<&User> = users.iter().filter(|u| user_matches(u, &q)).collect();
            let facility_names: HashMap<i64, String> =
                facilities.iter().map(|f| (f.id, f.name.clone())).collect();
            rsx! {
                div { class: "page-grid",
                    div {
                        SearchBox { query, placeholder: "Username or email" }
                        DataTable { columns: columns(&["Username", "Email", "Role", "Facility", "Status", ""]),
                            if visible.is_empty() {
                                DataTableEmpty { colspan: 6, message: "No users match your search." }
                            }
                            for user in visible {
                                UserRow {
                                    key: "{user.id}",
                                    facility: user
                                        .facility_id
                                        .and_then(|id| facility_names.get(&id).cloned())
                                        .unwrap_or_else(|| "—".to_string()),
                                    user: user.clone(),
                                    on_deleted: move |_| data.restart(),
                                }
                            }
                        }
                    }
                    NewAccount { facilities: facilities.clone(), on_created: move |_| data.restart() }
                }
            }
        })}
    }
}

#[component]
fn UserRow(user: User, facility: String, on_deleted: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut deleting = use_signal(|| false);
    let id = user.id;

    let delete = move |_: MouseEvent| {
        let client = client.clone();
        deleting.set(true);
        spawn(async move {
            match api::delete_user(&client, id).await {
                Ok(()) => {
                    tracing::info!(user_id = id, "user deleted");
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::warn!(user_id = id, error = %e, "could not delete user");
                    deleting.set(false);
                }
            }
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{user.username}" }
            DataTableCell { "{user.email}" }
            DataTableCell { {role_label(&user)} }
            DataTableCell { "{facility}" }
            DataTableCell {
                if user.active {
                    Badge { tone: BadgeTone::Success, "Active" }
                } else {
                    Badge { tone: BadgeTone::Neutral, "Disabled" }
                }
            }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    loading: deleting(),
                    onclick: delete,
                    "Delete"
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AccountDraft {
    username: String,
    email: String,
    password: String,
    role: String,
    facility_id: String,
}

impl Default for AccountDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::HealthWorker.as_str().to_string(),
            facility_id: String::new(),
        }
    }
}

impl AccountDraft {
    fn validate(&self) -> Result<NewUser, String> {
        let username = optional(&self.username).ok_or("Username is required.")?;
        let email = optional(&self.email).ok_or("Email is required.")?;
        if self.password.is_empty() {
            return Err("Set a temporary password.".to_string());
        }
        let role = Role::parse(&self.role).ok_or("Choose a role.")?;
        Ok(NewUser {
            username,
            email,
            password: self.password.clone(),
            role,
            facility_id: parse_id(&self.facility_id),
        })
    }
}

#[component]
fn NewAccount(facilities: Vec<Facility>, on_created: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut draft = use_signal(AccountDraft::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        let body = match draft.read().validate() {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match api::create_user(&client, &body).await {
                Ok(user) => {
                    tracing::info!(user_id = user.id, role = %body.role, "user created");
                    draft.set(AccountDraft::default());
                    on_created.call(());
                }
                Err(e) => error.set(Some(e.friendly_message())),
            }
            submitting.set(false);
        });
    };

    let roles: Vec<(String, String)> = ALL_ROLES
        .iter()
        .map(|r| (r.as_str().to_string(), r.display_name().to_string()))
        .collect();
    let mut facility_options = vec![(String::new(), "No facility".to_string())];
    facility_options.extend(facilities.iter().map(|f| (f.id.to_string(), f.name.clone())));

    rsx! {
        Card {
            CardHeader { title: "New account" }
            CardContent {
                Form { onsubmit: submit,
                    if let Some(message) = error() {
                        FormAlert { message }
                    }
                    TextField {
                        label: "Username",
                        value: draft.read().username.clone(),
                        required: true,
                        on_input: move |v| draft.write().username = v,
                    }
                    TextField {
                        label: "Email",
                        value: draft.read().email.clone(),
                        input_type: "email",
                        required: true,
                        on_input: move |v| draft.write().email = v,
                    }
                    TextField {
                        label: "Temporary password",
                        value: draft.read().password.clone(),
                        input_type: "password",
                        required: true,
                        on_input: move |v| draft.write().password = v,
                    }
                    SelectField {
                        label: "Role",
                        value: draft.read().role.clone(),
                        options: roles,
                        on_change: move |v| draft.write().role = v,
                    }
                    SelectField {
                        label: "Facility",
                        value: draft.read().facility_id.clone(),
                        options: facility_options,
                        on_change: move |v| draft.write().facility_id = v,
                    }
                    div { class: "form-actions",
                        Button { button_type: "submit", loading: submitting(), "Create account" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(role: &str) -> User {
        User {
            id: 1,
            username: "aowusu".to_string(),
            email: "ama@clinic.org".to_string(),
            role: role.to_string(),
            facility_id: None,
            active: true,
        }
    }

    #[test]
    fn role_label_falls_back_to_raw_tag() {
        assert_eq!(role_label(&user("ROLE_DATA_ANALYST")), Role::DataAnalyst.display_name());
        assert_eq!(role_label(&user("AUDITOR")), "AUDITOR");
    }

    #[test]
    fn users_search_by_username_or_email() {
        assert!(user_matches(&user("x"), "AOW"));
        assert!(user_matches(&user("x"), "clinic.org"));
        assert!(!user_matches(&user("x"), "kwame"));
    }

    #[test]
    fn account_draft_requires_a_password() {
        let draft = AccountDraft {
            username: "kmensah".to_string(),
            email: "k@clinic.org".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err("Set a temporary password.".to_string()));
    }

    #[test]
    fn account_draft_builds_payload() {
        let draft = AccountDraft {
            username: "kmensah".to_string(),
            email: "k@clinic.org".to_string(),
            password: "correct horse".to_string(),
            role: "SUPER_ADMIN".to_string(),
            facility_id: "4".to_string(),
        };
        let body = draft.validate().unwrap();
        assert_eq!(body.role, Role::SuperAdmin);
        assert_eq!(body.facility_id, Some(4));
    }
}
