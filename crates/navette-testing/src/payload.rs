//! Provider-shaped webhook payload builders.

use serde_json::{Value, json};

/// Build a `user.created` payload in the identity provider's wire shape.
pub fn user_created(
    id: &str,
    email: Option<&str>,
    first_name: Option<&str>,
    role: Option<&str>,
) -> Value {
    let mut data = json!({ "id": id });
    if let Some(email) = email {
        data["email_addresses"] = json!([{ "email_address": email }]);
    }
    if let Some(first_name) = first_name {
        data["first_name"] = json!(first_name);
    }
    if let Some(role) = role {
        data["unsafe_metadata"] = json!({ "role": role });
    }
    json!({ "type": "user.created", "data": data })
}

/// Build a `user.updated` payload.
pub fn user_updated(id: &str, email: Option<&str>, first_name: Option<&str>) -> Value {
    let mut data = json!({ "id": id });
    if let Some(email) = email {
        data["email_addresses"] = json!([{ "email_address": email }]);
    }
    if let Some(first_name) = first_name {
        data["first_name"] = json!(first_name);
    }
    json!({ "type": "user.updated", "data": data })
}

/// Build a `user.deleted` payload.
pub fn user_deleted(id: &str) -> Value {
    json!({ "type": "user.deleted", "data": { "id": id, "deleted": true } })
}
