use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    Edit,
    View,
    None,
}

impl PermissionLevel {
    pub const ALL: [PermissionLevel; 3] =
        [PermissionLevel::Edit, PermissionLevel::View, PermissionLevel::None];

    // the dropdown shows a friendlier label than the wire encoding
    pub fn label(&self) -> &'static str {
        match self {
            PermissionLevel::Edit => "Edit & View",
            PermissionLevel::View => "View",
            PermissionLevel::None => "None",
        }
    }
}

impl From<String> for PermissionLevel {
    fn from(string: String) -> PermissionLevel {
        match string.as_str() {
            "Edit & View" | "edit" => PermissionLevel::Edit,
            "View" | "view" => PermissionLevel::View,
            _ => PermissionLevel::None,
        }
    }
}

// the permission matrix travels as a single JSON object mapping each
// view-set name to a level, carried in a hidden form field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMatrix(BTreeMap<String, PermissionLevel>);

impl PermissionMatrix {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }

    // view sets missing from the object have never been granted anything
    pub fn level(&self, view_set: &str) -> PermissionLevel {
        self.0.get(view_set).copied().unwrap_or(PermissionLevel::None)
    }

    pub fn set(&mut self, view_set: &str, level: PermissionLevel) {
        self.0.insert(view_set.to_owned(), level);
    }

    // every dropdown writes an entry on submit, so view sets missing from
    // the stored object must still appear in the serialized one
    pub fn ensure_view_sets(&mut self, view_sets: &[String]) {
        for view_set in view_sets {
            self.0
                .entry(view_set.clone())
                .or_insert(PermissionLevel::None);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub id: String,
    pub url: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

// the saved order is a single comma-joined list of identifiers, read off
// the list in its current visual order
pub fn serialize_order(ids: &[String]) -> String {
    ids.join(",")
}

// messages

// fetch the sortable link list, in its saved order
endpoint!(GetExternalLinks);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetExternalLinksReq {}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetExternalLinksResp {
    pub links: Vec<ExternalLink>,
}

// persist a new link order
endpoint!(SetLinkOrder);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetLinkOrderReq {
    pub new_order: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetLinkOrderResp {}

// fetch the permission matrix and the view sets it covers
endpoint!(GetPermissions);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetPermissionsReq {}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetPermissionsResp {
    // the raw hidden-field value, parsed client-side
    pub permissions: String,
    pub view_sets: Vec<String>,
}

// persist the re-serialized matrix
endpoint!(SetPermissions);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetPermissionsReq {
    pub permissions: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetPermissionsResp {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_round_trips_through_the_hidden_field() {
        let mut matrix = PermissionMatrix::default();
        matrix.set("events", PermissionLevel::Edit);
        matrix.set("gallery", PermissionLevel::View);

        let json = matrix.serialize();
        assert_eq!(json, r#"{"events":"edit","gallery":"view"}"#);

        let parsed = PermissionMatrix::parse(&json).unwrap();
        assert_eq!(parsed, matrix);
    }

    #[test]
    fn missing_view_set_defaults_to_none() {
        let matrix = PermissionMatrix::parse(r#"{"events":"edit"}"#).unwrap();
        assert_eq!(matrix.level("events"), PermissionLevel::Edit);
        assert_eq!(matrix.level("officers"), PermissionLevel::None);
    }

    #[test]
    fn untouched_view_sets_still_serialize() {
        let mut matrix = PermissionMatrix::parse(r#"{"events":"edit"}"#).unwrap();
        matrix.ensure_view_sets(&[String::from("events"), String::from("gallery")]);

        assert_eq!(matrix.level("events"), PermissionLevel::Edit);
        assert_eq!(
            matrix.serialize(),
            r#"{"events":"edit","gallery":"none"}"#
        );
    }

    #[test]
    fn level_converts_from_label_and_wire_forms() {
        assert_eq!(
            PermissionLevel::from(String::from("Edit & View")),
            PermissionLevel::Edit
        );
        assert_eq!(PermissionLevel::from(String::from("view")), PermissionLevel::View);
        assert_eq!(
            PermissionLevel::from(String::from("garbage")),
            PermissionLevel::None
        );
    }

    #[test]
    fn malformed_matrix_is_an_error() {
        assert!(PermissionMatrix::parse("not json").is_err());
    }

    #[test]
    fn order_serializes_comma_joined() {
        let ids = vec![String::from("b"), String::from("a"), String::from("c")];
        assert_eq!(serialize_order(&ids), "b,a,c");
        assert_eq!(serialize_order(&[]), "");
    }
}
