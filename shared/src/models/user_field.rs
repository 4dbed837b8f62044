//! User Field Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of custom user fields an admin may define
pub const MAX_USER_FIELDS: usize = 30;

/// Kind of input a user field renders as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Confirm,
    Dropdown,
    Multiselect,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Confirm => "confirm",
            Self::Dropdown => "dropdown",
            Self::Multiselect => "multiselect",
        }
    }

    /// Dropdown and multiselect fields need a list of choices
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::Dropdown | Self::Multiselect)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "confirm" => Ok(Self::Confirm),
            "dropdown" => Ok(Self::Dropdown),
            "multiselect" => Ok(Self::Multiselect),
            other => Err(format!("unknown field type '{other}'")),
        }
    }
}

/// User field entity
///
/// `id` is `None` until the field has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserField {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub editable: bool,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub show_on_profile: bool,
    #[serde(default)]
    pub show_on_user_card: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub options: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl UserField {
    /// Unsaved field with default attributes
    pub fn new(field_type: FieldType, position: i32) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            field_type,
            editable: false,
            required: true,
            show_on_profile: false,
            show_on_user_card: false,
            searchable: false,
            position,
            options: Vec::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Payload that creates this field on the server
    pub fn to_create(&self) -> UserFieldCreate {
        UserFieldCreate {
            name: self.name.clone(),
            description: self.description.clone(),
            field_type: self.field_type,
            editable: self.editable,
            required: self.required,
            show_on_profile: self.show_on_profile,
            show_on_user_card: self.show_on_user_card,
            searchable: self.searchable,
            position: Some(self.position),
            options: self.options.clone(),
        }
    }

    /// Payload that overwrites every attribute of this field
    pub fn to_update(&self) -> UserFieldUpdate {
        UserFieldUpdate {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            field_type: Some(self.field_type),
            editable: Some(self.editable),
            required: Some(self.required),
            show_on_profile: Some(self.show_on_profile),
            show_on_user_card: Some(self.show_on_user_card),
            searchable: Some(self.searchable),
            position: Some(self.position),
            options: Some(self.options.clone()),
        }
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, changes: &UserFieldUpdate) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(field_type) = changes.field_type {
            self.field_type = field_type;
        }
        if let Some(editable) = changes.editable {
            self.editable = editable;
        }
        if let Some(required) = changes.required {
            self.required = required;
        }
        if let Some(show) = changes.show_on_profile {
            self.show_on_profile = show;
        }
        if let Some(show) = changes.show_on_user_card {
            self.show_on_user_card = show;
        }
        if let Some(searchable) = changes.searchable {
            self.searchable = searchable;
        }
        if let Some(position) = changes.position {
            self.position = position;
        }
        if let Some(options) = &changes.options {
            self.options = options.clone();
        }
    }
}

/// Create user field payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFieldCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub editable: bool,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub show_on_profile: bool,
    #[serde(default)]
    pub show_on_user_card: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Update user field payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFieldUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_on_profile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_on_user_card: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl UserFieldUpdate {
    /// Update that only moves the field
    pub fn position(position: i32) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }
}

/// `{"user_field": ...}` request / response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFieldEnvelope<T> {
    pub user_field: T,
}

/// `{"user_fields": [...]}` list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFieldList {
    pub user_fields: Vec<UserField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_parse() {
        assert_eq!("text".parse::<FieldType>(), Ok(FieldType::Text));
        assert_eq!("multiselect".parse::<FieldType>(), Ok(FieldType::Multiselect));
        assert!("checkbox".parse::<FieldType>().is_err());
        assert_eq!(FieldType::Dropdown.to_string(), "dropdown");
    }

    #[test]
    fn test_new_field_is_unsaved_text() {
        let field = UserField::new(FieldType::default(), MAX_USER_FIELDS as i32);
        assert!(!field.is_persisted());
        assert_eq!(field.field_type, FieldType::Text);
        assert_eq!(field.position, 30);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut field = UserField::new(FieldType::Text, 1);
        field.apply(&UserFieldUpdate {
            name: Some("Favorite color".to_string()),
            position: Some(4),
            ..Default::default()
        });
        assert_eq!(field.name, "Favorite color");
        assert_eq!(field.position, 4);
        assert!(field.required);
    }

    #[test]
    fn test_position_update_serializes_only_position() {
        let json = serde_json::to_value(UserFieldUpdate::position(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "position": 3 }));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let field: UserField =
            serde_json::from_str(r#"{"id":5,"name":"Pronouns","field_type":"text","position":2}"#)
                .unwrap();
        assert_eq!(field.id, Some(5));
        assert!(field.required);
        assert!(field.options.is_empty());
    }
}
