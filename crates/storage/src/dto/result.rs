use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{EventResult, SkaterName};

pub const MIN_POSITION: i32 = 1;
pub const MAX_POSITION: i32 = 24;

const PLACEMENT_MESSAGE: &str = "Placement must be 1-24.";
const GROUP_SIZE_MESSAGE: &str = "Group size must be 1-24.";
const GROUP_MESSAGE: &str = "Group must be a single capital letter.";

/// Values of the result entry form, exactly as typed.
///
/// Numeric fields stay strings until validation so that a half-filled form can be
/// held, echoed back and re-validated; JSON numbers are accepted for them too.
/// A `null` field is treated as left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResultFormData {
    /// "First Last" of the selected skater
    #[validate(length(min = 1, message = "Skater is required."))]
    #[serde(default, deserialize_with = "empty_if_null")]
    pub skater_name: String,

    /// Id of the selected skater, when the client picked from the option list
    #[serde(default)]
    pub skater_id: Option<i32>,

    #[validate(length(min = 1, message = "Event name is required."))]
    #[serde(default, deserialize_with = "empty_if_null")]
    pub event_name: String,

    #[validate(custom(function = "validate_placement"))]
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(example = "3")]
    pub placement: String,

    #[validate(custom(function = "validate_group_size"))]
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(example = "8")]
    pub group_size: String,

    /// Optional heat subdivision letter, A-Z
    #[validate(custom(function = "validate_group"))]
    #[serde(default, deserialize_with = "empty_if_null")]
    pub group: String,
}

/// A form that passed validation, with numbers parsed and the group resolved to
/// `None` when left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResult {
    pub skater_name: String,
    pub skater_id: Option<i32>,
    pub event_name: String,
    pub placement: i32,
    pub group_size: i32,
    pub group: Option<String>,
}

impl ValidatedResult {
    pub fn skater(&self) -> SkaterName {
        SkaterName::from_display_name(&self.skater_name)
    }
}

impl ResultFormData {
    /// Applies the input normalization the form does while typing.
    pub fn normalized(&self) -> Self {
        Self {
            group: self.group.to_uppercase(),
            ..self.clone()
        }
    }

    /// All failing fields with their messages; empty when the form is valid.
    pub fn field_errors(&self) -> FieldErrors {
        match self.normalized().validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(&errors),
        }
    }

    pub fn validated(&self) -> Result<ValidatedResult, FieldErrors> {
        let form = self.normalized();
        form.validate().map_err(|e| FieldErrors::from(&e))?;

        let placement = parse_position(&form.placement)
            .ok_or_else(|| FieldErrors::single("placement", PLACEMENT_MESSAGE))?;
        let group_size = parse_position(&form.group_size)
            .ok_or_else(|| FieldErrors::single("group_size", GROUP_SIZE_MESSAGE))?;

        Ok(ValidatedResult {
            skater_name: form.skater_name,
            skater_id: form.skater_id,
            event_name: form.event_name,
            placement,
            group_size,
            group: Some(form.group).filter(|g| !g.is_empty()),
        })
    }
}

/// Field name to error message, one message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    fn single(field: &str, message: &str) -> Self {
        Self(BTreeMap::from([(field.to_string(), message.to_string())]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .iter()
            .filter_map(|(field, errors)| {
                errors.first().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.to_string(), message)
                })
            })
            .collect();

        Self(fields)
    }
}

/// Body returned once a result row has been stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultAddedResponse {
    pub message: String,
    pub result: EventResult,
}

/// Whole numbers only, however they are written: "3", "3.0" and 3.0 are the same placement.
fn parse_position(value: &str) -> Option<i32> {
    let number = value.trim().parse::<f64>().ok()?;
    if !number.is_finite() || number.fract() != 0.0 {
        return None;
    }
    let range = f64::from(MIN_POSITION)..=f64::from(MAX_POSITION);
    range.contains(&number).then_some(number as i32)
}

fn rejection(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_position(value: &str, message: &'static str) -> Result<(), ValidationError> {
    match parse_position(value) {
        Some(_) => Ok(()),
        None => Err(rejection("range", message)),
    }
}

fn validate_placement(placement: &str) -> Result<(), ValidationError> {
    validate_position(placement, PLACEMENT_MESSAGE)
}

fn validate_group_size(group_size: &str) -> Result<(), ValidationError> {
    validate_position(group_size, GROUP_SIZE_MESSAGE)
}

fn validate_group(group: &str) -> Result<(), ValidationError> {
    let mut chars = group.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(()),
        (Some(c), None) if c.is_ascii_uppercase() => Ok(()),
        _ => Err(rejection("group", GROUP_MESSAGE)),
    }
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Text(s)) => s,
        Some(Raw::Integer(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
    })
}
