use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::location::{Address, GeoPoint, NewLocation};
use crate::domain::types::{LocationKind, NonEmptyString, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationForm {
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub kind: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub address: Address,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

#[derive(Debug, Error)]
pub enum LocationFormError {
    #[error("Location form validation failed: {0}")]
    Validation(String),
    #[error("Location form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for LocationFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for LocationFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<LocationForm> for NewLocation {
    type Error = LocationFormError;

    fn try_from(value: LocationForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            kind: LocationKind::try_from(value.kind.as_str())?,
            name: NonEmptyString::new(value.name)?,
            address: value.address,
            phone: value.phone,
            fax: value.fax,
            email: value.email,
            hours: value.hours,
            map_url: value.map_url,
            coordinates: value.coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_form() -> LocationForm {
        LocationForm {
            kind: "factory".to_string(),
            name: "Kalamata Mill".to_string(),
            address: Address {
                street: "Olive Grove Road 7".to_string(),
                city: "Kalamata".to_string(),
                region: Some("Messenia".to_string()),
                postal_code: None,
                country: "GR".to_string(),
            },
            phone: None,
            fax: None,
            email: None,
            hours: None,
            map_url: None,
            coordinates: None,
        }
    }

    #[test]
    fn converts_known_kind() {
        let payload: NewLocation = minimal_form().try_into().unwrap();
        assert_eq!(payload.kind, LocationKind::Factory);
    }

    #[test]
    fn rejects_unknown_kind() {
        let form = LocationForm {
            kind: "warehouse".to_string(),
            ..minimal_form()
        };
        let payload: Result<NewLocation, _> = form.try_into();
        assert!(payload.is_err());
    }
}
