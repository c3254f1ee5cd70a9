use std::fmt;

use serde::{Deserialize, Serialize};

/// A movie (or otherwise non-serial) acting credit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    /// Title of the work, with any surrounding double quotes removed.
    pub title: String,

    /// Release year, `None` when the catalog lists it as `????`.
    pub year: Option<u16>,

    /// Character played. An `(as ...)` alias takes precedence over `[...]`.
    pub character: Option<String>,

    /// Billing position in the credits, always `>= 1` when present.
    pub credit: Option<u32>,
}

impl Role {
    /// Creates a role with only a title; every optional field is absent.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            character: None,
            credit: None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        match self.year {
            Some(year) => write!(f, " ({year})")?,
            None => write!(f, " (????)")?,
        }
        if let Some(ref character) = self.character {
            write!(f, " as {character}")?;
        }
        if let Some(credit) = self.credit {
            write!(f, " <{credit}>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_role_has_only_title() {
        let role = Role::new("EuroTrip");
        assert_eq!(role.title, "EuroTrip");
        assert_eq!(role.year, None);
        assert_eq!(role.character, None);
        assert_eq!(role.credit, None);
    }

    #[test]
    fn role_display() {
        let role = Role {
            title: "EuroTrip".into(),
            year: Some(2004),
            character: Some("Jenny".into()),
            credit: Some(6),
        };
        assert_eq!(role.to_string(), "EuroTrip (2004) as Jenny <6>");

        assert_eq!(Role::new("Nailed").to_string(), "Nailed (????)");
    }

    #[test]
    fn role_serializes_absent_fields_as_null() {
        let json = serde_json::to_value(Role::new("Llamada")).unwrap();
        assert_eq!(json["title"], "Llamada");
        assert!(json["year"].is_null());
        assert!(json["credit"].is_null());
    }
}
