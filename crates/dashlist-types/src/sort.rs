use crate::entity::QueryField;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_asc(self) -> bool {
        self == SortDirection::Asc
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(Error::invalid("sort direction", s)),
        }
    }
}

/// Active sort of a list: one field, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: F) -> Self {
        Self::new(field, SortDirection::Asc)
    }
}

impl<F: QueryField> Sort<F> {
    /// Parse `field` or `field:direction`; the direction defaults to ascending.
    pub fn parse(spec: &str, list: &'static str) -> Result<Self> {
        let (field, direction) = match spec.split_once(':') {
            Some((field, direction)) => (field, direction.parse()?),
            None => (spec, SortDirection::Asc),
        };

        let field = F::parse(field.trim()).ok_or_else(|| Error::UnknownField {
            list,
            field: field.to_string(),
        })?;

        Ok(Self::new(field, direction))
    }
}

impl<F: QueryField> fmt::Display for Sort<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field.as_str(), self.direction)
    }
}
