// Employer Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entity::{Column, Entity};
use super::error::DomainError;
use super::field::{ColumnKind, EntityId};

/// Company that owns zero or more job postings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    pub id: Option<EntityId>,
    pub name: String,
    pub category: String,
    pub summary: String,
}

impl Employer {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            summary: summary.into(),
        }
    }
}

impl Entity for Employer {
    type Column = EmployerColumn;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

/// Columns of the `employers` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerColumn {
    Id,
    Name,
    Category,
    Summary,
}

impl Column for EmployerColumn {
    const ALL: &'static [Self] = &[
        EmployerColumn::Id,
        EmployerColumn::Name,
        EmployerColumn::Category,
        EmployerColumn::Summary,
    ];

    const ENTITY: &'static str = "employer";

    fn as_str(&self) -> &'static str {
        match self {
            EmployerColumn::Id => "id",
            EmployerColumn::Name => "name",
            EmployerColumn::Category => "category",
            EmployerColumn::Summary => "summary",
        }
    }

    fn kind(&self) -> ColumnKind {
        match self {
            EmployerColumn::Id => ColumnKind::Integer,
            _ => ColumnKind::Text,
        }
    }
}

impl fmt::Display for EmployerColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployerColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employer_has_no_id() {
        let e = Employer::new("Apple", "Tech", "Summary");
        assert_eq!(e.id(), None);
        assert_eq!(e.name, "Apple");
    }

    #[test]
    fn test_column_names_round_trip() {
        for column in EmployerColumn::ALL {
            assert_eq!(column.as_str().parse::<EmployerColumn>().unwrap(), *column);
        }
    }

    #[test]
    fn test_unknown_column() {
        let err = "salary".parse::<EmployerColumn>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownColumn {
                entity: "employer".to_string(),
                column: "salary".to_string(),
            }
        );
    }
}
