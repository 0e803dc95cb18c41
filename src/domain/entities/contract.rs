//! 계약 형태 엔티티 (CDI, CDD, 인턴십 등)

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityMeta};
use crate::domain::validation::{setters, Constraint, EntitySchema, FieldDef, FieldType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contract {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    pub description: Option<String>,
}

static SCHEMA: Lazy<EntitySchema<Contract>> = Lazy::new(|| {
    EntitySchema::new(vec![
        FieldDef::new("name", |contract: &mut Contract, value| {
            contract.name = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 50)),
        FieldDef::new("description", |contract: &mut Contract, value| {
            contract.description = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::max_length(1000)),
    ])
});

impl Entity for Contract {
    const NAME: &'static str = "Contract";
    const COLLECTION: &'static str = "contracts";

    fn schema() -> &'static EntitySchema<Self> {
        &SCHEMA
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }
}
