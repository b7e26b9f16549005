use sea_orm::{entity::prelude::*, ActiveValue::Unchanged, DatabaseConnection, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{validate_digits, FieldErrors, Validatable, ValidationBuilder};

pub const PHONE_NUMBER_FIELD: &str = "vendorPhoneNumber";
pub const PHONE_NUMBER_MESSAGE: &str = "Phone Number should be 10 digits";
const PHONE_NUMBER_LEN: usize = 10;

/// A cloud vendor record. The `id` is assigned by the caller and never changes.
///
/// Serialized in camelCase: `{"id", "name", "country", "vendorPhoneNumber"}`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cloud_vendor")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub country: String,
    pub vendor_phone_number: String,
}

pub type CloudVendor = Model;

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Validatable for Model {
    fn validate(&self) -> Result<(), FieldErrors> {
        ValidationBuilder::new()
            .check(PHONE_NUMBER_FIELD, || {
                validate_digits(&self.vendor_phone_number, PHONE_NUMBER_LEN, PHONE_NUMBER_MESSAGE)
            })
            .build()
    }
}

fn db_err(e: DbErr) -> ModelError {
    ModelError::Db(e.to_string())
}

pub async fn find(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id.to_owned()).one(db).await.map_err(db_err)
}

/// All vendors ordered by id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(db_err)
}

pub async fn create(db: &DatabaseConnection, vendor: Model) -> Result<Model, ModelError> {
    vendor.validate()?;
    let id = vendor.id.clone();
    let am = ActiveModel {
        id: Set(vendor.id),
        name: Set(vendor.name),
        country: Set(vendor.country),
        vendor_phone_number: Set(vendor.vendor_phone_number),
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ModelError::Conflict(format!("cloud vendor {id} already exists"))
        }
        _ => db_err(e),
    })
}

/// Replace every column of an existing row. `Ok(None)` when no row has this id.
pub async fn replace(db: &DatabaseConnection, vendor: Model) -> Result<Option<Model>, ModelError> {
    vendor.validate()?;
    let am = ActiveModel {
        id: Unchanged(vendor.id),
        name: Set(vendor.name),
        country: Set(vendor.country),
        vendor_phone_number: Set(vendor.vendor_phone_number),
    };
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(db_err(e)),
    }
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id.to_owned()).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}
