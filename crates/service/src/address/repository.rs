use async_trait::async_trait;
use models::address;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;

/// Storage abstraction over the address collection. Addresses carry no
/// validation rules; every field is free text.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<address::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<address::Model>, ServiceError>;
    async fn insert(
        &self,
        country: &str,
        city: &str,
        address_line1: &str,
        address_line2: &str,
    ) -> Result<address::Model, ServiceError>;
    async fn update(
        &self,
        id: i32,
        country: &str,
        city: &str,
        address_line1: &str,
        address_line2: &str,
    ) -> Result<Option<address::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<address::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmAddressRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn find_all(&self) -> Result<Vec<address::Model>, ServiceError> {
        Ok(address::Entity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<address::Model>, ServiceError> {
        Ok(address::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(
        &self,
        country: &str,
        city: &str,
        address_line1: &str,
        address_line2: &str,
    ) -> Result<address::Model, ServiceError> {
        let am = address::ActiveModel {
            country: Set(country.to_owned()),
            city: Set(city.to_owned()),
            address_line1: Set(address_line1.to_owned()),
            address_line2: Set(address_line2.to_owned()),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(
        &self,
        id: i32,
        country: &str,
        city: &str,
        address_line1: &str,
        address_line2: &str,
    ) -> Result<Option<address::Model>, ServiceError> {
        let Some(existing) = address::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: address::ActiveModel = existing.into();
        am.country = Set(country.to_owned());
        am.city = Set(city.to_owned());
        am.address_line1 = Set(address_line1.to_owned());
        am.address_line2 = Set(address_line2.to_owned());
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete(&self, id: i32) -> Result<Option<address::Model>, ServiceError> {
        let Some(existing) = address::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        address::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(Some(existing))
    }
}
