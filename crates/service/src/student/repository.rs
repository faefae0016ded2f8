use async_trait::async_trait;
use chrono::NaiveDate;
use models::student;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;

/// Storage abstraction over the student collection.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<student::Model>, ServiceError>;
    /// Insert a new record; the store assigns the id.
    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        birthday: NaiveDate,
        phone: &str,
        email: &str,
    ) -> Result<student::Model, ServiceError>;
    /// Overwrite every mutable field of an existing record. Returns `None`
    /// when the id is gone (e.g. deleted between lookup and save).
    async fn update(
        &self,
        id: i32,
        first_name: &str,
        last_name: &str,
        birthday: NaiveDate,
        phone: &str,
        email: &str,
    ) -> Result<Option<student::Model>, ServiceError>;
    /// Delete by id, returning the removed record when it existed.
    async fn delete(&self, id: i32) -> Result<Option<student::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError> {
        Ok(student::Entity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<student::Model>, ServiceError> {
        Ok(student::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        birthday: NaiveDate,
        phone: &str,
        email: &str,
    ) -> Result<student::Model, ServiceError> {
        let am = student::ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            birthday: Set(birthday),
            phone: Set(phone.to_owned()),
            email: Set(email.to_owned()),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(
        &self,
        id: i32,
        first_name: &str,
        last_name: &str,
        birthday: NaiveDate,
        phone: &str,
        email: &str,
    ) -> Result<Option<student::Model>, ServiceError> {
        let Some(existing) = student::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: student::ActiveModel = existing.into();
        am.first_name = Set(first_name.to_owned());
        am.last_name = Set(last_name.to_owned());
        am.birthday = Set(birthday);
        am.phone = Set(phone.to_owned());
        am.email = Set(email.to_owned());
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete(&self, id: i32) -> Result<Option<student::Model>, ServiceError> {
        let Some(existing) = student::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        student::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(Some(existing))
    }
}
