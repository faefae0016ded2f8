use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::address::repository::{AddressRepository, SeaOrmAddressRepository};
use service::student::repository::{SeaOrmStudentRepository, StudentRepository};

/// In-memory database with the schema applied; no external services needed.
async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_to("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date")
}

#[tokio::test]
async fn student_crud_roundtrip() -> anyhow::Result<()> {
    let repo = SeaOrmStudentRepository::new(setup_test_db().await?);

    assert!(repo.find_all().await?.is_empty());

    let created = repo
        .insert("Alice", "Smith", birthday(), "+38 099 123 45 67", "alice@example.com")
        .await?;
    assert!(created.id >= 1);
    assert_eq!(created.first_name, "Alice");

    let found = repo.find_by_id(created.id).await?.expect("created record is readable");
    assert_eq!(found, created);

    let updated = repo
        .update(created.id, "Alicia", "Smith", birthday(), "099 123 45 67", "alicia@example.com")
        .await?
        .expect("record exists");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Alicia");
    assert_eq!(updated.phone, "099 123 45 67");

    let deleted = repo.delete(created.id).await?.expect("record exists");
    assert_eq!(deleted.id, created.id);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn student_ids_are_assigned_in_sequence() -> anyhow::Result<()> {
    let repo = SeaOrmStudentRepository::new(setup_test_db().await?);

    let a = repo.insert("Alice", "Smith", birthday(), "099 123 45 67", "a@b.co").await?;
    let b = repo.insert("Bob", "Jones", birthday(), "099 123 45 67", "b@c.co").await?;
    assert!(b.id > a.id);
    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn update_missing_student_returns_none() -> anyhow::Result<()> {
    let repo = SeaOrmStudentRepository::new(setup_test_db().await?);
    let res = repo.update(999, "Alice", "Smith", birthday(), "099 123 45 67", "a@b.co").await?;
    assert!(res.is_none());
    assert!(repo.delete(999).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn address_crud_roundtrip() -> anyhow::Result<()> {
    let repo = SeaOrmAddressRepository::new(setup_test_db().await?);

    let created = repo.insert("Ukraine", "Kyiv", "1 Main St", "Apt 2").await?;
    assert!(created.id >= 1);
    assert_eq!(created.address_line1, "1 Main St");

    let updated = repo
        .update(created.id, "Ukraine", "Lviv", "1 Main St", "Apt 3")
        .await?
        .expect("record exists");
    assert_eq!(updated.city, "Lviv");
    assert_eq!(updated.address_line2, "Apt 3");

    let deleted = repo.delete(created.id).await?.expect("record exists");
    assert_eq!(deleted.id, created.id);
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
