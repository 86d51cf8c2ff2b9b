/// Administrative command tests
/// Run add-user and list-users against a real SQLite file
use registry_core::{NewUser, RegistryError};
use registry_server::{commands, ServerConfig};
use tempfile::TempDir;

/// Config pointing at a database inside a not-yet-existing folder
fn test_config(temp_dir: &TempDir) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.storage.database_url = format!(
        "sqlite://{}",
        temp_dir.path().join("data").join("registry.db").display()
    );
    config
}

#[tokio::test]
async fn test_list_users_on_fresh_database_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let users = commands::list_users(&config).await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_add_user_then_list_users() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let created = commands::add_user(&config, NewUser::new("1234567890", "Test"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let users = commands::list_users(&config).await.unwrap();
    assert_eq!(users, vec![created]);
}

#[tokio::test]
async fn test_add_user_rejects_duplicate_dni() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    commands::add_user(&config, NewUser::new("1234567890", "Test"))
        .await
        .unwrap();
    let err = commands::add_user(&config, NewUser::new("1234567890", "Other"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RegistryError>(),
        Some(RegistryError::Duplicate { .. })
    ));
    assert_eq!(commands::list_users(&config).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_user_rejects_blank_name() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let err = commands::add_user(&config, NewUser::new("1234567890", ""))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RegistryError>(),
        Some(RegistryError::InvalidInput(_))
    ));
}
