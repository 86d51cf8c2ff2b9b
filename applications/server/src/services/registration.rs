/// User registration - validation and duplicate prevention in front of the gateway
use registry_core::{NewUser, RegistryError, Result, User, UserGateway};

/// Register a user unless its `dni` is already taken
///
/// Shared by `POST /api/users` and the `add-user` command.
pub async fn register_user(users: &dyn UserGateway, new_user: NewUser) -> Result<User> {
    new_user.validate()?;

    if users.find_by_dni(&new_user.dni).await?.is_some() {
        tracing::info!(dni = %new_user.dni, "Rejecting duplicate registration");
        return Err(RegistryError::duplicate("dni", new_user.dni));
    }

    // The unique index still guards the window between the lookup and the insert
    let user = users.create(new_user).await?;
    tracing::info!(id = user.id, "User registered");

    Ok(user)
}
