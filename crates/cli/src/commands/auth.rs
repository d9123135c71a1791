//! Session commands: login, signup, logout, password rotation.

use secrecy::SecretString;

use raterly_client::api::SignupDetails;
use raterly_client::auth::{AuthFlow, rules};

use super::{CliError, Context};

/// Log in and persist the granted session.
#[allow(clippy::print_stdout)]
pub async fn login(email: &str, password: String) -> Result<(), CliError> {
    let mut ctx = Context::bootstrap()?;
    let flow = AuthFlow::new(ctx.api.clone());

    let user = flow
        .login(&mut ctx.sessions, email, &SecretString::from(password))
        .await?;

    println!("Logged in as {} ({})", user.name, user.role);
    Ok(())
}

/// Register a new account; on success the backend grants a session
/// immediately.
///
/// Advertised format constraints are printed as advisories but never block
/// the submission — the backend decides.
#[allow(clippy::print_stdout)]
pub async fn signup(
    name: String,
    email: String,
    address: String,
    password: String,
) -> Result<(), CliError> {
    let mut ctx = Context::bootstrap()?;
    let flow = AuthFlow::new(ctx.api.clone());

    for advisory in rules::signup_advisories(&name, &address, &password) {
        println!("note: {advisory}");
    }

    let details = SignupDetails {
        name,
        email,
        address,
        password: SecretString::from(password),
    };
    let user = flow.signup(&mut ctx.sessions, &details).await?;

    println!("Account created; logged in as {} ({})", user.name, user.role);
    Ok(())
}

/// Clear the persisted session.
#[allow(clippy::print_stdout)]
pub fn logout() -> Result<(), CliError> {
    let mut ctx = Context::bootstrap()?;
    ctx.sessions.logout()?;
    println!("Logged out");
    Ok(())
}

/// Rotate the account password; the current session stays valid.
#[allow(clippy::print_stdout)]
pub async fn change_password(old: String, new: String) -> Result<(), CliError> {
    let ctx = Context::bootstrap()?;
    let flow = AuthFlow::new(ctx.api.clone());

    flow.change_password(
        &ctx.sessions,
        &SecretString::from(old),
        &SecretString::from(new),
    )
    .await?;

    println!("Password updated");
    Ok(())
}
