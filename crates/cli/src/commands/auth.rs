//! Session commands.

use panther_core::Email;
use panther_storefront::error::{AppError, Result};
use panther_storefront::stores::auth::RegisterRequest;

use super::Session;

/// Exchange credentials for a session.
pub async fn login(session: &mut Session, email: &str, password: &str) {
    if session.auth.login(email, password).await {
        println!("Logged in as {email}.");
    } else {
        println!(
            "Login failed: {}",
            session.auth.error().unwrap_or("unknown error")
        );
    }
}

/// Create an account; on success the store logs in immediately.
pub async fn register(
    session: &mut Session,
    email: &str,
    password: &str,
    first_name: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let email = Email::parse(email)
        .map_err(|e| AppError::BadRequest(format!("invalid email address: {e}")))?;

    let request = RegisterRequest {
        email,
        password: password.to_owned(),
        first_name,
        phone,
    };

    if session.auth.register(&request).await {
        println!("Account created.");
        account(session);
    } else {
        println!(
            "Registration failed: {}",
            session.auth.error().unwrap_or("unknown error")
        );
    }
    Ok(())
}

/// End the session and clear persisted credentials.
pub fn logout(session: &mut Session) {
    session.auth.logout();
    println!("Logged out.");
}

/// Print session status.
pub fn account(session: &Session) {
    if session.auth.is_logged_in() {
        println!(
            "Logged in as {}.",
            session.auth.user_email().unwrap_or("(email unknown)")
        );
    } else {
        println!("Not logged in.");
    }
}
