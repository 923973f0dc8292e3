//! Handlers for `login` and `logout`.

use dialoguer::{Input, Password};

use super::command::LoginArgs;
use super::output;
use crate::application::SessionGate;
use crate::domain::Credentials;
use crate::error::{Error, Result};

/// Execute `login`, prompting for any credential not given as a flag.
///
/// Rejected credentials are reported and return an error so the process
/// exits non-zero; the stored flag is left as it was.
pub async fn execute_login(session: &SessionGate, args: LoginArgs) -> Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => Input::<String>::new().with_prompt("Username").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    if session.login(&Credentials::new(username, password)).await? {
        output::success("Login successful");
        Ok(())
    } else {
        Err(Error::LoginFailed)
    }
}

/// Execute `logout`.
pub async fn execute_logout(session: &SessionGate) -> Result<()> {
    session.logout().await?;
    output::success("Logout successful");
    Ok(())
}
