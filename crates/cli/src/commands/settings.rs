//! Local settings commands: theme and remembered login.

use secrecy::SecretString;

use bookhive_client::{RememberedLogin, Theme};
use bookhive_core::Email;

use super::CliError;

/// Print the saved theme.
#[allow(clippy::print_stdout)]
pub fn theme_show() -> Result<(), CliError> {
    let theme = super::settings().theme()?;
    println!("{theme:?}");
    Ok(())
}

/// Save a theme preference.
#[allow(clippy::print_stdout)]
pub fn theme_set(theme: Theme) -> Result<(), CliError> {
    super::settings().set_theme(theme)?;
    println!("Theme set to {theme:?}.");
    Ok(())
}

/// Save credentials for the login form to prefill.
#[allow(clippy::print_stdout)]
pub fn login_remember(email: &str, password: String) -> Result<(), CliError> {
    let login = RememberedLogin {
        email: Email::parse(email)?,
        password: SecretString::from(password),
    };
    super::settings().remember_login(&login)?;
    println!("Login remembered for {}.", login.email);
    Ok(())
}

/// Print the remembered email, never the password.
#[allow(clippy::print_stdout)]
pub fn login_show() -> Result<(), CliError> {
    match super::settings().remembered_login()? {
        Some(login) => println!("Remembered login: {}", login.email),
        None => println!("No remembered login."),
    }
    Ok(())
}

/// Drop saved credentials.
#[allow(clippy::print_stdout)]
pub fn login_forget() -> Result<(), CliError> {
    super::settings().forget_login()?;
    println!("Login forgotten.");
    Ok(())
}
