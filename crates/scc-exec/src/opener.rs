use std::process::Command;
use std::process::Stdio;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("refusing to open `{0}`")]
    UnsupportedScheme(String),
    #[error("failed to launch the system opener: {0}")]
    Spawn(#[from] std::io::Error),
}

const ALLOWED_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

pub fn is_openable(url: &str) -> bool {
    ALLOWED_SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme))
        && !url.chars().any(|ch| ch.is_control() || ch == '"')
}

pub fn open_url(url: &str) -> Result<(), OpenError> {
    if !is_openable(url) {
        return Err(OpenError::UnsupportedScheme(url.to_string()));
    }
    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    log::info!("event=url_opened url={url}");
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    windows_opener(url)
}

// `cmd /C start` would split the URL at `&`; the protocol handler takes it whole.
#[cfg(any(target_os = "windows", test))]
fn windows_opener(url: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
