// src/utils/clipboard.rs
use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to copy to clipboard: {0}")]
    Unavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    Io(#[from] io::Error),
}

type Helper = (&'static str, &'static [&'static str]);

const PBCOPY: Helper = ("pbcopy", &[]);
const CLIP: Helper = ("clip", &[]);
const WL_COPY: Helper = ("wl-copy", &[]);
const XCLIP: Helper = ("xclip", &["-selection", "clipboard"]);
const XSEL: Helper = ("xsel", &["--clipboard", "--input"]);

// Candidate helpers, tried in order until one accepts the text
fn clipboard_commands() -> Vec<Helper> {
    if cfg!(target_os = "macos") {
        vec![PBCOPY]
    } else if cfg!(target_os = "windows") {
        vec![CLIP]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        vec![WL_COPY, XCLIP, XSEL]
    } else {
        vec![XCLIP, XSEL]
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<bool> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    Ok(child.wait()?.success())
}

/// Put `text` on the system clipboard through the platform's copy helper.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut tried = Vec::new();

    for (program, args) in clipboard_commands() {
        match pipe_to(program, args, text) {
            Ok(true) => {
                log::debug!("Copied {} bytes to clipboard via {}", text.len(), program);
                return Ok(());
            }
            Ok(false) => {
                log::debug!("{} exited unsuccessfully", program);
                tried.push(program);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => tried.push(program),
            Err(e) => return Err(ClipboardError::Io(e)),
        }
    }

    Err(ClipboardError::Unavailable(format!(
        "no working clipboard helper (tried {})",
        tried.join(", ")
    )))
}
