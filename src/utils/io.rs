// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory. Created lazily by whoever writes there.
pub fn get_app_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "wp-passtool", "wp-passtool")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

// First line of stdin, without the trailing newline
pub fn read_stdin_line() -> std::io::Result<String> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Resolve a secret argument, where `-` means "read it from stdin".
pub fn resolve_secret(value: &str) -> std::io::Result<String> {
    if value == "-" {
        read_stdin_line()
    } else {
        Ok(value.to_string())
    }
}
