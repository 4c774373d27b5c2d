// SQL and PHP snippets for resetting a WordPress password by hand
use thiserror::Error;

use crate::crypto::{self, CryptoError};
use crate::models::{HashRecord, HashVariant};

pub const DEFAULT_TABLE_PREFIX: &str = "wp_";

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("Please enter {0}")]
    MissingInput(&'static str),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, SnippetError>;

fn sql_quote(value: &str) -> String {
    value.replace('\'', "''")
}

fn php_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Build the `UPDATE` statement for an already computed hash.
///
/// An empty prefix falls back to `wp_`.
pub fn build_sql_query(username: &str, hash: &str, table_prefix: &str) -> Result<String> {
    if username.is_empty() {
        return Err(SnippetError::MissingInput("username"));
    }
    let prefix = if table_prefix.trim().is_empty() {
        DEFAULT_TABLE_PREFIX
    } else {
        table_prefix.trim()
    };

    Ok(format!(
        "UPDATE {}users \nSET user_pass = '{}' \nWHERE user_login = '{}';",
        prefix,
        hash,
        sql_quote(username)
    ))
}

// Hashes `password` and wraps the result in the UPDATE statement
pub fn generate_sql_query(
    username: &str,
    password: &str,
    table_prefix: &str,
    variant: HashVariant,
) -> Result<(HashRecord, String)> {
    if username.is_empty() || password.is_empty() {
        return Err(SnippetError::MissingInput("username and password"));
    }
    let record = crypto::generate_wordpress_hash_with_variant(password, variant)?;
    let query = build_sql_query(username, &record.hash_output, table_prefix)?;
    Ok((record, query))
}

/// Build a throwaway PHP file that resets the password of `user_id`
/// through `wp_set_password`. The plaintext ends up in the file.
pub fn build_reset_script(user_id: u64, password: &str) -> Result<String> {
    if password.is_empty() {
        return Err(SnippetError::MissingInput("a password"));
    }

    Ok(format!(
        r#"<?php
require_once('wp-load.php');

// Reset password for user ID {id}
$user_id = {id};
$new_password = '{password}';

wp_set_password($new_password, $user_id);

echo "✅ Password successfully updated!<br>";
echo "User ID: " . $user_id . "<br>";
echo "New Password: " . $new_password . "<br><br>";
echo "<strong style='color: red;'>⚠️ DELETE THIS FILE IMMEDIATELY!</strong>";
?>"#,
        id = user_id,
        password = php_quote(password)
    ))
}
