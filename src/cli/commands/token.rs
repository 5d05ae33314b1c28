use clap::Subcommand;
use serde_json::json;

use crate::auth::{generate_admin_token, hash_admin_token, normalize_admin_token, AdminTokenHash};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Generate a new random admin token")]
    Generate,

    #[command(about = "Print the stored digest for an admin token")]
    Hash {
        #[arg(help = "Plaintext admin token")]
        token: String,
    },
}

pub fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Generate => {
            let token = generate_admin_token();
            match output_format {
                OutputFormat::Text => println!("{}", token),
                OutputFormat::Json => {
                    output_success(&output_format, "Generated admin token", Some(json!({ "token": token })))?
                }
            }
            Ok(())
        }
        TokenCommands::Hash { token } => {
            let digest = hash_for_storage(&token)?;
            match output_format {
                OutputFormat::Text => println!("{}", digest.as_str()),
                OutputFormat::Json => {
                    output_success(&output_format, "Hashed admin token", Some(json!({ "hash": digest.as_str() })))?
                }
            }
            Ok(())
        }
    }
}

/// Same normalization the server applies before hashing a submitted token
fn hash_for_storage(token: &str) -> anyhow::Result<AdminTokenHash> {
    let token = normalize_admin_token(token).ok_or_else(|| anyhow::anyhow!("Admin token must not be blank"))?;
    Ok(hash_admin_token(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_tokens_hash_like_the_server_sees_them() {
        let digest = hash_for_storage("  t \n").unwrap();
        assert_eq!(digest, hash_admin_token("t"));
        assert!(digest.verify("t"));
    }

    #[test]
    fn blank_tokens_are_refused() {
        assert!(hash_for_storage("   ").is_err());
    }
}
