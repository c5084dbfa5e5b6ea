use super::{error::UtilError, home_dir, prompt_cli};
use crate::error::ListerError;
use alloy::signers::local::PrivateKeySigner;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::info;

pub const DEFAULT_ACCOUNT: &str = "rentable-deployer";

#[derive(Debug, Clone, clap::Args)]
pub struct AccountArgs {
    /// Name of the keystore holding the deployer account.
    #[arg(long, default_value = DEFAULT_ACCOUNT, conflicts_with = "private_key")]
    pub account: String,

    /// Directory holding keystore files. Defaults to ~/.foundry/keystores.
    #[arg(long, value_name = "DIR")]
    pub keystore_dir: Option<PathBuf>,

    /// Keystore password. Prompted for when omitted.
    #[arg(long, env = "KEYSTORE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Raw private key to sign with instead of a keystore.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

impl AccountArgs {
    pub fn load_signer(&self) -> Result<PrivateKeySigner, ListerError> {
        if let Some(key) = &self.private_key {
            return Ok(PrivateKeySigner::from_str(key)?);
        }

        let dir = match &self.keystore_dir {
            Some(dir) => dir.to_owned(),
            None => default_keystore_dir()?,
        };
        let path = keystore_path(&dir, &self.account)?;
        let password = match &self.password {
            Some(password) => password.to_owned(),
            None => prompt_cli(format!("Enter password for \"{}\":", self.account))?,
        };
        let signer = PrivateKeySigner::decrypt_keystore(&path, password)?;
        info!("loaded account {} ({})", self.account, signer.address());
        Ok(signer)
    }
}

pub fn default_keystore_dir() -> Result<PathBuf, UtilError> {
    Ok(home_dir()?.join(".foundry").join("keystores"))
}

/// Finds `<dir>/<name>`, falling back to `<dir>/<name>.json`.
pub fn keystore_path(dir: &Path, name: &str) -> Result<PathBuf, UtilError> {
    [dir.join(name), dir.join(format!("{name}.json"))]
        .into_iter()
        .find(|path| path.is_file())
        .ok_or_else(|| UtilError::KeystoreNotFound {
            name: name.to_owned(),
            dir: dir.to_owned(),
        })
}
