//! Subcommand implementations

use anyhow::{bail, Context};
use tk_core::{FixedClock, SecretKey, TokenService};
use tk_shared::AppConfig;

fn secret(config: &AppConfig) -> anyhow::Result<SecretKey> {
    SecretKey::from_config(&config.token).context("cannot build signing secret")
}

pub fn mint(config: &AppConfig, subject: i64, issued_at: Option<i64>) -> anyhow::Result<()> {
    let secret = secret(config)?;
    let token = match issued_at {
        Some(at) => TokenService::with_clock(secret, FixedClock(at)).mint(subject)?,
        None => TokenService::new(secret).mint(subject)?,
    };
    println!("{}", token);
    Ok(())
}

pub fn verify(config: &AppConfig, token: &str, check_expiry: bool, json: bool) -> anyhow::Result<()> {
    let service = TokenService::new(secret(config)?);

    if !check_expiry && !json {
        match service.verify(token) {
            Some(subject) => println!("{}", subject),
            None => bail!("credential rejected"),
        }
        return Ok(());
    }

    let Some(claims) = service.verify_claims(token) else {
        bail!("credential rejected");
    };
    if check_expiry && claims.is_expired_at(service.now()) {
        bail!("credential expired at {}", claims.exp);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&claims)?);
    } else {
        println!("{}", claims.sub);
    }
    Ok(())
}
