use anyhow::{Context, Result};
use colored::Colorize;

use super::print_profile;
use crate::bootstrap::AppContext;

pub async fn show(app: &AppContext, json: bool) -> Result<()> {
    let profile = app.store.fetch().await.context("Failed to load profile")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }
    Ok(())
}

pub async fn add_coins(app: &AppContext, amount: u64) -> Result<()> {
    app.store.fetch().await.context("Failed to load profile")?;
    let profile = app
        .store
        .add_swift_coins(amount)
        .await
        .context("Failed to add coins")?
        .context("No profile loaded")?;
    println!(
        "✅ Added {} SwiftCoins, balance {}",
        amount,
        profile.swift_coins.to_string().yellow()
    );
    Ok(())
}

pub async fn set_era(app: &AppContext, era_id: &str) -> Result<()> {
    app.store.fetch().await.context("Failed to load profile")?;
    let ctx = app.eras.switch(era_id).await?;
    println!("🎨 Switched to {}", ctx.theme.name.bold());
    for (name, value) in ctx.css_variables() {
        println!("  {}: {}", name, value);
    }
    Ok(())
}
