use anyhow::Result;
use colored::Colorize;

use crate::bootstrap::AppContext;

pub async fn run(app: &AppContext, force: bool, find: Option<&str>) -> Result<()> {
    let active = if force {
        app.eggs.set_active(true).await;
        true
    } else {
        app.eggs.visit().await
    };
    if !active {
        println!("🥚 No easter eggs this visit. Try again!");
        return Ok(());
    }

    for hint in app.eggs.hints().await {
        println!("🔍 {}", hint);
    }

    let Some(egg_id) = find else {
        return Ok(());
    };
    if let Err(e) = app.store.fetch().await {
        println!("⚠️  Rewards need a profile: {}", e);
    }
    match app.eggs.find(egg_id).await? {
        Some(found) => {
            println!("🎉 {}", found.reward.description.bold());
            if found.coins_awarded {
                println!("🪙 +{} SwiftCoins", found.reward.coins.to_string().yellow());
            }
            if let Some(badge) = found.badge {
                println!("🏅 {}", badge.name);
            }
        }
        None => println!("Nothing hidden under '{}'", egg_id),
    }
    Ok(())
}
