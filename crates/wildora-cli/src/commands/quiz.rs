use anyhow::{Result, bail};
use colored::Colorize;
use wildora_core::quiz::{QuizKind, QuizProgress};

use crate::bootstrap::AppContext;

pub async fn play(app: &AppContext, kind: QuizKind, answers: &[usize]) -> Result<()> {
    if let Err(e) = app.store.fetch().await {
        println!("⚠️  Playing offline: {}", e);
    }

    let mut session = app.quiz.start(kind)?;
    if answers.len() != session.questions().len() {
        bail!(
            "The {} quiz has {} questions, got {} answers",
            kind,
            session.questions().len(),
            answers.len()
        );
    }

    for &choice in answers {
        if let Some(question) = session.current_question() {
            let picked = question
                .answers
                .get(choice)
                .map(|a| a.text.as_str())
                .unwrap_or("?");
            println!("❓ {}\n   → {}", question.prompt, picked);
        }

        let (progress, outcome) = app.quiz.answer(&mut session, choice).await?;
        let (QuizProgress::Completed(result), Some(outcome)) = (progress, outcome) else {
            continue;
        };

        println!();
        println!(
            "🎤 Score {}/{} ({}%) in {}s",
            result.score,
            result.total_points,
            result.accuracy_percent(),
            result.time_taken_secs
        );
        if let Some(era) = &result.dominant_era {
            println!("✨ Your era: {}", era.bold());
        }
        if let Some(coins) = outcome.coins_earned {
            println!("🪙 +{} SwiftCoins", coins.to_string().yellow());
        }
        for achievement in &outcome.granted {
            println!("🔓 {}", achievement.id);
        }
    }
    Ok(())
}
