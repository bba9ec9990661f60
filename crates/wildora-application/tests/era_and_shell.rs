mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{MockActivityApi, MockProfileApi, profile, settle};
use wildora_application::{
    AchievementService, EasterEggService, EraSwitcher, NavigationShell, NotificationCenter,
    ProfileStore,
};
use wildora_core::Result;
use wildora_core::achievement::SNAKE_FINDER;
use wildora_core::activity::ActivityApi;
use wildora_core::era::FontProvider;
use wildora_core::navigation::{AuthUser, Route, ShellHeader};
use wildora_core::notification::{NotificationEvent, NotificationTiming};

#[derive(Default)]
struct RecordingFonts {
    requested: Mutex<Vec<String>>,
}

impl FontProvider for RecordingFonts {
    fn ensure_loaded(&self, font_family: &str) -> Result<bool> {
        let mut requested = self.requested.lock().unwrap();
        let fresh = !requested.iter().any(|f| f == font_family);
        requested.push(font_family.to_string());
        Ok(fresh)
    }
}

async fn loaded_store(api: &Arc<MockProfileApi>) -> Arc<ProfileStore> {
    let store = Arc::new(ProfileStore::new(api.clone()));
    store.fetch().await.unwrap();
    store
}

#[tokio::test]
async fn switch_sets_theme_loads_font_and_saves_favorite() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let store = loaded_store(&api).await;
    let fonts = Arc::new(RecordingFonts::default());
    let switcher = EraSwitcher::new(store.clone(), fonts.clone());

    let ctx = switcher.switch("folklore").await.unwrap();

    assert_eq!(ctx.era_id(), "folklore");
    assert_eq!(switcher.context().await, ctx);
    assert_eq!(*fonts.requested.lock().unwrap(), vec!["Crimson Text"]);
    assert_eq!(store.profile().await.unwrap().favorite_era, "folklore");
}

#[tokio::test]
async fn switch_survives_failed_profile_update() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let store = loaded_store(&api).await;
    api.fail_updates(true);
    let switcher = EraSwitcher::new(store.clone(), Arc::new(RecordingFonts::default()));

    let ctx = switcher.switch("red").await.unwrap();

    assert_eq!(ctx.era_id(), "red");
    assert_eq!(store.profile().await.unwrap().favorite_era, "midnights");
}

#[tokio::test]
async fn unknown_era_is_rejected() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let store = loaded_store(&api).await;
    let switcher = EraSwitcher::new(store, Arc::new(RecordingFonts::default()));

    assert!(switcher.switch("debut").await.unwrap_err().is_validation());
    assert_eq!(api.updates(), 0);
    assert_eq!(switcher.context().await.era_id(), "midnights");
}

#[tokio::test]
async fn sync_from_profile_applies_favorite_era() {
    let mut stored = profile(0, &[]);
    stored.favorite_era = "lover".to_string();
    let api = Arc::new(MockProfileApi::new(Some(stored)));
    let store = loaded_store(&api).await;
    let switcher = EraSwitcher::new(store, Arc::new(RecordingFonts::default()));

    assert_eq!(switcher.sync_from_profile().await.era_id(), "lover");
}

#[tokio::test]
async fn finding_an_egg_awards_coins_then_badge_once() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let store = loaded_store(&api).await;
    let activity: Arc<dyn ActivityApi> = Arc::new(MockActivityApi::new(0));
    let achievements = Arc::new(AchievementService::new(store.clone(), activity));
    let eggs = EasterEggService::new(store.clone(), achievements);

    assert_eq!(eggs.find("snake").await.unwrap(), None);

    eggs.set_active(true).await;
    let found = eggs.find("snake").await.unwrap().unwrap();
    assert!(found.coins_awarded);
    assert_eq!(found.badge.map(|a| a.id.as_str()), Some(SNAKE_FINDER));

    let updates = api.updates.lock().unwrap().clone();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].swift_coins, Some(20));
    assert!(updates[1].achievement_badges.is_some());

    assert_eq!(eggs.find("snake").await.unwrap(), None);
    assert_eq!(eggs.hidden_eggs().await.len(), 3);
    settle().await;
}

#[test]
fn flushed_egg_badge_record_survives_runtime_shutdown() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let activity = Arc::new(MockActivityApi::new(0).with_record_delay(Duration::from_millis(20)));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    runtime.block_on(async {
        let store = loaded_store(&api).await;
        let activity_port: Arc<dyn ActivityApi> = activity.clone();
        let achievements = Arc::new(AchievementService::new(store.clone(), activity_port));
        let eggs = EasterEggService::new(store, achievements.clone());

        eggs.set_active(true).await;
        let found = eggs.find("snake").await.unwrap().unwrap();
        assert!(found.badge.is_some());
        assert!(activity.recorded_ids().is_empty());

        achievements.flush().await;
    });
    drop(runtime);

    assert_eq!(activity.recorded_ids(), vec![SNAKE_FINDER.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn egg_badge_is_queued_as_notification() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let store = loaded_store(&api).await;
    let activity: Arc<dyn ActivityApi> = Arc::new(MockActivityApi::new(0));
    let achievements = Arc::new(AchievementService::new(store.clone(), activity));
    let (center, mut events) = NotificationCenter::spawn(NotificationTiming::default());
    let eggs = EasterEggService::new(store, achievements).with_notifications(center);

    eggs.set_active(true).await;
    eggs.find("snake").await.unwrap();
    drop(eggs);

    let mut shown = Vec::new();
    while let Some(event) = events.recv().await {
        if let NotificationEvent::Shown(a) = event {
            shown.push(a.id);
        }
    }
    assert_eq!(shown, vec![SNAKE_FINDER.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn hints_follow_the_delay() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let store = loaded_store(&api).await;
    let activity: Arc<dyn ActivityApi> = Arc::new(MockActivityApi::new(0));
    let eggs = EasterEggService::new(
        store.clone(),
        Arc::new(AchievementService::new(store, activity)),
    );
    eggs.set_active(true).await;

    let start = tokio::time::Instant::now();
    let hints = eggs.hints().await;

    assert_eq!(hints.len(), 4);
    assert_eq!(start.elapsed().as_secs(), 2);
}

#[tokio::test]
async fn navigation_plays_transition_only_on_change() {
    let api = Arc::new(MockProfileApi::new(Some(profile(0, &[]))));
    let shell = NavigationShell::new(Arc::new(ProfileStore::new(api)));

    let transition = shell.navigate("/quiz").await.unwrap().unwrap();
    assert_eq!(transition.duration_secs, 0.6);
    assert_eq!(transition.ease, "power2.out");
    assert_eq!(shell.route().await, Route::Quiz);

    assert!(shell.navigate("/quiz").await.unwrap().is_none());
    assert!(shell.navigate("/nowhere").await.unwrap_err().is_not_found());
    assert_eq!(shell.route().await, Route::Quiz);
}

#[tokio::test]
async fn header_reflects_auth_and_profile() {
    let api = Arc::new(MockProfileApi::new(Some(profile(42, &[]))));
    let store = Arc::new(ProfileStore::new(api));
    let shell = NavigationShell::new(store.clone());

    assert_eq!(shell.header().await, ShellHeader::Anonymous);

    shell
        .sign_in(AuthUser {
            id: "user-1".to_string(),
            given_name: None,
            picture: None,
        })
        .await;
    assert_eq!(
        shell.header().await,
        ShellHeader::SignedIn {
            name: "User".to_string()
        }
    );

    store.fetch().await.unwrap();
    match shell.header().await {
        ShellHeader::SignedInWithProfile {
            swift_coins, theme, ..
        } => {
            assert_eq!(swift_coins, 42);
            assert_eq!(theme.id, "midnights");
        }
        other => panic!("unexpected header {:?}", other),
    }

    shell.sign_out().await;
    assert_eq!(shell.header().await, ShellHeader::Anonymous);
    assert!(store.profile().await.is_none());
}
