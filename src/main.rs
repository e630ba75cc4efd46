//! snaplink — a minimal client for resolving short-video share links into
//! direct media URLs, with a bounded local parse history.
//!
//! Entry point: runs an interactive console demo of the components.

use snaplink::types::media::{MediaAuthor, ParsedMedia};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               snaplink v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║    Share-link resolver client with local parse history     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_storage();
    demo_history_store();
    demo_auth_store();
    demo_share_link();
    demo_display();
    demo_parse_envelope();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn sample_media(video_url: &str, title: &str) -> ParsedMedia {
    ParsedMedia {
        video_url: video_url.to_string(),
        title: title.to_string(),
        cover_url: "https://cdn.example.com/cover.jpg".to_string(),
        author: MediaAuthor {
            uid: "u-1".to_string(),
            name: "demo author".to_string(),
            avatar: String::new(),
        },
        ..Default::default()
    }
}

fn demo_storage() {
    use snaplink::storage::{KeyValueStore, MemoryStore, SqliteStore};
    section("Storage Backends");

    let mut mem = MemoryStore::new();
    mem.write("greeting", "\"hello\"").unwrap();
    println!("  MemoryStore: wrote + read back {:?}", mem.read("greeting").unwrap());

    let mut db = SqliteStore::open_in_memory().expect("Failed to open database");
    db.write("greeting", "\"hello\"").unwrap();
    println!("  SqliteStore: wrote + read back {:?}", db.read("greeting").unwrap());
    db.delete("greeting").unwrap();
    println!("  SqliteStore: after delete -> {:?}", db.read("greeting").unwrap());
    println!("  ✓ Storage backends OK");
    println!();
}

fn demo_history_store() {
    use snaplink::storage::MemoryStore;
    use snaplink::stores::history_store::{HistoryStore, HistoryStoreTrait, MAX_COUNT};
    section("History Store");

    let mut store = HistoryStore::new(MemoryStore::new());

    store.add(sample_media("https://cdn.example.com/a.mp4", "first")).unwrap();
    store.add(sample_media("https://cdn.example.com/b.mp4", "second")).unwrap();
    println!("  Added 2 entries, front = {:?}", store.list()[0].title);

    store.add(sample_media("https://cdn.example.com/a.mp4", "first again")).unwrap();
    let list = store.list();
    println!("  Re-added first: length = {}, front = {:?} (promoted, not duplicated)", list.len(), list[0].title);

    for i in 0..25 {
        store.add(sample_media(&format!("https://cdn.example.com/{}.mp4", i), "bulk")).unwrap();
    }
    println!("  Added 25 more: length capped at {} (MAX_COUNT = {})", store.list().len(), MAX_COUNT);

    let remaining = store.remove_at(0).unwrap();
    println!("  Removed index 0: length = {}", remaining.len());

    store.clear().unwrap();
    println!("  Cleared: length = {}", store.list().len());
    println!("  ✓ HistoryStore OK");
    println!();
}

fn demo_auth_store() {
    use snaplink::storage::MemoryStore;
    use snaplink::stores::auth_store::{AuthStore, AuthStoreTrait};
    use snaplink::types::auth::UserInfo;
    section("Auth Store");

    let mut auth = AuthStore::new(MemoryStore::new());
    println!("  Logged in: {}", auth.is_logged_in());

    auth.login(UserInfo {
        nickname: "demo user".to_string(),
        ..Default::default()
    })
    .unwrap();
    println!("  After login: logged in = {}, nickname = {:?}",
        auth.is_logged_in(),
        auth.user_info().map(|u| u.nickname));

    auth.logout().unwrap();
    println!("  After logout: logged in = {}", auth.is_logged_in());
    println!("  ✓ AuthStore OK");
    println!();
}

fn demo_share_link() {
    use snaplink::services::share_link::extract_share_link;
    section("Share-Link Extraction");

    let blurb = "7.43 pLo:/ check this out https://v.example.com/abc123/ open the app";
    println!("  Input:  {:?}", blurb);
    println!("  Link:   {:?}", extract_share_link(blurb));
    println!("  No link: {:?}", extract_share_link("nothing to see"));
    println!("  ✓ Share-link extraction OK");
    println!();
}

fn demo_display() {
    use snaplink::services::display::{display_time, history_view};
    section("History View Formatting");

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64;
    println!("  Now renders as: {}", display_time(now));

    let view = history_view(vec![sample_media("https://cdn.example.com/a.mp4", "first")]);
    println!("  View item: {:?} at {}", view[0].media.title, view[0].display_time);
    println!("  ✓ Display formatting OK");
    println!();
}

fn demo_parse_envelope() {
    use snaplink::services::parse_client::ParseResponse;
    section("Parse Envelope");

    let ok = r#"{"code": 200, "msg": "ok", "data": {"video_url": "https://cdn.example.com/v.mp4", "title": "demo"}}"#;
    let envelope: ParseResponse = serde_json::from_str(ok).unwrap();
    println!("  Success envelope -> title = {:?}", envelope.into_media().map(|m| m.title));

    let err = r#"{"code": 500, "msg": "unsupported link"}"#;
    let envelope: ParseResponse = serde_json::from_str(err).unwrap();
    println!("  Error envelope   -> {:?}", envelope.into_media().err());
    println!("  ✓ Parse envelope OK");
    println!();
}

fn demo_app_core() {
    use snaplink::app::App;
    use snaplink::stores::history_store::HistoryStoreTrait;
    section("App Core");

    let dir = std::env::temp_dir().join("snaplink-demo");
    let mut app = App::with_data_dir(&dir);
    app.history.add(sample_media("https://cdn.example.com/a.mp4", "persisted")).unwrap();
    println!("  Persisted 1 entry under {}", dir.display());

    let reopened = App::with_data_dir(&dir);
    println!("  Reopened: {} entry(s) on disk", reopened.history.list().len());

    let _ = std::fs::remove_dir_all(&dir);
    println!("  ✓ App Core OK");
}
