// SPDX-License-Identifier: MPL-2.0
use folio_gallery::app::config::{self, Config, DEFAULT_GALLERY_INTERVAL_MS};
use folio_gallery::catalog::Catalog;
use folio_gallery::gallery::{Effect, GalleryController, GalleryState, Message, ScrollLock};
use folio_gallery::i18n::fluent::I18n;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn embedded_gallery() -> (GalleryController, ScrollLock) {
    let catalog = Catalog::embedded().expect("embedded catalog should parse");
    let lock = ScrollLock::new();
    let gallery = GalleryController::new(
        Arc::new(catalog.gallery_collections("/")),
        Duration::from_millis(DEFAULT_GALLERY_INTERVAL_MS),
        lock.clone(),
    );
    (gallery, lock)
}

#[test]
fn lightbox_walkthrough_over_embedded_catalog() {
    let (mut gallery, lock) = embedded_gallery();
    let len = gallery.collections().len_of("swish-strokes");
    assert!(len >= 2, "walkthrough needs at least two images");

    let start = Instant::now();
    assert!(gallery.open("swish-strokes", start));
    assert!(lock.is_locked());

    // Timer path: one advance per elapsed interval, auto-play stays on.
    let interval = Duration::from_millis(DEFAULT_GALLERY_INTERVAL_MS);
    assert!(gallery.tick(start + interval));
    assert_eq!(gallery.active_index(), 1);
    assert!(gallery.is_auto_advancing());

    // Manual path pauses.
    gallery.previous();
    assert_eq!(gallery.active_index(), 0);
    assert!(!gallery.is_auto_advancing());
    assert!(!gallery.tick(start + interval * 10));
    assert_eq!(gallery.active_index(), 0);

    // Resume restarts the interval from the moment of the toggle.
    let resumed = start + interval * 10;
    assert_eq!(gallery.toggle_auto_play(resumed), Some(true));
    assert!(!gallery.tick(resumed + interval - Duration::from_millis(1)));
    assert!(gallery.tick(resumed + interval));
    assert_eq!(gallery.active_index(), 1);

    assert!(gallery.close());
    assert!(!gallery.close());
    assert_eq!(gallery.state(), GalleryState::default());
    assert!(!lock.is_locked());
    assert!(!gallery.tick(resumed + interval * 5));
}

#[test]
fn messages_report_effects() {
    let (mut gallery, _lock) = embedded_gallery();

    assert_eq!(gallery.handle(Message::Open("unknown".into())), Effect::None);
    assert_eq!(
        gallery.handle(Message::Open("carhub".into())),
        Effect::Opened {
            key: "carhub".into()
        }
    );
    assert_eq!(gallery.handle(Message::JumpTo(999)), Effect::None);
    assert_eq!(
        gallery.handle(Message::JumpTo(1)),
        Effect::Navigated { index: 1 }
    );
    assert_eq!(
        gallery.handle(Message::ToggleAutoPlay),
        Effect::AutoPlayChanged(true)
    );
    assert_eq!(gallery.handle(Message::Close), Effect::Closed);
    assert_eq!(gallery.handle(Message::Close), Effect::None);
}

#[test]
fn two_screens_share_one_scroll_lock() {
    let catalog = Catalog::embedded().expect("embedded catalog should parse");
    let collections = Arc::new(catalog.gallery_collections("/"));
    let lock = ScrollLock::new();
    let interval = Duration::from_millis(DEFAULT_GALLERY_INTERVAL_MS);
    let mut home = GalleryController::new(Arc::clone(&collections), interval, lock.clone());
    let mut projects = GalleryController::new(collections, interval, lock.clone());

    let now = Instant::now();
    home.open("carhub", now);
    projects.open("culturajoin", now);
    home.close();
    assert!(lock.is_locked());

    drop(projects);
    assert!(!lock.is_locked());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    std::fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write config file");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-close"), "Close");

    std::fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write config file");
    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-close"), "Fermer");
}

#[test]
fn every_locale_translates_catalog_labels() {
    let catalog = Catalog::embedded().expect("embedded catalog should parse");
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for project in &catalog.projects {
            assert!(!i18n.tr(project.kind.i18n_key()).starts_with("MISSING"));
            for (label_key, _) in project.links.iter() {
                assert!(!i18n.tr(label_key).starts_with("MISSING"), "{lang}: {label_key}");
            }
        }
    }
}

#[test]
fn every_locale_translates_screen_sections() {
    let keys = [
        "nav-about",
        "about-empty",
        "about-experience",
        "about-skills",
        "about-connect",
        "freelance-services",
        "freelance-workflow",
        "freelance-testimonials",
        "freelance-faq",
        "notification-asset-base-missing",
    ];
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in keys {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{lang}: {key}");
        }
        let location = i18n.tr_with_args("about-location", &[("location", "Gampaha")]);
        assert!(location.contains("Gampaha"), "{lang}: {location}");
    }
}

#[test]
fn custom_catalog_file_drives_collections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("projects.toml");
    std::fs::write(
        &path,
        r#"
        [[projects]]
        id = 1
        slug = "solo"
        name = "Solo"
        cover = "solo.png"
        kind = "app"
        industry = "Testing"
        images = ["/shots/one.png"]
        "#,
    )
    .expect("Failed to write catalog");

    let (catalog, warning) = Catalog::load_or_embedded(Some(&path));
    assert!(warning.is_none());

    let collections = catalog.gallery_collections("/srv/site/");
    assert_eq!(
        collections.get("solo"),
        Some(&["/srv/site/shots/one.png".to_string()][..])
    );

    let mut gallery = GalleryController::new(
        Arc::new(collections),
        Duration::from_millis(DEFAULT_GALLERY_INTERVAL_MS),
        ScrollLock::new(),
    );
    gallery.open("solo", Instant::now());
    gallery.next();
    gallery.previous();
    assert_eq!(gallery.active_index(), 0);
}
