//! End-to-end flows over in-memory storage

use crate::blocks::{append_block, BlockKind};
use crate::document::render_current_page;
use crate::models::WorkspaceState;
use crate::storage::{storage_key, KeyValueStore, MemoryStorage};
use crate::workspace::{load_state, WorkspaceStore};

fn body(doc: &str) -> &str {
    let start = doc.find("<body>\n").unwrap() + "<body>\n".len();
    let end = doc.find("\n</body>").unwrap();
    &doc[start..end]
}

fn title(doc: &str) -> &str {
    let start = doc.find("<title>").unwrap() + "<title>".len();
    let end = doc.find("</title>").unwrap();
    &doc[start..end]
}

#[test]
fn test_build_and_export_page() {
    let storage = MemoryStorage::new();
    let mut store = WorkspaceStore::open(&storage, "default");

    append_block(&mut store, "hero").unwrap();
    append_block(&mut store, "footer").unwrap();

    let doc = render_current_page(store.state()).unwrap();
    let expected = format!("{}{}", BlockKind::Hero.render(), BlockKind::Footer.render());
    assert_eq!(body(&doc), expected);
    assert_eq!(title(&doc), "Page Builder");

    store.update_settings(|s| s.brand_name = String::new()).unwrap();
    let doc = render_current_page(store.state()).unwrap();
    assert_eq!(title(&doc), "Landing");

    // A fresh session sees the same page
    let reloaded = load_state(&storage, "default");
    assert_eq!(reloaded.pages[0].html, expected);
}

#[test]
fn test_rename_forks_workspace() {
    let storage = MemoryStorage::new();
    let mut store = WorkspaceStore::open(&storage, "shopA");
    store.update_settings(|s| s.workspace = "shopA".to_string()).unwrap();
    append_block(&mut store, "hero").unwrap();
    let before_rename = store.state().clone();

    store.update_settings(|s| s.workspace = "shopB".to_string()).unwrap();
    append_block(&mut store, "footer").unwrap();

    assert_eq!(load_state(&storage, "shopA"), before_rename);
    let forked = load_state(&storage, "shopB");
    assert_eq!(forked.settings.workspace, "shopB");
    assert!(forked.pages[0].html.ends_with(&BlockKind::Footer.render()));
}

#[test]
fn test_reset_then_reload_gives_defaults() {
    let storage = MemoryStorage::new();
    let mut store = WorkspaceStore::open(&storage, "default");
    append_block(&mut store, "pricing").unwrap();
    assert!(storage.contains(&storage_key("default")));

    store.reset("default").unwrap();
    assert!(!storage.contains(&storage_key("default")));
    assert_eq!(store.state(), &WorkspaceState::default());
    assert_eq!(load_state(&storage, "default"), WorkspaceState::default());
}

#[test]
fn test_load_is_idempotent() {
    let storage = MemoryStorage::new();
    let mut store = WorkspaceStore::open(&storage, "default");
    append_block(&mut store, "gallery").unwrap();
    store.add_page("Tentang").unwrap();

    let first = load_state(&storage, "default");
    let second = load_state(&storage, "default");
    assert_eq!(first, second);
    assert_eq!(&first, store.state());

    // Persisting an unchanged aggregate writes the same record
    let raw = storage.load(&storage_key("default")).unwrap();
    store.persist().unwrap();
    assert_eq!(storage.load(&storage_key("default")).unwrap(), raw);
}

#[test]
fn test_blocks_land_on_switched_page() {
    let storage = MemoryStorage::new();
    let mut store = WorkspaceStore::open(&storage, "default");
    let about = store.add_page("Tentang").unwrap().unwrap();
    store.switch_page(&about).unwrap();
    append_block(&mut store, "contact").unwrap();

    let state = load_state(&storage, "default");
    assert_eq!(state.current_page_id, about);
    assert!(state.pages[0].html.is_empty());
    assert_eq!(state.current_page().unwrap().html, BlockKind::Contact.render());
}
