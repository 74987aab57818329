//! Workspace Store
//!
//! Holds the workspace aggregate, applies whole-aggregate updates and
//! writes the result to the persistence port after every change.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config;
use crate::models::{
    Customer, CustomerDraft, Lead, LeadStage, MediaFile, Order, OrderDraft, OrderStatus, Page,
    Product, ProductDraft, Settings, WorkspaceState,
};
use crate::storage::{storage_key, KeyValueStore, StorageError};

/// Read the aggregate persisted for `workspace`
///
/// Never fails: a missing, unreadable or unparsable record yields the default
/// aggregate. Anything else goes through `restore_state`.
pub fn load_state<S: KeyValueStore>(storage: &S, workspace: &str) -> WorkspaceState {
    let key = storage_key(workspace);
    let raw = match storage.load(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no persisted workspace under {}", key);
            return WorkspaceState::default();
        }
        Err(e) => {
            warn!("reading {} failed, using defaults: {}", key, e);
            return WorkspaceState::default();
        }
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(record)) => restore_state(record),
        Ok(_) => {
            warn!("persisted workspace {} is not an object, using defaults", key);
            WorkspaceState::default()
        }
        Err(e) => {
            warn!("persisted workspace {} is corrupted, using defaults: {}", key, e);
            WorkspaceState::default()
        }
    }
}

/// Merge a stored record over the default aggregate, field by field
///
/// A field with the wrong shape keeps its default; a list keeps the entries
/// that parse. The other fields are restored regardless, so one bad value
/// never costs the whole workspace.
pub fn restore_state(mut record: Map<String, Value>) -> WorkspaceState {
    let mut state = WorkspaceState::default();
    merge_list(&mut record, "pages", &mut state.pages);
    merge_field(&mut record, "currentPageId", &mut state.current_page_id);
    merge_field(&mut record, "selectedElement", &mut state.selected_element);
    merge_list(&mut record, "products", &mut state.products);
    merge_list(&mut record, "orders", &mut state.orders);
    merge_list(&mut record, "customers", &mut state.customers);
    merge_list(&mut record, "media", &mut state.media);
    merge_settings(&mut record, &mut state.settings);
    merge_list(&mut record, "apps", &mut state.apps);
    merge_list(&mut record, "crm", &mut state.crm);

    if state.pages.is_empty() {
        warn!("persisted workspace has no pages, restoring the default page");
        let defaults = WorkspaceState::default();
        state.pages = defaults.pages;
        state.current_page_id = defaults.current_page_id;
    }
    state
}

fn merge_field<T: DeserializeOwned>(record: &mut Map<String, Value>, key: &str, slot: &mut T) {
    let Some(value) = record.remove(key) else {
        return;
    };
    match serde_json::from_value(value) {
        Ok(parsed) => *slot = parsed,
        Err(e) => warn!("ignoring persisted {}: {}", key, e),
    }
}

fn merge_list<T: DeserializeOwned>(record: &mut Map<String, Value>, key: &str, slot: &mut Vec<T>) {
    let items = match record.remove(key) {
        None => return,
        Some(Value::Array(items)) => items,
        Some(_) => {
            warn!("ignoring persisted {}: not a list", key);
            return;
        }
    };
    let total = items.len();
    *slot = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if slot.len() < total {
        warn!("dropped {} unreadable {} entries", total - slot.len(), key);
    }
}

fn merge_settings(record: &mut Map<String, Value>, slot: &mut Settings) {
    let mut fields = match record.remove("settings") {
        None => return,
        Some(Value::Object(fields)) => fields,
        Some(_) => {
            warn!("ignoring persisted settings: not an object");
            return;
        }
    };
    // Every settings field is a string; anything else keeps its default
    fields.retain(|name, value| {
        let keep = value.is_string();
        if !keep {
            warn!("ignoring persisted settings.{}", name);
        }
        keep
    });
    match serde_json::from_value(Value::Object(fields)) {
        Ok(settings) => *slot = settings,
        Err(e) => warn!("ignoring persisted settings: {}", e),
    }
}

/// Time-based id (`<prefix>-<millis>`), suffixed until it is unused
pub fn unique_id<'a>(prefix: &str, millis: i64, existing: impl IntoIterator<Item = &'a str>) -> String {
    let taken: Vec<&str> = existing.into_iter().collect();
    let is_taken = |candidate: &str| taken.iter().any(|id| *id == candidate);
    let base = format!("{}-{}", prefix, millis);
    if !is_taken(&base) {
        return base;
    }
    (1..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or(base)
}

/// Workspace the previous session ended in (`default` when unknown)
pub fn last_workspace<S: KeyValueStore>(storage: &S) -> String {
    match storage.load(config::LAST_WORKSPACE_KEY) {
        Ok(Some(name)) if !name.trim().is_empty() => name,
        _ => config::DEFAULT_WORKSPACE.to_string(),
    }
}

pub fn remember_workspace<S: KeyValueStore>(storage: &S, name: &str) -> Result<(), StorageError> {
    storage.save(config::LAST_WORKSPACE_KEY, name)
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Single owner of the workspace aggregate
pub struct WorkspaceStore<S: KeyValueStore> {
    storage: S,
    state: WorkspaceState,
}

impl<S: KeyValueStore> WorkspaceStore<S> {
    /// Load `workspace` from `storage` (defaults when nothing is stored)
    pub fn open(storage: S, workspace: &str) -> Self {
        let state = load_state(&storage, workspace);
        Self { storage, state }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    /// Replace the aggregate with `update(current)` and persist it
    ///
    /// The in-memory aggregate is always replaced. An `Err` means the new
    /// aggregate was not saved; it is still the live state.
    pub fn apply<F>(&mut self, update: F) -> Result<(), StorageError>
    where
        F: FnOnce(WorkspaceState) -> WorkspaceState,
    {
        let before = self.state.settings.workspace.clone();
        let current = std::mem::take(&mut self.state);
        self.state = update(current);
        if self.state.settings.workspace != before {
            self.remember_current();
        }
        self.persist()
    }

    /// Point the next session at the current workspace; failures only warn
    fn remember_current(&self) {
        if let Err(e) = remember_workspace(&self.storage, &self.state.settings.workspace) {
            warn!("last workspace not remembered: {}", e);
        }
    }

    /// Write the whole aggregate under the key of its own `settings.workspace`
    ///
    /// Renaming the workspace therefore writes to a new bucket and leaves the
    /// old one as it was.
    pub fn persist(&self) -> Result<(), StorageError> {
        let key = storage_key(&self.state.settings.workspace);
        let json = serde_json::to_string(&self.state)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.save(&key, &json).map_err(|e| {
            warn!("workspace not saved: {}", e);
            e
        })?;
        debug!("saved {} ({} bytes)", key, json.len());
        Ok(())
    }

    /// Delete the record stored for `workspace` and fall back to defaults
    pub fn reset(&mut self, workspace: &str) -> Result<(), StorageError> {
        self.state = WorkspaceState::default();
        let key = storage_key(workspace);
        self.storage.remove(&key).map_err(|e| {
            warn!("failed to remove {}: {}", key, e);
            e
        })
    }

    /// Swap in the aggregate stored for `name` and stay in that bucket
    ///
    /// A bucket that was never written starts from the defaults, renamed to
    /// `name` so later writes land under it.
    pub fn open_workspace(&mut self, name: &str) -> Result<(), StorageError> {
        let name = name.trim();
        let mut state = load_state(&self.storage, name);
        if !name.is_empty() {
            state.settings.workspace = name.to_string();
        }
        self.state = state;
        remember_workspace(&self.storage, &self.state.settings.workspace)
    }

    // ========================
    // Pages
    // ========================

    pub fn switch_page(&mut self, page_id: &str) -> Result<(), StorageError> {
        let page_id = page_id.to_string();
        self.apply(move |mut state| {
            state.current_page_id = page_id;
            state
        })
    }

    /// Append an empty page and make it active; blank names are ignored
    pub fn add_page(&mut self, name: &str) -> Result<Option<String>, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let id = unique_id("page", now_millis(), self.state.pages.iter().map(|p| p.id.as_str()));
        let page = Page::new(id.clone(), name);
        let current = id.clone();
        self.apply(move |mut state| {
            state.pages.push(page);
            state.current_page_id = current;
            state
        })?;
        Ok(Some(id))
    }

    pub fn select_element(&mut self, block_type: Option<String>) -> Result<(), StorageError> {
        self.apply(move |mut state| {
            state.selected_element = block_type;
            state
        })
    }

    // ========================
    // Catalogue and sales
    // ========================

    /// Insert a product; a non-finite price is refused (`Ok(None)`)
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Option<String>, StorageError> {
        if !draft.price.is_finite() {
            warn!("refusing product {:?} with price {}", draft.name, draft.price);
            return Ok(None);
        }
        let millis = now_millis();
        let id = unique_id("product", millis, self.state.products.iter().map(|p| p.id.as_str()));
        let sku = if draft.sku.trim().is_empty() {
            format!("SKU-{}", millis)
        } else {
            draft.sku
        };
        let category = if draft.category.trim().is_empty() {
            config::DEFAULT_PRODUCT_CATEGORY.to_string()
        } else {
            draft.category
        };
        let product = Product {
            id: id.clone(),
            name: draft.name,
            price: draft.price,
            sku,
            category,
            image: draft.image,
            description: draft.description,
        };
        self.apply(move |mut state| {
            state.products.push(product);
            state
        })?;
        Ok(Some(id))
    }

    /// Insert an order; a non-finite total is refused (`Ok(None)`)
    pub fn add_order(&mut self, draft: OrderDraft) -> Result<Option<String>, StorageError> {
        if !draft.total.is_finite() {
            warn!("refusing order for {:?} with total {}", draft.customer, draft.total);
            return Ok(None);
        }
        let id = unique_id("order", now_millis(), self.state.orders.iter().map(|o| o.id.as_str()));
        let order = Order {
            id: id.clone(),
            date: draft.date,
            customer: draft.customer,
            product: draft.product,
            qty: draft.qty,
            total: draft.total,
            method: draft.method,
            status: draft.status,
        };
        self.apply(move |mut state| {
            state.orders.push(order);
            state
        })?;
        Ok(Some(id))
    }

    pub fn set_order_status(&mut self, order_id: &str, status: OrderStatus) -> Result<(), StorageError> {
        if !self.state.orders.iter().any(|o| o.id == order_id) {
            return Ok(());
        }
        self.apply(|mut state| {
            if let Some(order) = state.orders.iter_mut().find(|o| o.id == order_id) {
                order.status = status;
            }
            state
        })
    }

    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<String, StorageError> {
        let id = unique_id("customer", now_millis(), self.state.customers.iter().map(|c| c.id.as_str()));
        let customer = Customer {
            id: id.clone(),
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            note: draft.note,
        };
        self.apply(move |mut state| {
            state.customers.push(customer);
            state
        })?;
        Ok(id)
    }

    // ========================
    // Media
    // ========================

    pub fn add_media(&mut self, file: MediaFile) -> Result<(), StorageError> {
        self.apply(move |mut state| {
            state.media.push(file);
            state
        })
    }

    /// Remove a media file and clear settings references to it
    pub fn remove_media(&mut self, media_id: &str) -> Result<(), StorageError> {
        if !self.state.media.iter().any(|m| m.id == media_id) {
            return Ok(());
        }
        self.apply(|mut state| {
            state.media.retain(|m| m.id != media_id);
            if state.settings.logo == media_id {
                state.settings.logo.clear();
            }
            if state.settings.favicon == media_id {
                state.settings.favicon.clear();
            }
            if state.settings.qris_img == media_id {
                state.settings.qris_img.clear();
            }
            state
        })
    }

    /// Next free media id
    pub fn next_media_id(&self) -> String {
        unique_id("media", now_millis(), self.state.media.iter().map(|m| m.id.as_str()))
    }

    // ========================
    // Settings, apps, CRM
    // ========================

    pub fn update_settings<F>(&mut self, update: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Settings),
    {
        self.apply(move |mut state| {
            update(&mut state.settings);
            state
        })
    }

    /// Restore default settings but stay in the current workspace bucket
    pub fn reset_settings(&mut self) -> Result<(), StorageError> {
        self.update_settings(|settings| {
            let workspace = std::mem::take(&mut settings.workspace);
            *settings = Settings {
                workspace,
                ..Settings::default()
            };
        })
    }

    pub fn toggle_app(&mut self, app_id: &str) -> Result<(), StorageError> {
        self.apply(|mut state| {
            if let Some(app) = state.apps.iter_mut().find(|a| a.id == app_id) {
                app.installed = !app.installed;
            }
            state
        })
    }

    pub fn add_lead(&mut self, name: &str) -> Result<Option<String>, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let id = unique_id("lead", now_millis(), self.state.crm.iter().map(|l| l.id.as_str()));
        let lead = Lead {
            id: id.clone(),
            name: name.to_string(),
            note: String::new(),
            stage: LeadStage::ToContact,
        };
        self.apply(move |mut state| {
            state.crm.push(lead);
            state
        })?;
        Ok(Some(id))
    }

    pub fn move_lead(&mut self, lead_id: &str, stage: LeadStage) -> Result<(), StorageError> {
        if !self.state.crm.iter().any(|l| l.id == lead_id) {
            return Ok(());
        }
        self.apply(|mut state| {
            if let Some(lead) = state.crm.iter_mut().find(|l| l.id == lead_id) {
                lead.stage = stage;
            }
            state
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn open<'a>(storage: &'a MemoryStorage, workspace: &str) -> WorkspaceStore<&'a MemoryStorage> {
        WorkspaceStore::open(storage, workspace)
    }

    #[test]
    fn test_load_never_persisted_returns_default() {
        let storage = MemoryStorage::new();
        assert_eq!(load_state(&storage, "fresh"), WorkspaceState::default());
    }

    #[test]
    fn test_load_corrupted_record_returns_default() {
        let storage = MemoryStorage::new();
        storage.insert_raw("pagebuilder-default", "{not json");
        assert_eq!(load_state(&storage, "default"), WorkspaceState::default());

        storage.insert_raw("pagebuilder-default", "[1, 2, 3]");
        assert_eq!(load_state(&storage, "default"), WorkspaceState::default());
    }

    #[test]
    fn test_load_partial_record_merges_defaults() {
        let storage = MemoryStorage::new();
        storage.insert_raw(
            "pagebuilder-default",
            r#"{"products":[{"id":"product-1","name":"Kopi","price":25000,"sku":"SKU-1","category":"Minuman","image":""}]}"#,
        );
        let state = load_state(&storage, "default");
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].description, None);
        assert_eq!(state.pages, WorkspaceState::default().pages);
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn test_load_keeps_pages_next_to_bad_field() {
        let storage = MemoryStorage::new();
        storage.insert_raw(
            "pagebuilder-default",
            r#"{"pages":[{"id":"home","name":"Beranda","html":"<p>keep me</p>"}],"currentPageId":null,"selectedElement":{},"settings":{"brandName":"Toko Kopi","theme":7}}"#,
        );
        let state = load_state(&storage, "default");
        assert_eq!(state.pages[0].html, "<p>keep me</p>");
        assert_eq!(state.current_page_id, "home");
        assert_eq!(state.selected_element, None);
        assert_eq!(state.settings.brand_name, "Toko Kopi");
        assert_eq!(state.settings.theme, "dark");

        // The next write keeps the restored pages
        let mut store = open(&storage, "default");
        store.switch_page("home").unwrap();
        assert_eq!(load_state(&storage, "default").pages[0].html, "<p>keep me</p>");
    }

    #[test]
    fn test_load_drops_only_unreadable_entries() {
        let storage = MemoryStorage::new();
        storage.insert_raw(
            "pagebuilder-default",
            r#"{"products":[{"id":"product-1","name":"Kopi","price":25000,"sku":"SKU-1","category":"Minuman","image":""},{"id":"product-2","name":"Teh","price":null}],"customers":"oops"}"#,
        );
        let state = load_state(&storage, "default");
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].name, "Kopi");
        assert!(state.customers.is_empty());
        assert_eq!(state.pages, WorkspaceState::default().pages);
    }

    #[test]
    fn test_load_without_pages_restores_default_page() {
        let storage = MemoryStorage::new();
        storage.insert_raw("pagebuilder-default", r#"{"pages":[],"currentPageId":"page-9"}"#);
        let state = load_state(&storage, "default");
        assert_eq!(state.pages, WorkspaceState::default().pages);
        assert_eq!(state.current_page().unwrap().id, "home");
        assert_eq!(state.current_page_id, "home");
    }

    #[test]
    fn test_load_read_failure_returns_default() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        store.add_page("Promo").unwrap();

        storage.set_fail_reads(true);
        assert_eq!(load_state(&storage, "default"), WorkspaceState::default());
    }

    #[test]
    fn test_apply_persists_every_change() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");

        store
            .apply(|mut state| {
                state.settings.brand_name = "Toko Kopi".to_string();
                state
            })
            .unwrap();

        assert!(storage.contains("pagebuilder-default"));
        let reloaded = load_state(&storage, "default");
        assert_eq!(&reloaded, store.state());
        assert_eq!(reloaded.settings.brand_name, "Toko Kopi");
    }

    #[test]
    fn test_persist_then_load_is_identity() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        store.add_page("Promo").unwrap();
        store
            .add_customer(CustomerDraft {
                name: "Sari".to_string(),
                phone: "0812".to_string(),
                ..Default::default()
            })
            .unwrap();
        store.select_element(Some("hero".to_string())).unwrap();

        let first = load_state(&storage, "default");
        assert_eq!(&first, store.state());

        let mut again = open(&storage, "default");
        again.persist().unwrap();
        assert_eq!(load_state(&storage, "default"), first);
    }

    #[test]
    fn test_reset_removes_record() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        store.add_page("Promo").unwrap();
        assert!(storage.contains("pagebuilder-default"));

        store.reset("default").unwrap();
        assert_eq!(store.state(), &WorkspaceState::default());
        assert!(!storage.contains("pagebuilder-default"));
        assert_eq!(load_state(&storage, "default"), WorkspaceState::default());
    }

    #[test]
    fn test_failed_write_keeps_new_state_in_memory() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        storage.set_fail_writes(true);

        let result = store.update_settings(|s| s.brand_name = "Unsaved".to_string());
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(store.state().settings.brand_name, "Unsaved");
        assert!(!storage.contains("pagebuilder-default"));
    }

    #[test]
    fn test_add_page_becomes_active() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");

        let id = store.add_page("Tentang").unwrap().unwrap();
        assert!(id.starts_with("page-"));
        assert_eq!(store.state().pages.len(), 2);
        assert_eq!(store.state().current_page_id, id);
        assert_eq!(store.state().current_page().unwrap().name, "Tentang");

        assert_eq!(store.add_page("   ").unwrap(), None);
        assert_eq!(store.state().pages.len(), 2);

        store.switch_page("home").unwrap();
        assert_eq!(store.state().current_page().unwrap().name, "Beranda");
    }

    #[test]
    fn test_add_product_fills_sku_and_category() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        let id = store
            .add_product(ProductDraft {
                name: "Kopi Susu".to_string(),
                price: 18000.0,
                ..Default::default()
            })
            .unwrap()
            .unwrap();

        let product = &store.state().products[0];
        assert_eq!(product.id, id);
        assert!(product.sku.starts_with("SKU-"));
        assert_eq!(product.category, "Umum");
    }

    #[test]
    fn test_non_finite_amounts_are_refused() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        let product = store
            .add_product(ProductDraft {
                name: "Kopi".to_string(),
                price: f64::INFINITY,
                ..Default::default()
            })
            .unwrap();
        let order = store
            .add_order(OrderDraft {
                customer: "Sari".to_string(),
                total: f64::NAN,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(product, None);
        assert_eq!(order, None);
        assert!(store.state().products.is_empty());
        assert!(store.state().orders.is_empty());
        assert!(!storage.contains("pagebuilder-default"));
    }

    #[test]
    fn test_order_status_update() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        let id = store
            .add_order(OrderDraft {
                customer: "Sari".to_string(),
                product: "Kopi".to_string(),
                qty: 2,
                total: 36000.0,
                method: "qris".to_string(),
                ..Default::default()
            })
            .unwrap()
            .unwrap();

        store.set_order_status(&id, OrderStatus::Paid).unwrap();
        assert_eq!(store.state().orders[0].status, OrderStatus::Paid);

        // Unknown ids leave the aggregate alone
        let before = store.state().clone();
        store.set_order_status("order-0", OrderStatus::Cancelled).unwrap();
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_remove_media_clears_references() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        let file = MediaFile {
            id: "media-1".to_string(),
            name: "icon.png".to_string(),
            data_url: "data:image/png;base64,AA==".to_string(),
            mime: "image/png".to_string(),
        };
        store.add_media(file).unwrap();
        store
            .update_settings(|s| {
                s.favicon = "media-1".to_string();
                s.logo = "media-1".to_string();
                s.qris_img = "media-1".to_string();
            })
            .unwrap();

        store.remove_media("media-1").unwrap();
        assert!(store.state().media.is_empty());
        assert!(store.state().settings.favicon.is_empty());
        assert!(store.state().settings.logo.is_empty());
        assert!(store.state().settings.qris_img.is_empty());
    }

    #[test]
    fn test_reset_settings_keeps_workspace() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        store
            .update_settings(|s| {
                s.workspace = "shopA".to_string();
                s.brand_name = "Toko A".to_string();
                s.theme = "light".to_string();
            })
            .unwrap();

        store.reset_settings().unwrap();
        let settings = &store.state().settings;
        assert_eq!(settings.workspace, "shopA");
        assert_eq!(settings.brand_name, "Page Builder");
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_apps_and_leads() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");

        store.toggle_app("whatsapp").unwrap();
        let app = store.state().apps.iter().find(|a| a.id == "whatsapp").unwrap();
        assert!(app.installed);

        let id = store.add_lead("Budi").unwrap().unwrap();
        assert_eq!(store.state().crm[0].stage, LeadStage::ToContact);
        store.move_lead(&id, LeadStage::Won).unwrap();
        assert_eq!(store.state().crm[0].stage, LeadStage::Won);
    }

    #[test]
    fn test_open_workspace_switches_bucket() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        store.update_settings(|s| s.brand_name = "Toko Default".to_string()).unwrap();

        store.open_workspace("shopC").unwrap();
        assert_eq!(store.state().settings.workspace, "shopC");
        assert_eq!(store.state().settings.brand_name, "Page Builder");
        assert_eq!(last_workspace(&storage), "shopC");

        store.add_page("Promo").unwrap();
        assert!(storage.contains("pagebuilder-shopC"));
        assert_eq!(load_state(&storage, "default").settings.brand_name, "Toko Default");

        store.open_workspace("default").unwrap();
        assert_eq!(store.state().settings.brand_name, "Toko Default");
    }

    #[test]
    fn test_rename_moves_last_workspace_pointer() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage, "default");
        store.add_page("Promo").unwrap();
        assert_eq!(last_workspace(&storage), "default");
        assert!(!storage.contains(config::LAST_WORKSPACE_KEY));

        store.update_settings(|s| s.workspace = "shopB".to_string()).unwrap();
        assert_eq!(last_workspace(&storage), "shopB");
        assert!(storage.contains("pagebuilder-shopB"));
    }

    #[test]
    fn test_last_workspace_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(last_workspace(&storage), "default");
        remember_workspace(&storage, "shopA").unwrap();
        assert_eq!(last_workspace(&storage), "shopA");
    }

    #[test]
    fn test_unique_id_suffixes_collisions() {
        assert_eq!(unique_id("page", 42, ["home"]), "page-42");
        assert_eq!(unique_id("page", 42, ["page-42"]), "page-42-1");
        assert_eq!(unique_id("page", 42, ["page-42", "page-42-1"]), "page-42-2");
    }
}
