//! Workspace Models
//!
//! Plain records that make up the persisted workspace aggregate.
//! Keys are camelCase on the wire so stored records stay readable by older builds.

use serde::{Deserialize, Serialize};

use crate::config;

/// A landing page whose markup grows by appending blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub html: String,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            html: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub sku: String,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Product fields supplied by the caller; id is assigned on insert
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub sku: String,
    pub category: String,
    pub image: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Pending, OrderStatus::Paid, OrderStatus::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Unix epoch milliseconds
    pub date: i64,
    pub customer: String,
    pub product: String,
    pub qty: u32,
    pub total: f64,
    pub method: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub date: i64,
    pub customer: String,
    pub product: String,
    pub qty: u32,
    pub total: f64,
    pub method: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub note: String,
}

/// Uploaded file kept inline as a data URI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "dataUrl")]
    pub data_url: String,
    #[serde(rename = "type")]
    pub mime: String,
}

/// Workspace-level configuration
///
/// Every field has a default, so settings written by older builds (or
/// hand-edited backups) load with the missing fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub brand_name: String,
    pub domain: String,
    /// Names the storage bucket this aggregate is persisted under
    pub workspace: String,
    /// `light`, anything else renders dark
    pub theme: String,
    pub language: String,
    pub wa_number: String,
    pub wa_template: String,
    pub bank_info: String,
    pub qris_id: String,
    pub qris_img: String,
    /// `MediaFile.id` of the logo
    pub logo: String,
    /// `MediaFile.id` of the favicon
    pub favicon: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brand_name: config::DEFAULT_BRAND.to_string(),
            domain: String::new(),
            workspace: config::DEFAULT_WORKSPACE.to_string(),
            theme: config::DEFAULT_THEME.to_string(),
            language: config::DEFAULT_LANGUAGE.to_string(),
            wa_number: String::new(),
            wa_template: config::DEFAULT_WA_TEMPLATE.to_string(),
            bank_info: String::new(),
            qris_id: String::new(),
            qris_img: String::new(),
            logo: String::new(),
            favicon: String::new(),
        }
    }
}

impl Settings {
    pub fn is_light(&self) -> bool {
        self.theme == "light"
    }
}

/// Installable add-on shown in the apps view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppToggle {
    pub id: String,
    pub name: String,
    pub installed: bool,
}

impl AppToggle {
    fn new(id: &str, name: &str, installed: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            installed,
        }
    }
}

pub fn default_apps() -> Vec<AppToggle> {
    vec![
        AppToggle::new("analytics", "Rekap Jualan", true),
        AppToggle::new("crm", "Simple CRM", true),
        AppToggle::new("database", "Database Pelanggan", true),
        AppToggle::new("whatsapp", "WhatsApp Checkout", false),
        AppToggle::new("email", "Email Marketing", false),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStage {
    #[default]
    ToContact,
    InProgress,
    Won,
    Lost,
}

impl LeadStage {
    pub const ALL: [LeadStage; 4] = [
        LeadStage::ToContact,
        LeadStage::InProgress,
        LeadStage::Won,
        LeadStage::Lost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadStage::ToContact => "To Contact",
            LeadStage::InProgress => "In Progress",
            LeadStage::Won => "Won",
            LeadStage::Lost => "Lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub stage: LeadStage,
}

/// The aggregate root: the only unit that is persisted and restored
///
/// Stored records are merged over `WorkspaceState::default()` field by field
/// (see `workspace::restore_state`); fields absent from a record keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceState {
    pub pages: Vec<Page>,
    pub current_page_id: String,
    /// `data-type` of the block selected in the canvas
    pub selected_element: Option<String>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub media: Vec<MediaFile>,
    pub settings: Settings,
    pub apps: Vec<AppToggle>,
    pub crm: Vec<Lead>,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self {
            pages: vec![Page::new(config::DEFAULT_PAGE_ID, config::DEFAULT_PAGE_NAME)],
            current_page_id: config::DEFAULT_PAGE_ID.to_string(),
            selected_element: None,
            products: Vec::new(),
            orders: Vec::new(),
            customers: Vec::new(),
            media: Vec::new(),
            settings: Settings::default(),
            apps: default_apps(),
            crm: Vec::new(),
        }
    }
}

impl WorkspaceState {
    /// Active page, falling back to the first page when the id dangles
    pub fn current_page(&self) -> Option<&Page> {
        self.pages
            .iter()
            .find(|page| page.id == self.current_page_id)
            .or_else(|| self.pages.first())
    }

    pub fn media_by_id(&self, id: &str) -> Option<&MediaFile> {
        if id.is_empty() {
            return None;
        }
        self.media.iter().find(|file| file.id == id)
    }
}
