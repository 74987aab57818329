//! Block Template Registry
//!
//! Closed set of content blocks and the markup each one produces.
//! Dropping a block appends its markup to the active page.

use log::debug;

use crate::models::WorkspaceState;
use crate::placeholder::svg_placeholder;
use crate::storage::{KeyValueStore, StorageError};
use crate::workspace::WorkspaceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Nav,
    Hero,
    Features,
    Product,
    ProductGrid,
    Gallery,
    Testimonial,
    Pricing,
    Contact,
    Footer,
}

/// Palette grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCategory {
    Layout,
    Content,
    Commerce,
    Media,
}

impl BlockCategory {
    pub const ALL: [BlockCategory; 4] = [
        BlockCategory::Layout,
        BlockCategory::Content,
        BlockCategory::Commerce,
        BlockCategory::Media,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BlockCategory::Layout => "Layout",
            BlockCategory::Content => "Content",
            BlockCategory::Commerce => "E-commerce",
            BlockCategory::Media => "Media",
        }
    }
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Nav,
        BlockKind::Hero,
        BlockKind::Features,
        BlockKind::Product,
        BlockKind::ProductGrid,
        BlockKind::Gallery,
        BlockKind::Testimonial,
        BlockKind::Pricing,
        BlockKind::Contact,
        BlockKind::Footer,
    ];

    /// Registry identifier, also the drag payload and the `data-type` attribute
    pub fn id(self) -> &'static str {
        match self {
            BlockKind::Nav => "nav",
            BlockKind::Hero => "hero",
            BlockKind::Features => "features",
            BlockKind::Product => "product",
            BlockKind::ProductGrid => "product-grid",
            BlockKind::Gallery => "gallery",
            BlockKind::Testimonial => "testi",
            BlockKind::Pricing => "pricing",
            BlockKind::Contact => "contact",
            BlockKind::Footer => "footer",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Nav => "Navbar",
            BlockKind::Hero => "Hero",
            BlockKind::Features => "Fitur",
            BlockKind::Product => "Produk",
            BlockKind::ProductGrid => "Grid Produk",
            BlockKind::Gallery => "Galeri",
            BlockKind::Testimonial => "Testimoni",
            BlockKind::Pricing => "Pricing",
            BlockKind::Contact => "Kontak",
            BlockKind::Footer => "Footer",
        }
    }

    pub fn category(self) -> BlockCategory {
        match self {
            BlockKind::Nav | BlockKind::Hero | BlockKind::Footer => BlockCategory::Layout,
            BlockKind::Features | BlockKind::Testimonial | BlockKind::Contact => BlockCategory::Content,
            BlockKind::Product | BlockKind::ProductGrid | BlockKind::Pricing => BlockCategory::Commerce,
            BlockKind::Gallery => BlockCategory::Media,
        }
    }

    /// Markup for this block; same kind, same bytes
    pub fn render(self) -> String {
        match self {
            BlockKind::Nav => NAV.to_string(),
            BlockKind::Hero => render_hero(),
            BlockKind::Features => render_features(),
            BlockKind::Product => render_product(),
            BlockKind::ProductGrid => PRODUCT_GRID.to_string(),
            BlockKind::Gallery => render_gallery(),
            BlockKind::Testimonial => TESTIMONIAL.to_string(),
            BlockKind::Pricing => render_pricing(),
            BlockKind::Contact => CONTACT.to_string(),
            BlockKind::Footer => FOOTER.to_string(),
        }
    }
}

/// Blocks grouped by category, in palette order
pub fn palette() -> Vec<(BlockCategory, Vec<BlockKind>)> {
    BlockCategory::ALL
        .into_iter()
        .map(|category| {
            let kinds = BlockKind::ALL
                .into_iter()
                .filter(|kind| kind.category() == category)
                .collect();
            (category, kinds)
        })
        .collect()
}

// ========================
// Templates
// ========================

const IMG_STYLE: &str = "border-radius:12px;border:1px solid var(--border);object-fit:cover";

const NAV: &str = r##"<nav class="blk" data-type="nav" style="padding:14px"><div style="display:flex;justify-content:space-between;align-items:center;gap:10px"><strong contenteditable>Brand Anda</strong><div style="display:flex;gap:8px"><a class="btn" data-role="button" href="#" contenteditable="false">Beranda</a><a class="btn" data-role="button" href="#" contenteditable="false">Produk</a><a class="btn acc" data-role="button" href="#" contenteditable="false">Beli</a></div></div></nav>"##;

const PRODUCT_GRID: &str = r##"<section class="blk" data-type="product-grid"><h3 contenteditable>Produk Unggulan</h3><div class="grid" style="display:grid;grid-template-columns:repeat(3,1fr);gap:12px"></div><div class="muted">Grid akan menampilkan 3 produk pertama.</div></section>"##;

const TESTIMONIAL: &str = r##"<section class="blk" data-type="testi"><h3 contenteditable>Testimoni</h3><blockquote class="blk" style="padding:16px" contenteditable>"Produk ini luar biasa! Sangat membantu bisnis saya." — Nama Pelanggan</blockquote></section>"##;

const CONTACT: &str = r##"<section class="blk" data-type="contact" style="text-align:center"><h3 contenteditable>Hubungi Kami</h3><p class="muted" contenteditable>Isi pertanyaan Anda, kami balas via WhatsApp.</p><div style="display:flex;gap:10px;justify-content:center;flex-wrap:wrap"><input placeholder="Nama" style="min-width:200px"><input placeholder="Nomor" style="min-width:180px"><input placeholder="Pesan" style="min-width:260px;width:60%"><a class="btn acc" data-role="button" href="#" data-action="contact-wa" contenteditable="false">Kirim via WA</a></div></section>"##;

const FOOTER: &str = r##"<footer class="blk" data-type="footer" style="text-align:center"><p contenteditable>© <span data-role="brand">Brand Anda</span> • Semua hak cipta dilindungi.</p></footer>"##;

fn render_hero() -> String {
    format!(
        r##"<section class="blk" data-type="hero"><div style="display:grid;grid-template-columns:1.2fr 1fr;gap:14px;align-items:center"><div><h1 contenteditable>Judul Utama Yang Menjual</h1><p class="muted" contenteditable>Sampaikan nilai jual singkat di sini. Bisa diedit langsung.</p><div style="display:flex;gap:8px"><a class="btn acc" data-role="button" href="#" contenteditable="false">Coba Gratis</a><a class="btn" data-role="button" href="#" contenteditable="false">Pelajari</a></div></div><img data-role="img" alt="hero" style="width:100%;height:220px;{style}" src="{src}"/></div></section>"##,
        style = IMG_STYLE,
        src = svg_placeholder(420, 220, "Hero"),
    )
}

fn render_features() -> String {
    let items: String = (1..=3)
        .map(|i| format!(r#"<li class="blk" style="padding:14px" contenteditable>Fitur {} • jelaskan manfaat.</li>"#, i))
        .collect();
    format!(
        r#"<section class="blk" data-type="features"><h3 contenteditable>Kenapa Memilih Kami</h3><ul style="display:grid;grid-template-columns:repeat(3,1fr);gap:10px;list-style:none;padding:0;margin:0">{}</ul></section>"#,
        items
    )
}

fn render_product() -> String {
    format!(
        r##"<section class="blk" data-type="product"><div style="display:grid;grid-template-columns:180px 1fr;gap:14px;align-items:center"><img data-role="img" alt="produk" style="width:100%;height:140px;{style}" src="{src}"><div><h3 contenteditable>Nama Produk</h3><p class="muted" contenteditable>Deskripsi singkat produk.</p><div style="display:flex;gap:8px;align-items:center;flex-wrap:wrap"><strong data-role="price" contenteditable>150000</strong><input data-role="qty" type="number" min="1" value="1" style="width:80px"><button class="btn acc" data-action="buy-wa">Beli via WhatsApp</button><button class="btn" data-action="buy-transfer">Transfer</button><button class="btn" data-action="buy-qris">QRIS</button></div></div></div><div class="blk-actions"><button class="btn icon" data-role="bind">🔗 Bind</button></div></section>"##,
        style = IMG_STYLE,
        src = svg_placeholder(180, 140, "Produk"),
    )
}

fn render_gallery() -> String {
    let src = svg_placeholder(180, 100, "Gambar");
    let images: String = (0..4)
        .map(|_| format!(r#"<img data-role="img" alt="galeri" style="width:100%;height:100px;{}" src="{}">"#, IMG_STYLE, src))
        .collect();
    format!(
        r#"<section class="blk" data-type="gallery"><h3 contenteditable>Galeri</h3><div style="display:grid;grid-template-columns:repeat(4,1fr);gap:10px">{}</div></section>"#,
        images
    )
}

fn render_pricing() -> String {
    let tiers: String = ["Basic", "Pro", "Business"]
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            format!(
                r##"<div class="blk" style="padding:14px;text-align:center"><strong contenteditable>{tier}</strong><div style="font-size:28px;font-weight:800;margin:8px 0" contenteditable>{price}rb</div><ul style="text-align:left" contenteditable><li>Fitur A</li><li>Fitur B</li><li>Fitur C</li></ul><a class="btn acc" data-role="button" href="#" contenteditable="false">Pilih</a></div>"##,
                tier = tier,
                price = (i + 1) * 100,
            )
        })
        .collect();
    format!(
        r#"<section class="blk" data-type="pricing"><h3 contenteditable>Paket Harga</h3><div style="display:grid;grid-template-columns:repeat(3,1fr);gap:12px">{}</div></section>"#,
        tiers
    )
}

// ========================
// Append
// ========================

/// New aggregate with `markup` appended to the page `page_id`
///
/// Pages other than the target are moved through untouched.
pub fn append_markup(mut state: WorkspaceState, page_id: &str, markup: &str) -> WorkspaceState {
    if let Some(page) = state.pages.iter_mut().find(|page| page.id == page_id) {
        page.html.push_str(markup);
    }
    state
}

/// Render `block_id` and append it to the active page
///
/// Unknown ids and a dangling `currentPageId` are silent no-ops.
pub fn append_block<S: KeyValueStore>(
    store: &mut WorkspaceStore<S>,
    block_id: &str,
) -> Result<(), StorageError> {
    let Some(kind) = BlockKind::from_id(block_id) else {
        debug!("ignoring unknown block {:?}", block_id);
        return Ok(());
    };
    let page_id = store.state().current_page_id.clone();
    if !store.state().pages.iter().any(|page| page.id == page_id) {
        debug!("no active page {:?}, dropping {}", page_id, block_id);
        return Ok(());
    }
    let markup = kind.render();
    store.apply(|state| append_markup(state, &page_id, &markup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_registry_ids() {
        let ids: Vec<&str> = BlockKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(
            ids,
            vec!["nav", "hero", "features", "product", "product-grid", "gallery", "testi", "pricing", "contact", "footer"]
        );
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(BlockKind::from_id("navbar"), None);
        assert_eq!(BlockKind::from_id("testimonial"), None);
    }

    #[test]
    fn test_templates_are_pure() {
        for kind in BlockKind::ALL {
            let markup = kind.render();
            assert_eq!(markup, kind.render());
            assert!(markup.contains(&format!(r#"data-type="{}""#, kind.id())));
        }
    }

    #[test]
    fn test_template_contents() {
        assert_eq!(BlockKind::Features.render().matches("<li ").count(), 3);
        assert!(BlockKind::Features.render().contains("Fitur 2 • jelaskan manfaat."));
        assert_eq!(BlockKind::Gallery.render().matches("<img ").count(), 4);
        let pricing = BlockKind::Pricing.render();
        assert!(pricing.contains(">100rb<"));
        assert!(pricing.contains(">200rb<"));
        assert!(pricing.contains(">300rb<"));
        assert!(BlockKind::Hero.render().contains(&svg_placeholder(420, 220, "Hero")));
    }

    #[test]
    fn test_palette_groups_every_block_once() {
        let groups = palette();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0, BlockCategory::Layout);
        assert_eq!(groups[3].1, vec![BlockKind::Gallery]);
        let total: usize = groups.iter().map(|(_, kinds)| kinds.len()).sum();
        assert_eq!(total, BlockKind::ALL.len());
    }

    #[test]
    fn test_append_concatenates() {
        let storage = MemoryStorage::new();
        let mut store = WorkspaceStore::open(&storage, "default");

        append_block(&mut store, "nav").unwrap();
        append_block(&mut store, "hero").unwrap();

        let expected = BlockKind::Nav.render() + &BlockKind::Hero.render();
        assert_eq!(store.state().pages[0].html, expected);
    }

    #[test]
    fn test_repeated_append_triples_occurrences() {
        let storage = MemoryStorage::new();
        let mut store = WorkspaceStore::open(&storage, "default");
        for _ in 0..3 {
            append_block(&mut store, "footer").unwrap();
        }
        let html = &store.state().pages[0].html;
        let footer = BlockKind::Footer.render();
        assert_eq!(html.matches(&footer).count(), 3);
        assert_eq!(html, &footer.repeat(3));
    }

    #[test]
    fn test_unknown_block_is_noop() {
        let storage = MemoryStorage::new();
        let mut store = WorkspaceStore::open(&storage, "default");
        append_block(&mut store, "carousel").unwrap();
        assert_eq!(store.state(), &WorkspaceState::default());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_dangling_current_page_is_noop() {
        let storage = MemoryStorage::new();
        let mut store = WorkspaceStore::open(&storage, "default");
        store.switch_page("gone").unwrap();
        let before = store.state().clone();

        append_block(&mut store, "hero").unwrap();
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_append_only_touches_active_page() {
        let storage = MemoryStorage::new();
        let mut store = WorkspaceStore::open(&storage, "default");
        store
            .apply(|mut state| {
                state.pages[0].html = "<p>home</p>".to_string();
                state.pages.push(Page {
                    id: "about".to_string(),
                    name: "Tentang".to_string(),
                    html: "<p>about</p>".to_string(),
                });
                state
            })
            .unwrap();
        let about_before = store.state().pages[1].clone();
        let about_ptr = store.state().pages[1].html.as_ptr();

        append_block(&mut store, "testi").unwrap();

        assert_eq!(store.state().pages[0].html, format!("<p>home</p>{}", BlockKind::Testimonial.render()));
        assert_eq!(store.state().pages[1], about_before);
        // Untouched pages keep their buffers
        assert_eq!(store.state().pages[1].html.as_ptr(), about_ptr);
    }
}
