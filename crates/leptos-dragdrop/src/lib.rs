//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop helpers for Leptos.
//! The dragged value travels as plain text under a caller-chosen media type,
//! so a drop target only accepts drags that carry that exact key.

use leptos::prelude::*;
use web_sys::DragEvent;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Value currently being dragged from this page (None when idle)
    pub dragging_read: ReadSignal<Option<String>>,
    pub dragging_write: WriteSignal<Option<String>>,
    /// Whether a drag is hovering the drop target
    pub over_read: ReadSignal<bool>,
    pub over_write: WriteSignal<bool>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<String>);
    let (over_read, over_write) = signal(false);
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
    }
}

/// Trim a raw payload; empty payloads carry nothing
pub fn normalize_payload(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Write `value` into the event's DataTransfer under `media_type`
pub fn set_payload(ev: &DragEvent, media_type: &str, value: &str) -> bool {
    let Some(transfer) = ev.data_transfer() else {
        return false;
    };
    transfer.set_effect_allowed("copy");
    transfer.set_data(media_type, value).is_ok()
}

/// Read the value stored under `media_type`, if any
pub fn read_payload(ev: &DragEvent, media_type: &str) -> Option<String> {
    let transfer = ev.data_transfer()?;
    let raw = transfer.get_data(media_type).ok()?;
    normalize_payload(&raw)
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.over_write.set(false);
}

/// Create dragstart handler for palette items
pub fn make_on_dragstart(
    dnd: DndSignals,
    media_type: &'static str,
    value: String,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if set_payload(&ev, media_type, &value) {
            dnd.dragging_write.set(Some(value.clone()));
        }
    }
}

/// Create dragend handler (fires on the source whether or not it was dropped)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// Create dragover handler; preventing default is what marks the target droppable
pub fn make_on_dragover(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("copy");
        }
        if !dnd.over_read.get_untracked() {
            dnd.over_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.over_write.set(false);
    }
}

/// Create drop handler that reads the payload under `media_type`
pub fn make_on_drop<F>(
    dnd: DndSignals,
    media_type: &'static str,
    on_drop: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(String) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = read_payload(&ev, media_type);
        end_drag(&dnd);
        if let Some(value) = payload {
            on_drop(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_payload() {
        assert_eq!(normalize_payload("hero"), Some("hero".to_string()));
        assert_eq!(normalize_payload("  footer\n"), Some("footer".to_string()));
        assert_eq!(normalize_payload(""), None);
        assert_eq!(normalize_payload("   "), None);
    }
}
