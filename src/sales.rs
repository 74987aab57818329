//! Sales Helpers
//!
//! Order totals, rupiah formatting and the WhatsApp order message.

use crate::models::{Order, OrderStatus, Settings};
use crate::placeholder::encode_uri_component;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesSummary {
    /// Sum of `total` over paid orders
    pub revenue: f64,
    pub paid: usize,
    pub pending: usize,
    pub cancelled: usize,
}

pub fn sales_summary(orders: &[Order]) -> SalesSummary {
    orders.iter().fold(SalesSummary::default(), |mut summary, order| {
        match order.status {
            OrderStatus::Paid => {
                summary.paid += 1;
                summary.revenue += order.total;
            }
            OrderStatus::Pending => summary.pending += 1,
            OrderStatus::Cancelled => summary.cancelled += 1,
        }
        summary
    })
}

/// Fill `{{product}}`, `{{qty}}` and `{{total}}` in a message template
pub fn order_message(template: &str, product: &str, qty: u32, total: &str) -> String {
    template
        .replace("{{product}}", product)
        .replace("{{qty}}", &qty.to_string())
        .replace("{{total}}", total)
}

/// `wa.me` chat link; non-digits are dropped from the number
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, encode_uri_component(message))
}

/// WhatsApp follow-up link for `order` using the current settings
pub fn order_link(settings: &Settings, order: &Order) -> String {
    let message = order_message(&settings.wa_template, &order.product, order.qty, &format_rupiah(order.total));
    whatsapp_link(&settings.wa_number, &message)
}

/// `Rp 150.000` style amount, rounded to whole rupiah
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("Rp {}{}", sign, grouped)
}
