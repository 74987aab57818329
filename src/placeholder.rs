//! Placeholder Images
//!
//! Inline SVG stand-ins for images that have not been set yet.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped the same way as JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const GRADIENT_FROM: &str = "#6366f1";
const GRADIENT_TO: &str = "#22d3ee";

/// Escape text for use inside XML/HTML content or attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode a URI component
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Gradient rectangle with a centered label, as an SVG markup string
pub fn placeholder_svg(width: u32, height: u32, label: &str) -> String {
    let font_size = (width.min(height) / 6).max(12);
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\
<defs><linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>\
<stop offset='0' stop-color='{from}'/><stop offset='1' stop-color='{to}'/>\
</linearGradient></defs>\
<rect width='{w}' height='{h}' fill='url(#g)'/>\
<text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' \
font-family='system-ui,sans-serif' font-size='{fs}' fill='#ffffff'>{label}</text></svg>",
        w = width,
        h = height,
        from = GRADIENT_FROM,
        to = GRADIENT_TO,
        fs = font_size,
        label = escape_xml(label),
    )
}

/// Placeholder image as a `data:` URI, safe inside a double-quoted attribute
pub fn svg_placeholder(width: u32, height: u32, label: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        encode_uri_component(&placeholder_svg(width, height, label))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn decode(uri: &str) -> String {
        let payload = uri.trim_start_matches("data:image/svg+xml;charset=utf-8,");
        percent_decode_str(payload).decode_utf8().unwrap().to_string()
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(svg_placeholder(420, 220, "Hero"), svg_placeholder(420, 220, "Hero"));
    }

    #[test]
    fn test_label_only_changes_text() {
        let hero = decode(&svg_placeholder(180, 100, "Hero"));
        let gallery = decode(&svg_placeholder(180, 100, "Gambar"));
        assert_ne!(hero, gallery);
        assert_eq!(hero.replace(">Hero</text>", ">Gambar</text>"), gallery);
    }

    #[test]
    fn test_placeholder_structure() {
        let uri = svg_placeholder(180, 140, "Produk");
        assert!(uri.starts_with("data:image/svg+xml;charset=utf-8,"));
        assert!(!uri.contains('"'));
        assert!(!uri.contains(' '));

        let svg = decode(&uri);
        assert!(svg.contains("width='180' height='140'"));
        assert!(svg.contains("<linearGradient"));
        assert_eq!(svg.matches("<stop ").count(), 2);
        assert!(svg.contains("text-anchor='middle'"));
        assert!(svg.contains(">Produk</text>"));
    }

    #[test]
    fn test_label_is_escaped() {
        let svg = placeholder_svg(100, 100, "A & <B>");
        assert!(svg.contains(">A &amp; &lt;B&gt;</text>"));
    }
}
