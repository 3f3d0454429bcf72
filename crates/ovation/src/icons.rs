//! Icon tokens are opaque renderable handles supplied by the deck file.
//! They resolve to glyphs here and nowhere else; an unknown token gets a
//! neutral bullet so no template ever fails over a missing icon.

pub const FALLBACK: &str = "\u{2022}"; // •

pub fn glyph(token: Option<&str>) -> &'static str {
    match token {
        Some("shield") => "\u{26E8}",       // ⛨
        Some("sparkles") => "\u{2726}",     // ✦
        Some("users") => "\u{263A}",        // ☺
        Some("user") => "\u{263B}",         // ☻
        Some("activity") => "\u{26A1}",     // ⚡
        Some("briefcase") => "\u{2302}",    // ⌂
        Some("building") => "\u{2656}",     // ♖
        Some("graduation") => "\u{2605}",   // ★
        Some("book") => "\u{270E}",         // ✎
        Some("heart") => "\u{2665}",        // ♥
        Some("search") => "\u{2315}",       // ⌕
        Some("file") => "\u{2630}",         // ☰
        Some("folder") => "\u{2611}",       // ☑
        Some("check") => "\u{2713}",        // ✓
        Some("cross") => "\u{2717}",        // ✗
        Some("scale") => "\u{2696}",        // ⚖
        Some("message") => "\u{2709}",      // ✉
        Some("clock") => "\u{23F1}",        // ⏱
        Some("cloud") => "\u{2601}",        // ☁
        Some("help") => "?",
        Some("target") => "\u{25CE}",       // ◎
        Some("lightbulb") => "\u{2600}",    // ☀
        Some("alert") => "\u{26A0}",        // ⚠
        Some("puzzle") => "\u{2756}",       // ❖
        Some("anchor") => "\u{2693}",       // ⚓
        Some("flag") => "\u{2691}",         // ⚑
        Some("gear") => "\u{2699}",         // ⚙
        Some("pen") => "\u{2712}",          // ✒
        Some("music") => "\u{266B}",        // ♫
        Some("arrow-up") => "\u{2191}",     // ↑
        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tokens_resolve_to_the_fallback() {
        assert_eq!(glyph(Some("definitely-not-an-icon")), FALLBACK);
        assert_eq!(glyph(None), FALLBACK);
    }

    #[test]
    fn known_tokens_resolve_to_distinct_glyphs() {
        assert_ne!(glyph(Some("shield")), FALLBACK);
        assert_ne!(glyph(Some("scale")), glyph(Some("cloud")));
    }
}
