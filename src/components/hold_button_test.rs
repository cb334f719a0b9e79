use super::*;

#[test]
fn caption_follows_progress() {
    assert_eq!(hold_caption(0.0), "Hold To Claim");
    assert_eq!(hold_caption(42.5), "Keep holding…");
    assert_eq!(hold_caption(100.0), "Claimed!");
}

#[test]
fn style_clamps_fill_level() {
    assert_eq!(hold_style(37.4), "--hold: 37.4");
    assert_eq!(hold_style(-5.0), "--hold: 0.0");
    assert_eq!(hold_style(140.0), "--hold: 100.0");
}
