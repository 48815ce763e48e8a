use chatmark::{render, render_with_options, BulletStyle, RenderOptions};
use pretty_assertions::assert_eq;

#[test]
fn golden_snapshot_chat_reply_output() {
    let input = include_str!("golden/chat_reply.md");
    let expected = include_str!("golden/chat_reply_expected.html");

    assert_eq!(render(input), expected.trim_end());
}

#[test]
fn golden_snapshot_chat_reply_lenient_matches_strict() {
    let input = include_str!("golden/chat_reply.md");
    let lenient = RenderOptions {
        bullets: BulletStyle::Lenient,
        ..Default::default()
    };

    assert_eq!(render_with_options(input, &lenient), render(input));
}

#[test]
fn golden_snapshot_unbalanced_markup_output() {
    let input = include_str!("golden/unbalanced.md");
    let expected = include_str!("golden/unbalanced_expected.html");

    assert_eq!(render(input), expected.trim_end());
}
