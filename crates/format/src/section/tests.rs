//! Rendering tests for menu sections.
//!
//! Snapshots use insta; margin-sensitive layouts are compared line by line
//! since snapshots trim trailing spaces.

use proptest::prelude::*;

use super::{ItemsSection, MenuFooter, MenuHeader, MenuPrompt, Section, TextSection, compose};
use crate::align::Align;
use crate::border::{BorderKind, BorderStyle};
use crate::dimensions::{Margins, Padding};
use crate::error::FormatError;
use crate::item::MenuItem;
use crate::style::MenuStyle;
use crate::test_utils::{assert_width, frame_to_string};

fn ascii(width: usize) -> MenuStyle {
    MenuStyle::default().with_width(width)
}

fn light(width: usize) -> MenuStyle {
    MenuStyle::default()
        .with_width(width)
        .with_border(BorderStyle::light())
}

/// Plain, submenu, and stay-in-loop items.
fn small_list() -> Vec<MenuItem> {
    vec![
        MenuItem::new("menu_item_1"),
        MenuItem::submenu("menu_item_2"),
        MenuItem::new("menu_item_3").with_exit(false),
    ]
}

fn large_list() -> Vec<MenuItem> {
    (1..=12)
        .map(|n| MenuItem::new(format!("menu_item_{n}")))
        .collect()
}

// Header

#[test]
fn header_title_only_at_80_columns() {
    let style = ascii(80);
    let lines = MenuHeader::new(&style).title("My Title").generate().unwrap();

    let rule = format!("+{}+", "-".repeat(78));
    let title = format!("|My Title{}|", " ".repeat(70));
    assert_eq!(lines, vec![rule.clone(), title, rule]);
    assert_width(&lines, 80);
}

#[test]
fn header_without_titles_collapses() {
    let style = ascii(40);
    let lines = MenuHeader::new(&style).generate().unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    +--------------------------------------+
    +--------------------------------------+
    ");
}

#[test]
fn header_title_and_subtitle() {
    let style = ascii(40);
    let lines = MenuHeader::new(&style)
        .title("My Title")
        .subtitle("My Subtitle")
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    +--------------------------------------+
    |My Title                              |
    |                                      |
    |My Subtitle                           |
    +--------------------------------------+
    ");
}

#[test]
fn header_titles_centered() {
    let style = ascii(40);
    let lines = MenuHeader::new(&style)
        .title("My Centered Title")
        .title_align(Align::Center)
        .subtitle("My Centered Subtitle")
        .subtitle_align(Align::Center)
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    +--------------------------------------+
    |          My Centered Title           |
    |                                      |
    |         My Centered Subtitle         |
    +--------------------------------------+
    ");
}

#[test]
fn header_subtitle_only_has_no_separator() {
    let style = ascii(20);
    let lines = MenuHeader::new(&style).subtitle("Sub").generate().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], format!("|Sub{}|", " ".repeat(15)));
}

#[test]
fn header_empty_title_is_still_a_row() {
    let style = ascii(20);
    let lines = MenuHeader::new(&style).title("").generate().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], format!("|{}|", " ".repeat(18)));
}

#[test]
fn header_uses_style_alignment_by_default() {
    let style = ascii(12).with_title_align(Align::Right);
    let lines = MenuHeader::new(&style).title("abc").generate().unwrap();
    assert_eq!(lines[1], "|       abc|");
}

#[test]
fn header_light_with_padding() {
    let style = light(40).with_padding(Padding::new(1, 4, 1, 4));
    let lines = MenuHeader::new(&style).title("My Title").generate().unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    ┌──────────────────────────────────────┐
    │                                      │
    │    My Title                          │
    │                                      │
    ├──────────────────────────────────────┤
    ");
    assert_width(&lines, 40);
}

#[test]
fn header_light_with_margins() {
    let style = light(40).with_margins(Margins::new(1, 4, 0, 4));
    let lines = MenuHeader::new(&style).title("My Title").generate().unwrap();

    let edge = "─".repeat(30);
    assert_eq!(
        lines,
        vec![
            " ".repeat(40),
            format!("    ┌{edge}┐    "),
            format!("    │My Title{}│    ", " ".repeat(22)),
            format!("    ├{edge}┤    "),
        ]
    );
}

// Text section

#[test]
fn text_border_toggling_without_text() {
    let style = ascii(40);
    let rule = format!("+{}+", "-".repeat(38));

    let none = TextSection::new(&style).generate().unwrap();
    assert!(none.is_empty());

    let top = TextSection::new(&style)
        .show_top_border(true)
        .generate()
        .unwrap();
    assert_eq!(top, vec![rule.clone()]);

    let bottom = TextSection::new(&style)
        .show_bottom_border(true)
        .generate()
        .unwrap();
    assert_eq!(bottom, vec![rule.clone()]);

    let both = TextSection::new(&style)
        .show_top_border(true)
        .show_bottom_border(true)
        .generate()
        .unwrap();
    assert_eq!(both, vec![rule.clone(), rule]);
}

#[test]
fn text_empty_string_is_absent() {
    let style = ascii(40).with_padding(Padding::new(2, 1, 2, 1));
    let lines = TextSection::new(&style)
        .text("")
        .show_top_border(true)
        .generate()
        .unwrap();
    assert_eq!(lines.len(), 1);
}

#[test]
fn text_centered_between_dividers() {
    let style = light(40);
    let lines = TextSection::new(&style)
        .text("My centered prologue.")
        .text_align(Align::Center)
        .show_top_border(true)
        .show_bottom_border(true)
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    ├──────────────────────────────────────┤
    │        My centered prologue.         │
    ├──────────────────────────────────────┤
    ");
}

#[test]
fn text_wraps_long_prologue() {
    let style = ascii(30);
    let lines = TextSection::new(&style)
        .text("This is my really good prologue, which is long enough to wrap.")
        .show_top_border(true)
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    +----------------------------+
    |This is my really good      |
    |prologue, which is long     |
    |enough to wrap.             |
    ");
    assert_width(&lines, 30);
}

#[test]
fn text_hard_breaks_unbreakable_token() {
    let style = ascii(20);
    let lines = TextSection::new(&style)
        .text("x".repeat(45))
        .generate()
        .unwrap();
    assert_eq!(
        lines,
        vec![
            format!("|{}|", "x".repeat(18)),
            format!("|{}|", "x".repeat(18)),
            format!("|{}{}|", "x".repeat(9), " ".repeat(9)),
        ]
    );
}

#[test]
fn text_hard_break_measures_emoji_sequences() {
    let style = ascii(7);
    let heart = "\u{2764}\u{FE0F}";
    let lines = TextSection::new(&style)
        .text(heart.repeat(4))
        .generate()
        .unwrap();
    assert_eq!(lines, vec![format!("|{}{} |", heart, heart); 2]);
    assert_width(&lines, 7);
}

#[test]
fn text_control_characters_keep_the_width() {
    let style = ascii(8);
    let lines = TextSection::new(&style)
        .text("a\u{7}b\u{7}c\u{7}d\u{7}e\u{7}f")
        .generate()
        .unwrap();
    assert_width(&lines, 8);
    assert!(lines.iter().all(|line| !line.contains('\u{7}')));
}

// Items section

#[test]
fn items_empty_renders_only_dividers() {
    let rule = format!("+{}+", "-".repeat(38));
    for (margins, padding) in [
        (Margins::default(), Padding::default()),
        (Margins::new(3, 0, 3, 0), Padding::new(2, 0, 2, 0)),
    ] {
        let style = ascii(40).with_margins(margins).with_padding(padding);
        let lines = ItemsSection::new(&style, Vec::new())
            .show_top_border(true)
            .show_bottom_border(true)
            .generate()
            .unwrap();
        assert_eq!(lines, vec![rule.clone(), rule.clone()]);
    }
}

#[test]
fn items_empty_without_dividers_is_empty() {
    let style = ascii(40);
    assert!(ItemsSection::new(&style, Vec::new()).generate().unwrap().is_empty());
}

#[test]
fn items_small_list() {
    let style = ascii(40);
    let lines = ItemsSection::new(&style, small_list())
        .show_top_border(true)
        .show_bottom_border(true)
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    +--------------------------------------+
    | 1 - menu_item_1                      |
    | 2 - menu_item_2 >                    |
    | 3 - menu_item_3 *                    |
    +--------------------------------------+
    ");
}

#[test]
fn items_light_with_padding() {
    let style = light(40).with_padding(Padding::new(1, 2, 1, 2));
    let lines = ItemsSection::new(&style, small_list())
        .show_top_border(true)
        .show_bottom_border(true)
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    ├──────────────────────────────────────┤
    │                                      │
    │   1 - menu_item_1                    │
    │   2 - menu_item_2 >                  │
    │   3 - menu_item_3 *                  │
    │                                      │
    ├──────────────────────────────────────┤
    ");
    assert_width(&lines, 40);
}

#[test]
fn items_large_list_is_one_line_per_item() {
    let style = MenuStyle::default();
    let lines = ItemsSection::new(&style, large_list()).generate().unwrap();

    assert_eq!(lines.len(), 12);
    assert_width(&lines, 80);
    for (index, line) in lines.iter().enumerate() {
        let number = index + 1;
        let expected = format!("{number:>2} - menu_item_{number}");
        assert!(
            line.starts_with(&format!("|{expected} ")),
            "unexpected line {line:?}"
        );
    }
}

#[test]
fn items_long_label_wraps() {
    let style = ascii(20);
    let items = vec![MenuItem::new("A long item label that wraps")];
    let lines = ItemsSection::new(&style, items).generate().unwrap();
    assert_eq!(lines, vec!["| 1 - A long item  |", "|label that wraps  |"]);
}

#[test]
fn items_number_column_grows_past_99() {
    let style = ascii(30);
    let items = (0..100).map(|n| MenuItem::new(format!("i{n}"))).collect();
    let lines = ItemsSection::new(&style, items).generate().unwrap();
    assert!(lines[0].starts_with("|  1 - i0"));
    assert!(lines[99].starts_with("|100 - i99"));
}

#[test]
fn items_horizontal_margins_apply() {
    let style = ascii(30).with_margins(Margins::new(2, 3, 2, 3));
    let lines = ItemsSection::new(&style, vec![MenuItem::new("a")])
        .generate()
        .unwrap();
    assert_eq!(lines, vec![format!("   | 1 - a{}|   ", " ".repeat(16))]);
}

// Footer and prompt

#[test]
fn footer_closes_the_frame() {
    let style = light(40);
    let lines = MenuFooter::new(&style)
        .text("Press a number to choose")
        .show_top_border(true)
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    ├──────────────────────────────────────┤
    │Press a number to choose              │
    └──────────────────────────────────────┘
    ");
}

#[test]
fn footer_with_margins() {
    let style = ascii(30).with_margins(Margins::new(2, 3, 1, 3));
    let lines = MenuFooter::new(&style).generate().unwrap();
    let blank = " ".repeat(30);
    assert_eq!(
        lines,
        vec![
            blank.clone(),
            blank.clone(),
            format!("   +{}+   ", "-".repeat(22)),
            blank,
        ]
    );
}

#[test]
fn prompt_touches_footer() {
    let footer_style = ascii(40).with_margins(Margins::new(0, 2, 0, 2));
    let prompt_style = ascii(40).with_padding(Padding::new(0, 1, 1, 1));
    let footer = MenuFooter::new(&footer_style);
    let prompt = MenuPrompt::new(&prompt_style);

    let lines = compose(&[&footer, &prompt]).unwrap();
    assert_eq!(
        lines,
        vec![
            format!("  +{}+  ", "-".repeat(34)),
            format!("  >>{}", " ".repeat(36)),
            " ".repeat(40),
        ]
    );
}

#[test]
fn prompt_custom_text_and_alignment() {
    let style = ascii(12);
    let lines = MenuPrompt::new(&style)
        .prompt("pick:")
        .prompt_align(Align::Right)
        .generate()
        .unwrap();
    assert_eq!(lines, vec!["      pick: "]);
}

#[test]
fn prompt_bordered() {
    let style = light(40).with_padding(Padding::new(0, 2, 0, 2));
    let lines = MenuPrompt::new(&style)
        .prompt("Choose >>")
        .bordered(true)
        .generate()
        .unwrap();

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    ┌──────────────────────────────────────┐
    │  Choose >>                           │
    └──────────────────────────────────────┘
    ");
}

// Whole frames

#[test]
fn full_frame() {
    let style = light(40);
    let header = MenuHeader::new(&style)
        .title("Main Menu")
        .title_align(Align::Center)
        .subtitle("Pick something");
    let prologue = TextSection::new(&style)
        .text("Welcome to the demo.")
        .show_bottom_border(true);
    let items = ItemsSection::new(&style, small_list());
    let footer = MenuFooter::new(&style);
    let prompt = MenuPrompt::new(&style);

    let lines = compose(&[&header, &prologue, &items, &footer, &prompt]).unwrap();
    assert_width(&lines, 40);

    insta::assert_snapshot!(frame_to_string(&lines), @r"
    ┌──────────────────────────────────────┐
    │              Main Menu               │
    │                                      │
    │Pick something                        │
    ├──────────────────────────────────────┤
    │Welcome to the demo.                  │
    ├──────────────────────────────────────┤
    │ 1 - menu_item_1                      │
    │ 2 - menu_item_2 >                    │
    │ 3 - menu_item_3 *                    │
    └──────────────────────────────────────┘
     >>
    ");
}

#[test]
fn generate_is_restartable() {
    let style = light(30);
    let items = ItemsSection::new(&style, small_list()).show_top_border(true);
    assert_eq!(items.generate().unwrap(), items.generate().unwrap());
}

#[test]
fn narrow_style_fails_every_section() {
    let style = ascii(10).with_margins(Margins::new(0, 4, 0, 4));
    let expected = FormatError::InsufficientWidth {
        width: 10,
        required: 11,
    };

    assert_eq!(MenuHeader::new(&style).generate().unwrap_err(), expected);
    assert_eq!(TextSection::new(&style).generate().unwrap_err(), expected);
    assert_eq!(
        ItemsSection::new(&style, Vec::new()).generate().unwrap_err(),
        expected
    );
    assert_eq!(MenuFooter::new(&style).generate().unwrap_err(), expected);
    assert_eq!(MenuPrompt::new(&style).generate().unwrap_err(), expected);
}

#[test]
fn compose_stops_at_first_error() {
    let good = ascii(40);
    let bad = ascii(2);
    let header = MenuHeader::new(&good).title("ok");
    let footer = MenuFooter::new(&bad);
    assert!(compose(&[&header, &footer]).is_err());
}

// Properties

prop_compose! {
    fn arb_style()(
        kind in prop_oneof![
            Just(BorderKind::Ascii),
            Just(BorderKind::Light),
            Just(BorderKind::Heavy),
            Just(BorderKind::Double),
        ],
        margins in (0usize..3, 0usize..6, 0usize..3, 0usize..6),
        padding in (0usize..3, 0usize..6, 0usize..3, 0usize..6),
        content in 1usize..50,
        align in any::<Align>(),
    ) -> MenuStyle {
        let margins = Margins::new(margins.0, margins.1, margins.2, margins.3);
        let padding = Padding::new(padding.0, padding.1, padding.2, padding.3);
        let width = margins.horizontal() + padding.horizontal() + 2 + content;
        MenuStyle::default()
            .with_width(width)
            .with_border(kind)
            .with_margins(margins)
            .with_padding(padding)
            .with_title_align(align)
            .with_text_align(align)
    }
}

fn every_section(style: &MenuStyle, text: &str, items: Vec<MenuItem>) -> Vec<String> {
    let header = MenuHeader::new(style).title(text).subtitle(text);
    let body = TextSection::new(style)
        .text(text)
        .show_top_border(true)
        .show_bottom_border(true);
    let items = ItemsSection::new(style, items)
        .show_top_border(true)
        .show_bottom_border(true);
    let footer = MenuFooter::new(style).text(text).show_top_border(true);
    let prompt = MenuPrompt::new(style).prompt(text);
    let bordered = MenuPrompt::new(style).prompt(text).bordered(true);
    compose(&[&header, &body, &items, &footer, &prompt, &bordered]).unwrap()
}

proptest! {
    /// Every line of every section is exactly the configured width.
    #[test]
    fn all_lines_share_the_configured_width(
        style in arb_style(),
        text in "[a-zA-Z0-9 .,!?日本─]{0,80}",
        names in prop::collection::vec("[a-z]{1,20}", 0..15),
    ) {
        let items = names.into_iter().map(MenuItem::new).collect();
        for line in every_section(&style, &text, items) {
            prop_assert_eq!(crate::display_width(&line), style.width);
        }
    }

    /// Growing a top or bottom margin by N adds exactly N blank lines.
    #[test]
    fn vertical_margins_are_additive(style in arb_style(), extra in 0usize..5) {
        let mut grown = style.clone();
        grown.margins.top += extra;
        grown.margins.bottom += extra;

        let before = [
            MenuHeader::new(&style).title("t").generate().unwrap(),
            TextSection::new(&style).text("t").generate().unwrap(),
            MenuFooter::new(&style).generate().unwrap(),
            MenuPrompt::new(&style).generate().unwrap(),
        ];
        let after = [
            MenuHeader::new(&grown).title("t").generate().unwrap(),
            TextSection::new(&grown).text("t").generate().unwrap(),
            MenuFooter::new(&grown).generate().unwrap(),
            MenuPrompt::new(&grown).generate().unwrap(),
        ];

        let blank = " ".repeat(style.width);
        for (before, after) in before.iter().zip(&after) {
            prop_assert_eq!(after.len(), before.len() + 2 * extra);
            prop_assert!(after[..extra].iter().all(|line| *line == blank));
            prop_assert!(after[after.len() - extra..].iter().all(|line| *line == blank));
            prop_assert_eq!(&after[extra..after.len() - extra], &before[..]);
        }
    }

    /// Growing a left margin by N shifts every line right by N columns.
    #[test]
    fn horizontal_margins_are_additive(style in arb_style(), extra in 0usize..5) {
        let mut grown = style.clone();
        grown.margins.left += extra;
        grown.width += extra;

        let before = MenuHeader::new(&style).title("title").generate().unwrap();
        let after = MenuHeader::new(&grown).title("title").generate().unwrap();

        let indent = " ".repeat(extra);
        prop_assert_eq!(before.len(), after.len());
        for (before, after) in before.iter().zip(&after) {
            prop_assert_eq!(after, &format!("{indent}{before}"));
        }
    }

    /// Empty item lists render only their dividers, whatever the spacing.
    #[test]
    fn empty_items_ignore_spacing(style in arb_style()) {
        let lines = ItemsSection::new(&style, Vec::new())
            .show_top_border(true)
            .show_bottom_border(true)
            .generate()
            .unwrap();
        prop_assert_eq!(lines.len(), 2);
    }
}
