//! End-to-end copy and hover flows against in-memory clipboards, without a window.

use itc::catalog::{PhraseCatalog, PhraseEntry, PLACEHOLDER_GLOSS};
use itc::clipboard::{ClipboardWriter, FailingClipboard, MemoryClipboard};
use itc::dispatch::{CopyDispatcher, CopyOutcome, PhraseBoard};
use itc::shortcuts::Hotkey;
use itc::utils::ClipboardError;
use proptest::prelude::*;

fn two_phrase_catalog() -> PhraseCatalog {
    PhraseCatalog::new(vec![
        PhraseEntry::new("ﷺ", "salutation"),
        PhraseEntry::new("ﷻ", "majesty"),
    ])
}

#[test]
fn copy_first_and_gloss_second() {
    let catalog = two_phrase_catalog();
    let clipboard = MemoryClipboard::new();
    let mut dispatcher = CopyDispatcher::new(clipboard.clone());

    dispatcher.copy(&catalog.entries()[0]).expect("copy");

    assert_eq!(clipboard.contents().as_deref(), Some("ﷺ"));
    assert_eq!(dispatcher.gloss_for(Some(&catalog.entries()[1])), "majesty");
}

#[test]
fn every_builtin_phrase_round_trips_through_clipboard() {
    let catalog = PhraseCatalog::builtin();
    let clipboard = MemoryClipboard::new();
    let mut dispatcher = CopyDispatcher::new(clipboard.clone());

    for entry in catalog.entries() {
        dispatcher.copy(entry).expect("copy");
        assert_eq!(clipboard.contents().as_deref(), Some(entry.display_text.as_str()));
    }
    assert_eq!(clipboard.write_count(), catalog.len());
}

#[test]
fn failing_backend_returns_error_and_board_keeps_working() {
    let catalog = two_phrase_catalog();
    let mut dispatcher = CopyDispatcher::new(FailingClipboard::new("permission denied"));

    let err = dispatcher.copy(&catalog.entries()[0]).unwrap_err();
    assert_eq!(err, ClipboardError::Unavailable("permission denied".to_string()));

    let mut board = PhraseBoard::new(catalog, dispatcher);
    for _ in 0..3 {
        assert!(matches!(board.on_activate(1), CopyOutcome::Failed { index: 1, .. }));
    }
    assert_eq!(board.on_hover_enter(1), "majesty");
}

#[test]
fn empty_catalog_has_nothing_to_activate() {
    let clipboard = MemoryClipboard::new();
    let mut board = PhraseBoard::new(
        PhraseCatalog::default(),
        CopyDispatcher::new(clipboard.clone()),
    );

    assert!(board.catalog().entries().is_empty());
    assert_eq!(board.on_activate(0), CopyOutcome::NoSuchEntry(0));
    assert_eq!(board.on_hover_enter(0), PLACEHOLDER_GLOSS);
    assert!(board.shortcuts().is_empty());
    assert!(clipboard.contents().is_none());
}

#[test]
fn last_write_wins() {
    let catalog = PhraseCatalog::builtin();
    let clipboard = MemoryClipboard::new();
    let mut board = PhraseBoard::new(catalog, CopyDispatcher::new(clipboard.clone()));

    board.on_activate(3);
    board.on_shortcut(&Hotkey::parse("Alt+'").expect("hotkey"));

    assert_eq!(clipboard.contents().as_deref(), Some("\u{FDFD}"));
}

#[test]
fn boxed_backend_is_a_writer() {
    let clipboard = MemoryClipboard::new();
    let boxed: Box<dyn ClipboardWriter> = Box::new(clipboard.clone());
    let mut dispatcher = CopyDispatcher::new(boxed);

    dispatcher
        .copy(&PhraseEntry::new("عَزَّ وَ جَلّ", "mighty"))
        .expect("copy");
    assert_eq!(clipboard.contents().as_deref(), Some("عَزَّ وَ جَلّ"));
    assert_eq!(dispatcher.clipboard().id(), "memory");
}

fn arb_catalog() -> impl Strategy<Value = PhraseCatalog> {
    prop::collection::vec(("\\PC{1,12}", "\\PC{0,40}"), 0..24).prop_map(|pairs| {
        PhraseCatalog::new(
            pairs
                .into_iter()
                .map(|(phrase, gloss)| PhraseEntry::new(phrase, gloss))
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn copy_then_read_returns_display_text(catalog in arb_catalog()) {
        let clipboard = MemoryClipboard::new();
        let mut dispatcher = CopyDispatcher::new(clipboard.clone());
        for entry in catalog.entries() {
            dispatcher.copy(entry).unwrap();
            prop_assert_eq!(clipboard.contents(), Some(entry.display_text.clone()));
        }
    }

    #[test]
    fn gloss_is_idempotent(catalog in arb_catalog()) {
        let dispatcher = CopyDispatcher::new(MemoryClipboard::new());
        for entry in catalog.entries() {
            let first = dispatcher.gloss_for(Some(entry)).to_string();
            let second = dispatcher.gloss_for(Some(entry)).to_string();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, entry.gloss_text.clone());
        }
    }

    #[test]
    fn entries_order_is_stable(catalog in arb_catalog()) {
        let first: Vec<PhraseEntry> = catalog.entries().to_vec();
        let second: Vec<PhraseEntry> = catalog.entries().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hover_then_leave_restores_placeholder(catalog in arb_catalog(), index in 0usize..32) {
        let mut board = PhraseBoard::new(catalog.clone(), CopyDispatcher::new(MemoryClipboard::new()));
        let shown = board.on_hover_enter(index).to_string();
        match catalog.get(index) {
            Some(entry) => prop_assert_eq!(shown, entry.gloss_text.clone()),
            None => prop_assert_eq!(shown, PLACEHOLDER_GLOSS),
        }
        prop_assert_eq!(board.on_hover_leave(), PLACEHOLDER_GLOSS);
    }
}
