#[cfg(test)]
mod tests {
    use crate::controller::{SlideshowController, Typewriter};
    use crate::deck::Deck;
    use crate::errors::VitrineError;
    use crate::navigator::{NavAction, SidebarNav};
    use crate::timing::Repeat;

    fn controller(slides: usize) -> SlideshowController {
        let captions = (0..slides).map(|i| format!("Caption {i}")).collect();
        SlideshowController::new(captions, 5.0, 0.07)
    }

    #[test]
    fn test_set_active_slide_marks_exactly_one() {
        let mut c = controller(5);

        c.set_active_slide(3);
        assert_eq!(c.active_index(), 3);

        let active_count = (0..5).filter(|&i| c.is_active(i)).count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_set_active_slide_out_of_range_is_noop() {
        let mut c = controller(5);
        c.set_active_slide(2);

        c.set_active_slide(5);
        assert_eq!(c.active_index(), 2);

        c.set_active_slide(99);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_set_active_slide_replays_caption() {
        let mut c = controller(5);
        c.set_active_slide(2);
        assert_eq!(c.caption(), "");
        assert!(c.is_typing());

        // 2 seconds at 70 ms per character is plenty for "Caption 2"
        for _ in 0..20 {
            c.tick(0.1);
        }
        assert_eq!(c.caption(), "Caption 2");
        assert!(!c.is_typing());
    }

    #[test]
    fn test_advance_wraps_both_directions() {
        let mut c = controller(5);

        c.set_active_slide(2);
        c.advance(1);
        assert_eq!(c.active_index(), 3);

        c.set_active_slide(4);
        c.advance(1);
        assert_eq!(c.active_index(), 0);

        c.advance(-1);
        assert_eq!(c.active_index(), 4);
    }

    #[test]
    fn test_advance_matches_modular_jump() {
        for delta in [-12_isize, -7, -5, -1, 0, 1, 5, 9, 10] {
            let mut stepped = controller(5);
            stepped.set_active_slide(2);
            stepped.advance(delta);

            let expected = (2_isize + delta).rem_euclid(5) as usize;
            assert_eq!(stepped.active_index(), expected, "delta {delta}");
        }
    }

    #[test]
    fn test_empty_controller_is_inert() {
        let mut c = SlideshowController::new(Vec::new(), 5.0, 0.07);

        c.advance(1);
        c.set_active_slide(0);
        assert!(!c.tick(10.0));
        assert_eq!(c.slide_count(), 0);
        assert!(!c.is_active(0));
    }

    #[test]
    fn test_typewriter_reveals_incrementally() {
        let mut tw = Typewriter::new(0.07);
        tw.start("Hi!".to_string());
        assert_eq!(tw.visible_text(), "");

        tw.tick(0.1);
        assert_eq!(tw.visible_text(), "H");
        tw.tick(0.1);
        assert_eq!(tw.visible_text(), "Hi");
        tw.tick(0.1);
        assert_eq!(tw.visible_text(), "Hi!");
        assert!(!tw.is_typing());
    }

    #[test]
    fn test_typewriter_restart_leaks_nothing() {
        let mut tw = Typewriter::new(0.07);
        tw.start("Hello world".to_string());
        for _ in 0..3 {
            tw.tick(0.1);
        }
        assert_eq!(tw.visible_text(), "Hel");

        // Restart mid-sequence; the first caption must vanish entirely
        tw.start("Bye".to_string());
        assert_eq!(tw.visible_text(), "");

        for _ in 0..10 {
            tw.tick(0.1);
        }
        assert_eq!(tw.visible_text(), "Bye");
        assert!(!tw.is_typing());
    }

    #[test]
    fn test_empty_caption_finishes_immediately() {
        let mut tw = Typewriter::new(0.07);
        tw.start(String::new());
        assert!(!tw.is_typing());
        assert!(!tw.tick(0.1));
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn test_autoplay_advances_periodically() {
        let mut c = controller(3);
        assert_eq!(c.active_index(), 0);

        c.tick(4.9);
        assert_eq!(c.active_index(), 0);
        c.tick(0.2);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_manual_navigation_resets_autoplay() {
        let mut c = controller(3);

        c.tick(4.9);
        c.advance(1);
        assert_eq!(c.active_index(), 1);

        // A full interval must elapse again before the next auto tick
        c.tick(4.9);
        assert_eq!(c.active_index(), 1);
        c.tick(0.2);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let mut c = controller(3);

        c.set_hovered(true);
        c.tick(10.0);
        c.tick(10.0);
        assert_eq!(c.active_index(), 0);

        // Leaving grants a fresh full interval
        c.set_hovered(false);
        c.tick(4.9);
        assert_eq!(c.active_index(), 0);
        c.tick(0.2);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_repeat_cancel_and_restart() {
        let mut timer = Repeat::new(1.0);
        assert!(!timer.tick(5.0));

        timer.restart();
        assert!(!timer.tick(0.5));
        assert!(timer.tick(0.5));
        assert!(!timer.tick(0.9));

        timer.cancel();
        assert!(!timer.tick(5.0));

        timer.restart();
        assert!(!timer.tick(0.9));
        assert!(timer.tick(0.2));
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut nav = SidebarNav::new(true);
        nav.toggle();
        assert!(!nav.is_open());
        nav.toggle();
        assert!(nav.is_open());
    }

    #[test]
    fn test_sidebar_jump_entry_skips_ripple() {
        let mut nav = SidebarNav::new(true);

        // An earlier ripple on another entry must survive a jump click
        nav.select(1, (10.0, 10.0), None);
        let action = nav.select(0, (5.0, 5.0), Some(0));

        assert_eq!(action, NavAction::JumpToSlide(0));
        assert_eq!(nav.active_entry(), Some(0));
        let ripple = nav.ripple().expect("ripple should be untouched");
        assert_eq!(ripple.entry, 1);
    }

    #[test]
    fn test_sidebar_ripple_entry_places_ripple() {
        let mut nav = SidebarNav::new(true);

        let action = nav.select(2, (30.0, 12.0), None);
        assert_eq!(action, NavAction::None);
        assert_eq!(nav.active_entry(), Some(2));

        let ripple = nav.ripple().expect("ripple should be set");
        assert_eq!(ripple.entry, 2);
        assert_eq!(ripple.x, 30.0);
        assert_eq!(ripple.y, 12.0);

        // The record persists after the animation finishes
        nav.tick(1.0);
        let ripple = nav.ripple().expect("ripple marker persists");
        assert!(ripple.finished());

        // Re-clicking replaces it, restarting the animation
        nav.select(2, (4.0, 8.0), None);
        let ripple = nav.ripple().unwrap();
        assert_eq!(ripple.age, 0.0);
        assert_eq!(ripple.x, 4.0);
    }

    #[test]
    fn test_sidebar_single_active_entry() {
        let mut nav = SidebarNav::new(true);
        nav.select(1, (0.0, 0.0), None);
        nav.select(3, (0.0, 0.0), Some(2));
        assert_eq!(nav.active_entry(), Some(3));
    }

    #[test]
    fn test_deck_from_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("deck.json");
        std::fs::write(
            &manifest,
            r#"{
                "slides": [
                    { "image": "one.jpg", "caption": "Welcome home" },
                    { "image": "two.jpg" }
                ],
                "sidebar": [
                    { "label": "Home", "slide": 0 },
                    { "label": "Pricing" }
                ]
            }"#,
        )
        .unwrap();

        let deck = Deck::load(&manifest).unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].caption, "Welcome home");
        assert_eq!(deck.slides[1].caption, "");
        assert_eq!(deck.slides[0].image, dir.path().join("one.jpg"));
        assert_eq!(deck.entries[0].target, Some(0));
        assert_eq!(deck.entries[1].target, None);
    }

    #[test]
    fn test_deck_rejects_out_of_range_target() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("deck.json");
        std::fs::write(
            &manifest,
            r#"{
                "slides": [{ "image": "one.jpg" }],
                "sidebar": [{ "label": "Support", "slide": 6 }]
            }"#,
        )
        .unwrap();

        let err = Deck::load(&manifest).unwrap_err();
        assert!(matches!(
            err,
            VitrineError::TargetOutOfRange {
                target: 6,
                count: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_deck_from_folder_sorts_naturally() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a10.png", "a2.png", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let deck = Deck::load(dir.path()).unwrap();
        let captions: Vec<&str> = deck.slides.iter().map(|s| s.caption.as_str()).collect();
        assert_eq!(captions, ["a2", "a10", "b"]);

        // One sidebar entry per slide, targeting it
        assert_eq!(deck.entries.len(), 3);
        assert_eq!(deck.entries[1].target, Some(1));
    }

    #[test]
    fn test_deck_rejects_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let err = Deck::load(dir.path()).unwrap_err();
        assert!(matches!(err, VitrineError::EmptyDeck { .. }));
    }

    #[test]
    fn test_deck_rejects_unknown_path_kind() {
        let err = Deck::load(std::path::Path::new("deck.toml")).unwrap_err();
        assert!(matches!(err, VitrineError::UnsupportedDeckPath { .. }));
    }
}
