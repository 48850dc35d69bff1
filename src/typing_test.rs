use super::*;

fn frames(animation: &mut TypingAnimation, count: usize) -> Vec<Frame> {
    (0..count).map(|_| animation.tick()).collect()
}

#[test]
fn empty_phrase_list_is_rejected() {
    assert!(TypingAnimation::new(Vec::<String>::new()).is_none());
}

#[test]
fn single_word_runs_the_reference_sequence() {
    let mut animation = TypingAnimation::new(["Hi"]).unwrap();

    let typed = frames(&mut animation, 2);
    assert_eq!(typed[0], Frame { text: "H".into(), delay_ms: TYPE_DELAY_MS });
    assert_eq!(typed[1], Frame { text: "Hi".into(), delay_ms: HOLD_DELAY_MS });

    let deleted = frames(&mut animation, 2);
    assert_eq!(deleted[0], Frame { text: "H".into(), delay_ms: DELETE_DELAY_MS });
    assert_eq!(deleted[1], Frame { text: String::new(), delay_ms: ADVANCE_DELAY_MS });

    // single word wraps back onto itself
    assert_eq!(animation.tick().text, "H");
}

#[test]
fn words_are_visited_in_order_and_wrap() {
    let mut animation = TypingAnimation::new(["ab", "c"]).unwrap();
    let mut completed = Vec::new();

    for _ in 0..40 {
        let frame = animation.tick();
        if frame.delay_ms == HOLD_DELAY_MS {
            completed.push(frame.text);
        }
    }

    assert!(completed.len() >= 4);
    for (index, word) in completed.iter().enumerate() {
        let expected = if index % 2 == 0 { "ab" } else { "c" };
        assert_eq!(word, expected);
    }
}

#[test]
fn zero_length_phrase_passes_through() {
    let mut animation = TypingAnimation::new(["", "ok"]).unwrap();

    // typing a zero-length word immediately reaches "fully typed" and holds
    let hold = animation.tick();
    assert_eq!(hold, Frame { text: String::new(), delay_ms: HOLD_DELAY_MS });

    // the delete pass finds nothing to remove and advances to the next word
    let advance = animation.tick();
    assert_eq!(advance, Frame { text: String::new(), delay_ms: ADVANCE_DELAY_MS });

    assert_eq!(animation.tick().text, "o");
}

#[test]
fn prefixes_are_char_boundaries_not_bytes() {
    let mut animation = TypingAnimation::new(["héllo"]).unwrap();

    let typed = frames(&mut animation, 5);
    let texts: Vec<&str> = typed.iter().map(|frame| frame.text.as_str()).collect();
    assert_eq!(texts, ["h", "hé", "hél", "héll", "héllo"]);
    assert_eq!(typed[4].delay_ms, HOLD_DELAY_MS);

    let deleted = frames(&mut animation, 5);
    let texts: Vec<&str> = deleted.iter().map(|frame| frame.text.as_str()).collect();
    assert_eq!(texts, ["héll", "hél", "hé", "h", ""]);
}

#[test]
fn delays_match_phase_at_every_step() {
    let mut animation = TypingAnimation::new(["abc", "de"]).unwrap();

    for _ in 0..50 {
        let frame = animation.tick();
        assert!(matches!(
            frame.delay_ms,
            TYPE_DELAY_MS | DELETE_DELAY_MS | HOLD_DELAY_MS | ADVANCE_DELAY_MS
        ));
        assert!(frame.text.chars().count() <= 3);
    }
}
