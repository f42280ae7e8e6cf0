use pretty_assertions::assert_eq;

use super::*;

// === Basic Navigation ===

#[test]
fn next_byte_yields_in_order() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.next_byte(), Some(b'a'));
    assert_eq!(cursor.next_byte(), Some(b'b'));
    assert_eq!(cursor.next_byte(), None);
    assert!(cursor.at_end());
}

#[test]
fn next_byte_at_end_does_not_move() {
    let mut cursor = Cursor::new("x");
    let _ = cursor.next_byte();
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.next_byte(), None);
    assert_eq!(cursor.position(), 1);
}

#[test]
fn peek_does_not_consume() {
    let cursor = Cursor::new("q");
    assert_eq!(cursor.peek(), Some(b'q'));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn empty_input_is_at_end() {
    let mut cursor = Cursor::new("");
    assert!(cursor.at_end());
    assert!(cursor.is_empty());
    assert_eq!(cursor.next_byte(), None);
}

// === Unget ===

#[test]
fn unget_restores_previous_offset() {
    let mut cursor = Cursor::new("abc");
    let _ = cursor.next_byte();
    let _ = cursor.next_byte();
    cursor.unget();
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.next_byte(), Some(b'b'));
}

#[test]
fn unget_at_start_is_noop() {
    let mut cursor = Cursor::new("abc");
    cursor.unget();
    cursor.unget();
    assert_eq!(cursor.position(), 0);
}

// === Mark / Reset ===

#[test]
fn reset_to_restores_mark() {
    let mut cursor = Cursor::new("hello");
    let _ = cursor.next_byte();
    let mark = cursor.mark();
    cursor.skip_while(|_| true);
    assert!(cursor.at_end());
    cursor.reset_to(mark);
    assert_eq!(cursor.position(), 1);
    assert_eq!(mark.offset(), 1);
}

#[test]
fn reset_to_foreign_mark_past_end_is_ignored() {
    let mut long = Cursor::new("a long input");
    long.skip_while(|_| true);
    let far = long.mark();

    let mut short = Cursor::new("ab");
    let _ = short.next_byte();
    short.reset_to(far);
    assert_eq!(short.position(), 1);
}

// === Slicing ===

#[test]
fn slice_from_is_zero_copy_view() {
    let text = "token rest";
    let mut cursor = Cursor::new(text);
    let start = cursor.mark();
    let n = cursor.skip_while(|b| b != b' ');
    assert_eq!(n, 5);
    let slice = cursor.slice_from(start);
    assert_eq!(slice, Some("token"));
    assert_eq!(slice.map(str::as_ptr), Some(text.as_ptr()));
}

#[test]
fn slice_from_inside_multibyte_char_is_none() {
    let mut cursor = Cursor::new("é");
    let start = cursor.mark();
    let _ = cursor.next_byte();
    assert_eq!(cursor.slice_from(start), None);
}

#[test]
fn remaining_tracks_offset() {
    let mut cursor = Cursor::new("k: v");
    cursor.skip_while(|b| b != b':');
    assert_eq!(cursor.remaining(), b": v");
    cursor.skip_while(|_| true);
    assert_eq!(cursor.remaining(), b"");
}

// === Transaction ===

#[test]
fn transaction_rolls_back_on_drop() {
    let mut cursor = Cursor::new("abc");
    {
        let mut tx = cursor.begin();
        let _ = tx.next_byte();
        let _ = tx.next_byte();
        assert_eq!(tx.consumed(), 2);
    }
    assert_eq!(cursor.position(), 0);
}

#[test]
fn transaction_commit_keeps_progress() {
    let mut cursor = Cursor::new("abc");
    let mut tx = cursor.begin();
    let _ = tx.next_byte();
    tx.commit();
    assert_eq!(cursor.position(), 1);
}

#[test]
fn nested_transactions_roll_back_independently() {
    let mut cursor = Cursor::new("abcd");
    let mut outer = cursor.begin();
    let _ = outer.next_byte();
    {
        let mut inner = outer.begin();
        let _ = inner.next_byte();
        let _ = inner.next_byte();
    }
    assert_eq!(outer.position(), 1);
    {
        let mut inner = outer.begin();
        let _ = inner.next_byte();
        inner.commit();
    }
    assert_eq!(outer.position(), 2);
    assert_eq!(outer.started_at().offset(), 0);
    drop(outer);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn transaction_rolls_back_on_early_return() {
    fn take_two(cursor: &mut Cursor<'_>) -> Option<(u8, u8)> {
        let mut tx = cursor.begin();
        let a = tx.next_byte()?;
        let b = tx.next_byte()?;
        tx.commit();
        Some((a, b))
    }

    let mut cursor = Cursor::new("x");
    assert_eq!(take_two(&mut cursor), None);
    assert_eq!(cursor.position(), 0);

    let mut cursor = Cursor::new("xy");
    assert_eq!(take_two(&mut cursor), Some((b'x', b'y')));
    assert!(cursor.at_end());
}

// === Property Tests ===

mod proptest_cursor {
    use super::Cursor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn offset_stays_in_bounds(text in ".{0,32}", steps in proptest::collection::vec(0u8..4, 0..64)) {
            let mut cursor = Cursor::new(&text);
            for step in steps {
                match step {
                    0 => { let _ = cursor.next_byte(); }
                    1 => cursor.unget(),
                    2 => { cursor.skip_while(|b| b.is_ascii_alphanumeric()); }
                    _ => { let mark = cursor.mark(); cursor.reset_to(mark); }
                }
                prop_assert!(cursor.position() <= cursor.len());
            }
        }

        #[test]
        fn unget_after_successful_next_restores(text in "[ -~]{1,32}", skip in 0usize..32) {
            let mut cursor = Cursor::new(&text);
            for _ in 0..skip.min(text.len() - 1) {
                let _ = cursor.next_byte();
            }
            let before = cursor.position();
            prop_assert!(cursor.next_byte().is_some());
            cursor.unget();
            prop_assert_eq!(cursor.position(), before);
        }

        #[test]
        fn uncommitted_transaction_always_restores(text in ".{0,32}", take in 0usize..40) {
            let mut cursor = Cursor::new(&text);
            let _ = cursor.next_byte();
            let before = cursor.position();
            {
                let mut tx = cursor.begin();
                for _ in 0..take {
                    let _ = tx.next_byte();
                }
            }
            prop_assert_eq!(cursor.position(), before);
        }
    }
}
