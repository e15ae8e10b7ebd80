// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the string staging buffer.
//!
//! These tests do not need the SDL library: they stage strings and read them
//! back through the same decode path used for strings returned by SDL.

use sdl3::{DEFAULT_CAPACITY, EncodedStr, Error, Ownership, StringEncoder, decode};

/// Reads a staged string back through its raw location.
fn read_back(encoded: &EncodedStr) -> Option<String> {
    unsafe { decode(encoded.as_ptr(), Ownership::Borrowed) }
}

#[test]
fn hello_world_round_trip() {
    let mut strings = StringEncoder::new();
    let encoded = strings.encode(Some("Hello World!")).unwrap();
    assert_eq!(read_back(&encoded).as_deref(), Some("Hello World!"));
    assert_eq!(encoded.len(), 12);
    assert_eq!(strings.cursor(), 13);
}

#[test]
fn empty_string_is_not_null() {
    let mut strings = StringEncoder::new();
    let encoded = strings.encode(Some("")).unwrap();
    assert!(!encoded.is_null());
    assert!(encoded.is_empty());
    assert_eq!(read_back(&encoded).as_deref(), Some(""));
    assert_eq!(strings.cursor(), 1);
}

#[test]
fn absent_text_is_the_null_sentinel() {
    let mut strings = StringEncoder::new();
    let encoded = strings.encode(None).unwrap();
    assert!(encoded.is_null());
    assert!(encoded.as_ptr().is_null());
    assert_eq!(encoded.offset(), None);
    assert_eq!(encoded, EncodedStr::null());
    assert_eq!(strings.cursor(), 0);
    assert_eq!(read_back(&encoded), None);
    assert!(!strings.is_live(&encoded));
}

#[test]
fn multi_byte_text_round_trips() {
    let mut strings = StringEncoder::new();
    for text in ["héllo wörld", "日本語のタイトル", "emoji 🦀🎮", "Ω≈ç√∫"] {
        let encoded = strings.encode(Some(text)).unwrap();
        assert_eq!(encoded.len(), text.len());
        assert_eq!(read_back(&encoded).as_deref(), Some(text));
    }
}

#[test]
fn consecutive_strings_are_packed_and_terminated() {
    let mut strings = StringEncoder::new();
    let title = strings.encode(Some("title")).unwrap();
    let message = strings.encode(Some("message")).unwrap();

    assert_eq!(title.offset(), Some(0));
    assert_eq!(message.offset(), Some(6));
    assert_eq!(strings.get(&title).unwrap().to_bytes_with_nul(), b"title\0");
    assert_eq!(strings.get(&message).unwrap().to_bytes_with_nul(), b"message\0");

    // Both stay readable through their raw locations until the buffer wraps.
    assert_eq!(read_back(&title).as_deref(), Some("title"));
    assert_eq!(read_back(&message).as_deref(), Some("message"));
}

#[test]
fn cursor_wraps_when_the_next_string_reaches_capacity() {
    let mut strings = StringEncoder::with_capacity(32);
    let first = strings.encode(Some("0123456789")).unwrap(); // 0..11
    let second = strings.encode(Some("abcdefghij")).unwrap(); // 11..22
    assert_eq!(strings.cursor(), 22);
    assert_eq!(strings.generation(), 0);

    // 22 + 10 == 32 reaches capacity: wrap before writing.
    let third = strings.encode(Some("ABCDEFGHI")).unwrap();
    assert_eq!(third.offset(), Some(0));
    assert_eq!(third.generation(), 1);
    assert_eq!(strings.generation(), 1);
    assert_eq!(strings.cursor(), 10);

    assert!(!strings.is_live(&first));
    assert!(strings.is_live(&second));
    assert!(strings.is_live(&third));
    assert_eq!(strings.get(&first), None);
    assert_eq!(strings.get(&second).unwrap().to_str().unwrap(), "abcdefghij");
    assert_eq!(read_back(&third).as_deref(), Some("ABCDEFGHI"));
}

#[test]
fn cursor_wraps_once_per_overflow() {
    let mut strings = StringEncoder::with_capacity(64);
    let text = "fifteen bytes!!"; // 16 bytes staged
    let mut last_generation = 0;
    let mut wraps = 0;
    for _ in 0..40 {
        let encoded = strings.encode(Some(text)).unwrap();
        let start = encoded.offset().unwrap();
        assert!(start < strings.capacity());
        assert!(start + encoded.len() < strings.capacity());
        if encoded.generation() != last_generation {
            assert_eq!(encoded.generation(), last_generation + 1);
            assert_eq!(start, 0);
            last_generation = encoded.generation();
            wraps += 1;
        }
        assert_eq!(read_back(&encoded).as_deref(), Some(text));
    }
    // 64 / 16 with the `>=` policy leaves room for three strings per pass.
    assert_eq!(wraps, 13);
    assert_eq!(strings.generation(), 13);
}

#[test]
fn previous_generation_survives_beyond_the_cursor() {
    let mut strings = StringEncoder::with_capacity(16);
    let early = strings.encode(Some("abc")).unwrap(); // 0..4
    let late = strings.encode(Some("defgh")).unwrap(); // 4..10
    let wrapped = strings.encode(Some("ijklmn")).unwrap(); // 10 + 7 >= 16 → 0..7

    assert_eq!(wrapped.offset(), Some(0));
    assert!(!strings.is_live(&early));
    assert!(!strings.is_live(&late));

    let mut strings = StringEncoder::with_capacity(16);
    let _ = strings.encode(Some("ab")).unwrap(); // 0..3
    let kept = strings.encode(Some("cdefgh")).unwrap(); // 3..10
    let small = strings.encode(Some("ijklmn")).unwrap(); // wraps, 0..7
    assert_eq!(small.offset(), Some(0));
    assert!(!strings.is_live(&kept));

    let mut strings = StringEncoder::with_capacity(16);
    let _ = strings.encode(Some("abcdefg")).unwrap(); // 0..8
    let kept = strings.encode(Some("hi")).unwrap(); // 8..11
    let small = strings.encode(Some("jklmn")).unwrap(); // 11 + 6 >= 16 → 0..6
    assert_eq!(small.offset(), Some(0));
    assert!(strings.is_live(&kept));
    assert_eq!(strings.get(&kept).unwrap().to_bytes(), b"hi");
}

#[test]
fn string_filling_the_whole_buffer_is_accepted() {
    let mut strings = StringEncoder::with_capacity(8);
    let full = strings.encode(Some("1234567")).unwrap();
    assert_eq!(full.offset(), Some(0));
    assert_eq!(strings.cursor(), 8);
    assert_eq!(read_back(&full).as_deref(), Some("1234567"));

    let next = strings.encode(Some("x")).unwrap();
    assert_eq!(next.offset(), Some(0));
    assert!(!strings.is_live(&full));
}

#[test]
fn oversize_string_is_rejected_without_side_effects() {
    let mut strings = StringEncoder::with_capacity(8);
    let kept = strings.encode(Some("abc")).unwrap();

    match strings.encode(Some("12345678")) {
        Err(Error::StringTooLong { len, capacity }) => {
            assert_eq!(len, 8);
            assert_eq!(capacity, 8);
        }
        other => panic!("expected StringTooLong, got {other:?}"),
    }
    assert_eq!(strings.cursor(), 4);
    assert_eq!(strings.generation(), 0);
    assert!(strings.is_live(&kept));
}

#[test]
fn interior_nul_is_rejected() {
    let mut strings = StringEncoder::new();
    match strings.encode(Some("abc\0def")) {
        Err(Error::InteriorNul { position }) => assert_eq!(position, 3),
        other => panic!("expected InteriorNul, got {other:?}"),
    }
    assert_eq!(strings.cursor(), 0);
}

#[test]
fn reset_invalidates_everything() {
    let mut strings = StringEncoder::new();
    let a = strings.encode(Some("a")).unwrap();
    strings.reset();
    assert_eq!(strings.cursor(), 0);
    assert!(!strings.is_live(&a));
    let b = strings.encode(Some("b")).unwrap();
    assert_eq!(b.offset(), Some(0));
}

#[test]
fn slices_from_another_encoder_are_not_live() {
    let mut first = StringEncoder::new();
    let mut second = StringEncoder::new();
    let foreign = first.encode(Some("mine")).unwrap();
    let _ = second.encode(Some("yours")).unwrap();
    assert!(!second.is_live(&foreign));
    assert_eq!(second.get(&foreign), None);
}

#[test]
fn location_is_stable_when_the_encoder_moves() {
    let mut strings = StringEncoder::new();
    let encoded = strings.encode(Some("stable")).unwrap();
    let moved = Box::new(strings);
    assert!(moved.is_live(&encoded));
    assert_eq!(read_back(&encoded).as_deref(), Some("stable"));
}

#[test]
fn default_capacity() {
    let strings = StringEncoder::default();
    assert_eq!(strings.capacity(), DEFAULT_CAPACITY);
    assert_eq!(strings.capacity(), 4096);
}

/// Two arguments of one call that fit separately but not together: staged one
/// by one, the second silently replaces the first.
#[test]
fn arguments_of_one_call_must_fit_together() {
    let org = "o".repeat(2100);
    let app = "a".repeat(2100);

    let mut strings = StringEncoder::new();
    let first = strings.encode(Some(org.as_str())).unwrap();
    let _second = strings.encode(Some(app.as_str())).unwrap();
    assert!(!strings.is_live(&first));
    assert!(read_back(&first).unwrap().starts_with("aaaa"));

    let mut strings = StringEncoder::new();
    let error = strings.encode_all([Some(org.as_str()), Some(app.as_str())]).unwrap_err();
    assert!(matches!(
        error,
        Error::StringTooLong {
            len: 4200,
            capacity: 4096
        }
    ));
}

#[test]
fn arguments_of_one_call_survive_a_wrap_that_misses_them() {
    let mut strings = StringEncoder::with_capacity(64);
    strings.encode(Some("x".repeat(40).as_str())).unwrap();
    assert_eq!(strings.cursor(), 41);

    // The second argument wraps to the start and stays clear of the first.
    let [name, value] = strings
        .encode_all([Some("0123456789"), Some("abcdefghijklmnopqrst")])
        .unwrap();
    assert_eq!(name.offset(), Some(41));
    assert_eq!(value.offset(), Some(0));
    assert_eq!(read_back(&name).as_deref(), Some("0123456789"));
    assert_eq!(read_back(&value).as_deref(), Some("abcdefghijklmnopqrst"));
}

#[test]
fn arguments_of_one_call_keep_null_and_errors() {
    let mut strings = StringEncoder::with_capacity(32);
    let [absent, present] = strings.encode_all([None, Some("driver")]).unwrap();
    assert!(absent.is_null());
    assert_eq!(read_back(&present).as_deref(), Some("driver"));

    assert!(matches!(
        strings.encode_all([Some("ok"), Some("bad\0value")]),
        Err(Error::InteriorNul { position: 3 })
    ));
}
