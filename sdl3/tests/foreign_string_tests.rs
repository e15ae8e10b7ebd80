// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Tests for strings coming back from native code.
//!
//! Owned strings are allocated with `CString::into_raw` and released by an
//! instrumented deallocator that records every pointer it frees, so the tests
//! can check that each string is released exactly once.

use std::{
    cell::RefCell,
    ffi::{CString, c_char, c_void},
};

use sdl3::{Deallocator, Ownership, SdlStr, SdlString, decode};

/// Deallocator that frees `CString::into_raw` allocations and records them.
#[derive(Default)]
struct CountingDeallocator {
    freed: RefCell<Vec<usize>>,
}

impl CountingDeallocator {
    fn freed(&self) -> Vec<usize> {
        self.freed.borrow().clone()
    }
}

impl Deallocator for CountingDeallocator {
    unsafe fn free(&self, ptr: *mut c_void) {
        self.freed.borrow_mut().push(ptr as usize);
        drop(unsafe { CString::from_raw(ptr.cast()) });
    }
}

fn allocate(text: &str) -> *mut c_char {
    CString::new(text).unwrap().into_raw()
}

#[test]
fn borrowed_decode_never_releases() {
    let text = CString::new("SDL owns this").unwrap();
    let decoded = unsafe { decode(text.as_ptr(), Ownership::Borrowed) };
    assert_eq!(decoded.as_deref(), Some("SDL owns this"));
    // Still readable afterwards.
    assert_eq!(text.to_str().unwrap(), "SDL owns this");
}

#[test]
fn null_decodes_to_none() {
    let deallocator = CountingDeallocator::default();
    assert_eq!(
        unsafe { decode(std::ptr::null(), Ownership::Borrowed) },
        None
    );
    assert_eq!(
        unsafe { decode(std::ptr::null(), Ownership::Owned(&deallocator)) },
        None
    );
    assert!(deallocator.freed().is_empty());
}

#[test]
fn owned_decode_releases_exactly_once() {
    let deallocator = CountingDeallocator::default();
    let ptr = allocate("clipboard contents");
    let decoded = unsafe { decode(ptr, Ownership::Owned(&deallocator)) };
    assert_eq!(decoded.as_deref(), Some("clipboard contents"));
    assert_eq!(deallocator.freed(), vec![ptr as usize]);
}

#[test]
fn invalid_utf8_is_replaced() {
    let bytes = CString::new(vec![b'o', b'k', 0xFF, b'!']).unwrap();
    let decoded = unsafe { decode(bytes.as_ptr(), Ownership::Borrowed) };
    assert_eq!(decoded.as_deref(), Some("ok\u{FFFD}!"));
}

#[test]
fn sdl_string_into_string_releases_once() {
    let deallocator = CountingDeallocator::default();
    let ptr = allocate("/home/user/.local/share/org/app/");
    let owned = unsafe { SdlString::from_raw(ptr, &deallocator) };
    assert!(!owned.is_null());
    assert_eq!(
        owned.as_c_str().unwrap().to_str().unwrap(),
        "/home/user/.local/share/org/app/"
    );
    assert!(deallocator.freed().is_empty());

    let text = owned.into_string();
    assert_eq!(text.as_deref(), Some("/home/user/.local/share/org/app/"));
    // `into_string` consumed the handle; its drop must not free again.
    assert_eq!(deallocator.freed(), vec![ptr as usize]);
}

#[test]
fn sdl_string_drop_releases_once() {
    let deallocator = CountingDeallocator::default();
    let ptr = allocate("never read");
    {
        let _owned = unsafe { SdlString::from_raw(ptr, &deallocator) };
    }
    assert_eq!(deallocator.freed(), vec![ptr as usize]);
}

#[test]
fn null_sdl_string_never_releases() {
    let deallocator = CountingDeallocator::default();
    let owned = unsafe { SdlString::from_raw(std::ptr::null_mut(), &deallocator) };
    assert!(owned.is_null());
    assert_eq!(owned.as_c_str(), None);
    assert_eq!(owned.into_string(), None);

    drop(unsafe { SdlString::from_raw(std::ptr::null_mut(), &deallocator) });
    assert!(deallocator.freed().is_empty());
}

#[test]
fn sdl_str_views_without_releasing() {
    let text = CString::new("window title").unwrap();
    let view = unsafe { SdlStr::from_ptr(text.as_ptr()) };
    assert!(!view.is_null());
    assert_eq!(view.as_c_str().unwrap(), text.as_c_str());
    assert_eq!(view.to_str(), Some("window title"));
    assert_eq!(view.to_string_lossy().as_deref(), Some("window title"));

    let null = unsafe { SdlStr::from_ptr(std::ptr::null()) };
    assert!(null.is_null());
    assert_eq!(null.as_c_str(), None);
    assert_eq!(null.to_str(), None);
    assert_eq!(null.to_string_lossy(), None);
}

#[test]
fn sdl_str_formats_its_text() {
    let text = CString::new("software").unwrap();
    let view = unsafe { SdlStr::from_ptr(text.as_ptr()) };
    assert_eq!(view.to_string(), "software");
    assert_eq!(format!("{view:?}"), "\"software\"");

    let null = unsafe { SdlStr::from_ptr(std::ptr::null()) };
    assert_eq!(null.to_string(), "");
    assert_eq!(format!("{null:?}"), "null");
}

#[test]
fn each_owned_string_is_released_once() {
    let deallocator = CountingDeallocator::default();
    let pointers: Vec<_> = ["a", "bb", "ccc"].into_iter().map(allocate).collect();
    let texts: Vec<_> = pointers
        .iter()
        .map(|&ptr| unsafe { SdlString::from_raw(ptr, &deallocator) }.into_string())
        .collect();

    assert_eq!(
        texts,
        vec![Some("a".to_string()), Some("bb".to_string()), Some("ccc".to_string())]
    );
    let expected: Vec<usize> = pointers.iter().map(|&ptr| ptr as usize).collect();
    assert_eq!(deallocator.freed(), expected);
}
