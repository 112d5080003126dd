//! Guest memory helpers for strings crossing the boundary
//!
//! The host writes strings into buffers it obtains from the guest's exported
//! allocator, then passes `(ptr, len)` to the export that consumes them.

use crate::error::{BindingError, Result};

/// Allocate a `len`-byte buffer the host can write into
pub fn alloc_buffer(len: usize) -> *mut u8 {
    let buffer = vec![0u8; len].into_boxed_slice();
    Box::into_raw(buffer) as *mut u8
}

/// Release a buffer obtained from [`alloc_buffer`].
///
/// # Safety
///
/// `ptr` must come from `alloc_buffer(len)` with the same `len` and must not
/// be used afterwards.
pub unsafe fn free_buffer(ptr: *mut u8, len: usize) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len)));
}

/// Borrow a UTF-8 string the host placed in guest memory.
///
/// # Safety
///
/// `ptr` must point to `len` initialized bytes that stay alive and unchanged
/// for `'a`.
pub unsafe fn str_from_raw<'a>(ptr: *const u8, len: usize) -> Result<&'a str> {
    if len == 0 {
        return Ok("");
    }
    if ptr.is_null() {
        return Err(BindingError::NullString { len });
    }
    let bytes = std::slice::from_raw_parts(ptr, len);
    Ok(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_round_trip() {
        let len = 5;
        let ptr = alloc_buffer(len);
        unsafe {
            std::ptr::copy_nonoverlapping(b"hello".as_ptr(), ptr, len);
            assert_eq!(str_from_raw(ptr, len).unwrap(), "hello");
            free_buffer(ptr, len);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let bad = [0xffu8, 0xfe];
        unsafe {
            assert!(matches!(str_from_raw(bad.as_ptr(), 2), Err(BindingError::InvalidUtf8(_))));
            assert!(matches!(str_from_raw(std::ptr::null(), 3), Err(BindingError::NullString { len: 3 })));
            assert_eq!(str_from_raw(std::ptr::null(), 0).unwrap(), "");
        }
    }
}
