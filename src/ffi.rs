//! C ABI over `RbTree`, for callers that hold the tree as an opaque pointer.
//!
//! Status codes follow one convention across functions: `0` success, a positive
//! value for "key not found", negative values for errors.

use crate::error::TreeError;
use crate::rbtree::RbTree;
use log::debug;
use std::alloc::{alloc, Layout};
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::{ptr, slice};

/// Create an empty tree. Returns null if the handle cannot be allocated.
/// The caller owns the pointer and must release it with [`rbtree_free`]
#[no_mangle]
pub extern "C" fn rbtree_create() -> *mut RbTree {
    let layout = Layout::new::<RbTree>();
    // SAFETY: `RbTree` is not zero-sized
    let raw = unsafe { alloc(layout) } as *mut RbTree;
    if raw.is_null() {
        debug!("cannot allocate tree handle");
        return ptr::null_mut();
    }
    // SAFETY: `raw` is fresh, non-null and laid out for an `RbTree`
    unsafe { raw.write(RbTree::new()) };
    raw
}

/// Insert or overwrite `key`.
///
/// Returns `0` on success, `-1` if an argument is null or `value` is not UTF-8,
/// `-2` if the node cannot be allocated or `value` is too long.
///
/// # Safety
///
/// * `tree` must come from [`rbtree_create`] and not have been freed.
/// * `value` must point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rbtree_insert(tree: *mut RbTree, key: u64, value: *const c_char) -> c_int {
    if tree.is_null() || value.is_null() {
        return -1;
    }
    let value = match CStr::from_ptr(value).to_str() {
        Ok(value) => value,
        Err(_) => return -1,
    };
    match (*tree).insert(key, value) {
        Ok(_) => 0,
        Err(err) => {
            debug!("insert of {} failed: {}", key, err);
            -2
        }
    }
}

/// Returns `1` if `key` is present, `0` if it is absent or `tree` is null.
///
/// # Safety
///
/// `tree` must be null or come from [`rbtree_create`] and not have been freed.
#[no_mangle]
pub unsafe extern "C" fn rbtree_contains(tree: *const RbTree, key: u64) -> c_int {
    if tree.is_null() {
        return 0;
    }
    (*tree).contains(key) as c_int
}

/// Copy the value of `key` into `buf` as a NUL-terminated string.
///
/// Returns `0` on success, `1` if the key is absent, `-1` if an argument is null,
/// `-2` if `buf_len` is less than the value length plus one. Nothing is written
/// to `buf` unless `0` is returned.
///
/// # Safety
///
/// * `tree` must come from [`rbtree_create`] and not have been freed.
/// * `buf` must be valid for writes of `buf_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn rbtree_get(
    tree: *const RbTree,
    key: u64,
    buf: *mut c_char,
    buf_len: usize,
) -> c_int {
    if tree.is_null() || buf.is_null() {
        return -1;
    }
    let out = slice::from_raw_parts_mut(buf as *mut u8, buf_len);
    // Keep the last byte for the terminator
    let text_len = buf_len.saturating_sub(1);
    match (*tree).get_into(key, &mut out[..text_len]) {
        Ok(written) if written < buf_len => {
            out[written] = 0;
            0
        }
        Ok(_) | Err(TreeError::BufferTooSmall { .. }) => -2,
        Err(TreeError::KeyNotFound(_)) => 1,
        Err(_) => -1,
    }
}

/// Returns `0` if `key` was removed, `1` if it was absent, `-1` if `tree` is null.
///
/// # Safety
///
/// `tree` must come from [`rbtree_create`] and not have been freed.
#[no_mangle]
pub unsafe extern "C" fn rbtree_remove(tree: *mut RbTree, key: u64) -> c_int {
    if tree.is_null() {
        return -1;
    }
    match (*tree).remove(key) {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Release the tree and every node in it. Null is ignored.
///
/// # Safety
///
/// `tree` must be null or come from [`rbtree_create`], and must not be used again.
#[no_mangle]
pub unsafe extern "C" fn rbtree_free(tree: *mut RbTree) {
    if tree.is_null() {
        return;
    }
    // The handle was allocated by the global allocator with `RbTree`'s layout
    drop(Box::from_raw(tree));
}

/// Print the tree structure to stdout, one node per line.
///
/// # Safety
///
/// `tree` must be null or come from [`rbtree_create`] and not have been freed.
#[no_mangle]
pub unsafe extern "C" fn rbtree_print_structure(tree: *const RbTree) {
    if tree.is_null() {
        println!("(tree is null)");
        return;
    }
    print!("{}", (*tree).render());
}
