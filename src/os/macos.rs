//! macOS entropy through `arc4random_buf`, which cannot fail.

use libc::{arc4random_buf, c_void};

pub(crate) fn sys_random(buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }

    unsafe {
        arc4random_buf(buf.as_mut_ptr().cast::<c_void>(), buf.len());
    }
}
