//! Linux entropy through the `getrandom` system call.
//!
//! `getrandom` reads from the kernel entropy pool and blocks only until the
//! pool has been initialized once at boot.

use std::io;

use libc::{EINTR, c_void, getrandom};

/// Fills `buf` with random bytes from the kernel.
///
/// Short reads are continued and `EINTR` is retried until the whole buffer
/// is written.
///
/// # Panics
/// Panics on any other `getrandom` failure. The caller has no way to
/// produce secure output without the kernel, so this is not recoverable.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { getrandom(rest.as_mut_ptr().cast::<c_void>(), rest.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }

            log::error!("getrandom() failed: {err}");
            panic!("getrandom() failed: {err}");
        }

        filled += ret as usize;
    }
}
