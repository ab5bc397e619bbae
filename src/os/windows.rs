//! Windows entropy through `BCryptGenRandom` with the system-preferred RNG.

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// `BCryptGenRandom` takes a `u32` length, so large buffers go in chunks.
const MAX_CHUNK: usize = u32::MAX as usize;

pub(crate) fn sys_random(buf: &mut [u8]) {
    for chunk in buf.chunks_mut(MAX_CHUNK) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            log::error!("BCryptGenRandom failed with status {status}");
            panic!("BCryptGenRandom failed with status {status}");
        }
    }
}
