// SPDX-License-Identifier: MIT

//! Device-id to user-id derivation.
//!
//! A watch identifies itself by an opaque device id; the share URLs expose
//! a short stable user id derived from it. The derivation is one-way so
//! links do not leak the device identifier.

use sha2::{Digest, Sha256};

/// Length of the derived user id in hex characters.
const USER_ID_LEN: usize = 16;

/// Derive the stable user id for a device identifier.
pub fn user_id_for_device(device_id: &str) -> String {
    let digest = Sha256::digest(device_id.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(USER_ID_LEN);
    id
}
