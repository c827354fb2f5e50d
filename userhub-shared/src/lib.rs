//! Wire models exchanged between the UserHub client and the identity service.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
