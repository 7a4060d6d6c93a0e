//! Playable games built on `core` and `rules`.

pub mod highlow;
