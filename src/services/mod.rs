//! Services Layer
//!
//! Business rules that sit between the HTTP handlers and the repositories:
//! id parsing, ownership checks, and the not-found messages clients see.

pub mod like_service;
pub mod playlist_service;
