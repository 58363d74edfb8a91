//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page feature (`theme`, `faq`, `registration`) so each
//! component depends on one small view-model and none share mutable data.

pub mod faq;
pub mod registration;
pub mod theme;
