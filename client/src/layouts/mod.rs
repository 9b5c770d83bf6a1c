//! Wrapper screens that enclose route content.
//!
//! ARCHITECTURE
//! ============
//! Each layout renders fixed chrome around an `<Outlet/>`. Nesting follows the
//! route table in `crate::routes`: auth screens sit in `auth`, everything under
//! `/dashboard` sits in `dashboard`, and its sections add a heading bar.

pub mod auth;
pub mod dashboard;
pub mod section;
