//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates rendering details to
//! `components`. Pages never reach outside the browser; auth screens are
//! inert stand-ins.

pub mod dashboard;
pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod register;
pub mod section;
pub mod setup_2fa;
