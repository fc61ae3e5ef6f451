//! # atrium-auth
//!
//! Authentication and authorization building blocks: Argon2 password
//! hashing, the fixed password policy, JWT issuing/validation, the
//! sliding-timeout session guard, and the fail-closed permission resolver.

pub mod jwt;
pub mod password;
pub mod permission;
pub mod session;

pub use jwt::claims::Claims;
pub use password::hasher::PasswordHasher;
pub use password::validator::PasswordValidator;
pub use permission::resolver::PermissionResolver;
pub use session::guard::SessionGuard;
