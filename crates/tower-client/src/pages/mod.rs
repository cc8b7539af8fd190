//! Page components.

mod detail;
mod home;
mod not_found;
mod panic;
mod tower;

pub use detail::{DetailKind, DetailPage};
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use panic::{set_panic_hook, PanicPage};
pub use tower::TowerPage;
