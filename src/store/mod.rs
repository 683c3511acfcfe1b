//! In-memory record stores. Both are plain synchronous structs; callers own
//! the locking (see `AppState`).

mod products;
mod users;

pub use products::ProductStore;
pub use users::UserStore;
