mod user;
pub use user::*;

mod property;
pub use property::*;

mod reservation;
pub use reservation::*;

mod search;
pub use search::*;
