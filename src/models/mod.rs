pub mod cart;
pub mod instructor;
pub mod product;
pub mod user;

pub use cart::CartEntry;
pub use instructor::Instructor;
pub use product::{ClassItem, ProductUpdate, ProductView};
pub use user::User;
