pub mod roast;
pub mod stack;

pub use roast::Entity as Roast;
pub use stack::Entity as Stack;
