mod compound;
mod list;
mod node;
mod value;

pub use compound::*;
pub use list::*;
pub use node::*;
pub use value::*;
