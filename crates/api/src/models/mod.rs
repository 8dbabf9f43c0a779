pub mod declared;
pub mod graph;
pub mod member;
pub mod signature;
pub mod type_ref;

pub use declared::*;
pub use graph::*;
pub use member::*;
pub use signature::*;
pub use type_ref::*;
