mod entry;
mod node;

pub use entry::Entry;
pub use node::{Element, Node};
