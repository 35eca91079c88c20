//! Items being held, moved, or processed, and the stacks they come in.

pub mod itemstack;

pub use itemstack::{ItemStack, Metadata};
