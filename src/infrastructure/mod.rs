pub mod entropy;
pub mod in_memory;
