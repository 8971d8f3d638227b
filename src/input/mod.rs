pub mod remap;
pub mod sink;
pub mod source;
pub mod target;

#[cfg(test)]
mod remap_test;
