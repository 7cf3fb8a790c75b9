#[cfg(test)]
pub mod common;

#[cfg(test)]
mod rotation_flow;
