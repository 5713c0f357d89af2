mod blossom;
mod greedy;

pub use blossom::*;
pub use greedy::*;
