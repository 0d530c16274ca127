pub mod error;
pub mod pipeline;
pub mod processing {
    pub mod fit;
    pub mod layout;
    pub mod normalize;
}

pub use error::Error;
pub use processing::layout::{TARGET_HEIGHT, TARGET_WIDTH};
