pub use builder::CallSequenceBuilder;
pub use helpers::EncoderHelper;

mod builder;
pub mod helpers;
