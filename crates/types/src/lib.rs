pub use call_sequence::{CallSequence, CallStep};
pub use swap_request::SwapRequest;

mod call_sequence;
pub mod conv;
mod swap_request;
