pub mod claim;
pub mod create_stream;
pub mod deposit_to_vault;
pub mod emit_stream_quote;

pub use claim::*;
pub use create_stream::*;
pub use deposit_to_vault::*;
pub use emit_stream_quote::*;
