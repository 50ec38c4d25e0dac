mod bundle;
mod chat;
mod envelope;
mod prompt;
mod response;

pub use bundle::*;
pub use chat::*;
pub use envelope::*;
pub use prompt::*;
pub use response::*;
