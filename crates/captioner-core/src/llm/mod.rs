//! Caption generation through a vision-capable chat-completion API.
//!
//! A provider abstraction keeps the HTTP details out of the generator, which
//! owns input checks, credential fallback and error logging.

pub(crate) mod generator;
pub(crate) mod openai;
pub(crate) mod provider;

pub use generator::CaptionGenerator;
pub use openai::OpenAiProvider;
pub use provider::{CaptionProvider, CaptionRequest, ImageInput};
