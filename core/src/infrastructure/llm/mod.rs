pub mod gemini_client;
pub mod openai_client;

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAiLLMClient;
