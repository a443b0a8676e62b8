//! OpenAI chat-completions integration.

mod client;
mod dto;

pub use client::{OPENAI_CHAT_COMPLETIONS_URL, OpenAIClient};
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatRequestBuilderError,
    ChatResponse, ChatUsage, ChoiceMessage,
};
