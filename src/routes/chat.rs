use axum::Json;

use crate::{
    error::AppJson,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
};

pub async fn chat_handler(AppJson(payload): AppJson<ChatRequest>) -> Json<ChatResponse> {
    let reply = generate_reply(&payload.message);
    Json(ChatResponse { reply })
}
