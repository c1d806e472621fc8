//! Chat routes — open a chatbot, send messages, read or close a transcript.
//!
//! DESIGN
//! ======
//! General conversations are public: anyone holding the ID may use them.
//! Learner conversations belong to the session that opened them and are
//! closed when that session logs out.
//!
//! Sending a message takes the write lock twice. The first pass records the
//! user message and marks the conversation pending; the lock is released for
//! the reply delay; the second pass appends the reply. The delay and second
//! pass run in a spawned task, so they finish even if the client goes away.
//! A conversation closed during the delay yields 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::{AuthUser, session_token};
use crate::services::chatbot::{Bot, BotKind, Reply, ReplyKind};
use crate::services::conversation::{ChatError, ChatMessage, Conversation};
use crate::services::dashboard;
use crate::services::session::UserType;
use crate::state::AppState;

pub(crate) fn chat_error_to_status(err: ChatError) -> StatusCode {
    match err {
        ChatError::EmptyMessage => StatusCode::UNPROCESSABLE_ENTITY,
        ChatError::ReplyPending => StatusCode::CONFLICT,
        ChatError::NotFound(_) => StatusCode::NOT_FOUND,
        ChatError::Forbidden(_) | ChatError::NotALearner => StatusCode::FORBIDDEN,
    }
}

#[derive(Serialize)]
pub struct ConversationResponse {
    pub id: Uuid,
    pub bot: BotKind,
    pub notice: Option<&'static str>,
    pub messages: Vec<ChatMessage>,
    pub suggested_questions: &'static [&'static str],
    pub pending: bool,
}

fn to_response(conversation: &Conversation) -> ConversationResponse {
    ConversationResponse {
        id: conversation.id,
        bot: conversation.kind(),
        notice: conversation.bot().notice(),
        messages: conversation.messages().to_vec(),
        suggested_questions: conversation.suggested_questions(),
        pending: conversation.is_pending(),
    }
}

async fn open(state: &AppState, conversation: Conversation) -> ConversationResponse {
    let response = to_response(&conversation);
    state.conversations.write().await.insert(conversation.id, conversation);
    tracing::info!(conversation_id = %response.id, bot = ?response.bot, "conversation opened");
    response
}

/// `POST /api/chat/general` — open the public site assistant.
pub async fn open_general(State(state): State<AppState>) -> (StatusCode, Json<ConversationResponse>) {
    let response = open(&state, Conversation::new(Bot::General, None)).await;
    (StatusCode::CREATED, Json(response))
}

/// `POST /api/chat/learner` — open the learning assistant for the signed-in learner.
pub async fn open_learner(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<ConversationResponse>), StatusCode> {
    if auth.marker.user_type != UserType::Learner {
        return Err(chat_error_to_status(ChatError::NotALearner));
    }

    let bot = Bot::Learner(dashboard::learner_profile(&auth.marker.username));
    let response = open(&state, Conversation::new(bot, Some(auth.token))).await;
    Ok((StatusCode::CREATED, Json(response)))
}

fn check_access(conversation: &Conversation, jar: &CookieJar) -> Result<(), ChatError> {
    if conversation.accessible_by(session_token(jar)) {
        Ok(())
    } else {
        Err(ChatError::Forbidden(conversation.id))
    }
}

/// `GET /api/chat/:id` — current transcript.
pub async fn get_conversation(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationResponse>, StatusCode> {
    let conversations = state.conversations.read().await;
    let conversation = conversations
        .get(&id)
        .ok_or(ChatError::NotFound(id))
        .map_err(chat_error_to_status)?;
    check_access(conversation, &jar).map_err(chat_error_to_status)?;
    Ok(Json(to_response(conversation)))
}

#[derive(Deserialize)]
pub struct SendMessageBody {
    pub text: String,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub message: ChatMessage,
    pub reply: ChatMessage,
    pub reply_kind: ReplyKind,
    pub trigger: Option<&'static str>,
}

/// Wait out the reply delay, pick the reply, and append it.
///
/// Runs as its own task so a client that disconnects mid-delay cannot leave
/// the conversation stuck in the pending state.
async fn deliver_reply(state: AppState, id: Uuid, input: String, bot: Bot) -> Result<(ChatMessage, Reply), ChatError> {
    tokio::time::sleep(state.config.delays.chat_reply).await;
    let reply = bot.respond(&input, &*state.chooser);
    tracing::debug!(conversation_id = %id, kind = ?reply.kind, trigger = ?reply.trigger, "bot replied");

    let mut conversations = state.conversations.write().await;
    let Some(conversation) = conversations.get_mut(&id) else {
        tracing::warn!(conversation_id = %id, "conversation closed before reply");
        return Err(ChatError::NotFound(id));
    };
    let message = conversation.complete(reply.text.clone());
    Ok((message, reply))
}

/// `POST /api/chat/:id/messages` — send a message and wait for the reply.
pub async fn send_message(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
    Json(body): Json<SendMessageBody>,
) -> Result<Json<SendMessageResponse>, StatusCode> {
    let (message, bot) = {
        let mut conversations = state.conversations.write().await;
        let conversation = conversations
            .get_mut(&id)
            .ok_or(ChatError::NotFound(id))
            .map_err(chat_error_to_status)?;
        check_access(conversation, &jar).map_err(chat_error_to_status)?;
        let message = conversation.begin(&body.text).map_err(chat_error_to_status)?;
        (message, conversation.bot().clone())
    };

    let (reply_message, reply) = tokio::spawn(deliver_reply(state, id, body.text, bot))
        .await
        .map_err(|e| {
            tracing::error!(conversation_id = %id, error = %e, "reply task failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(chat_error_to_status)?;

    Ok(Json(SendMessageResponse { message, reply: reply_message, reply_kind: reply.kind, trigger: reply.trigger }))
}

/// `DELETE /api/chat/:id` — close the chat widget.
pub async fn close_conversation(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut conversations = state.conversations.write().await;
    let conversation = conversations
        .get(&id)
        .ok_or(ChatError::NotFound(id))
        .map_err(chat_error_to_status)?;
    check_access(conversation, &jar).map_err(chat_error_to_status)?;
    conversations.remove(&id);
    tracing::info!(conversation_id = %id, "conversation closed");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
