use axum::{body::Bytes, extract::Extension, http::StatusCode, Json};

use signed_messages_core::{verify, SignedMessage};

use crate::{server::ServerState, Error};

pub(crate) struct MessageHandler;

impl MessageHandler {
    /// Verify a signed message and store it when the signature is valid.
    pub(crate) async fn submit(
        Extension(state): Extension<ServerState>,
        body: Bytes,
    ) -> std::result::Result<(StatusCode, &'static str), StatusCode> {
        let signed: SignedMessage = serde_json::from_slice(&body)
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        // Verify against the canonical bytes of the claimed message
        let message = signed.message.canonical_bytes();
        if !verify(&signed.public_key, &signed.signature, &message) {
            tracing::debug!(
                public_key = %signed.public_key,
                "rejected message"
            );
            return Err(StatusCode::UNAUTHORIZED);
        }

        let content = signed.message.content().to_owned();

        state.store.append(signed).await.map_err(|e| match e {
            Error::StoreFull(_) => StatusCode::INSUFFICIENT_STORAGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        })?;

        let stored = state
            .store
            .len()
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        tracing::info!(
            content = %content,
            stored,
            "verified message stored"
        );

        Ok((StatusCode::CREATED, "message verified and stored\n"))
    }

    /// List the verified messages.
    pub(crate) async fn list(
        Extension(state): Extension<ServerState>,
    ) -> std::result::Result<Json<Vec<SignedMessage>>, StatusCode> {
        let messages = state
            .store
            .list()
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        Ok(Json(messages))
    }
}
