use reqwest::{Client, Response};
use url::Url;

use signed_messages_core::SignedMessage;

use crate::{Error, Result};

/// Client for the signed messages server.
pub struct MessageClient;

impl MessageClient {
    /// Ask the server to sign a sample message with a throwaway key.
    pub async fn sign_test(server: Url) -> Result<SignedMessage> {
        let url = server.join("sign-test")?;
        let response = Client::new().get(url).send().await?;
        let response = Self::check(response)?;
        Ok(response.json().await?)
    }

    /// Submit a signed message for verification.
    pub async fn submit(server: Url, signed: &SignedMessage) -> Result<()> {
        let url = server.join("submit")?;
        let response = Client::new().post(url).json(signed).send().await?;
        Self::check(response)?;
        Ok(())
    }

    /// List the messages the server has verified.
    pub async fn messages(server: Url) -> Result<Vec<SignedMessage>> {
        let url = server.join("messages")?;
        let response = Client::new().get(url).send().await?;
        let response = Self::check(response)?;
        Ok(response.json().await?)
    }

    fn check(response: Response) -> Result<Response> {
        response
            .status()
            .is_success()
            .then_some(())
            .ok_or_else(|| Error::ResponseCode(response.status().into()))?;
        Ok(response)
    }
}
