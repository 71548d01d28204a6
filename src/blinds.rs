use crate::{
    channels::{Command, CommandGroup},
    error::{Result, WevolorError},
};
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use tracing::*;

/// Device defined status document returned by `/_status`
pub type StatusPayload = Map<String, Value>;

/// Client for the Wevolor local API.
///
/// Requires Wevolor device version 5.4 or greater.
/// Cloning is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Wevolor {
    http_client: Client,
    host: String,
}

impl Wevolor {
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_client(host, Client::new())
    }

    /// Use an existing http client, for example one with a custom timeout
    pub fn with_client(host: impl Into<String>, http_client: Client) -> Self {
        Self {
            http_client,
            host: host.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    #[instrument(skip(self), fields(host = %self.host))]
    pub async fn try_get_status(&self) -> Result<StatusPayload> {
        let url = format!("http://{}/_status", self.host);
        debug!("Requesting status");
        let response = self.http_client.get(&url).send().await?;
        check_status(response.status())?;
        match response.json::<Value>().await? {
            Value::Object(payload) => Ok(payload),
            _ => Err(WevolorError::UnexpectedStatusPayload),
        }
    }

    /// Fetch device status, `None` if the device could not be queried
    pub async fn get_status(&self) -> Option<StatusPayload> {
        match self.try_get_status().await {
            Ok(status) => Some(status),
            Err(error) => {
                warn!("Failed to get status from {}: {}", self.host, error);
                None
            }
        }
    }

    #[instrument(skip(self, channels), fields(host = %self.host))]
    pub async fn try_send_command(&self, command: Command, channels: &[u8]) -> Result<()> {
        let group = CommandGroup::from(channels);
        let url = format!(
            "http://{}/_command?action={}&groups={}",
            self.host,
            command.action(),
            group
        );
        debug!(%group, "Sending command");
        let response = self.http_client.get(&url).send().await?;
        check_status(response.status())
    }

    /// Send command to channels, true if the device accepted it
    pub async fn send_command(&self, command: Command, channels: &[u8]) -> bool {
        match self.try_send_command(command, channels).await {
            Ok(()) => true,
            Err(error) => {
                warn!("Command {} to {} failed: {}", command, self.host, error);
                false
            }
        }
    }

    /// Send command to open blind on specified channel
    pub async fn open_blind(&self, channel: u8) -> bool {
        self.open_blinds(&[channel]).await
    }

    pub async fn open_blinds(&self, channels: &[u8]) -> bool {
        self.send_command(Command::Open, channels).await
    }

    /// Send command to close blind on specified channel
    pub async fn close_blind(&self, channel: u8) -> bool {
        self.close_blinds(&[channel]).await
    }

    pub async fn close_blinds(&self, channels: &[u8]) -> bool {
        self.send_command(Command::Close, channels).await
    }

    /// Send command to move blind on specified channel to its favorite position
    pub async fn favorite_blind(&self, channel: u8) -> bool {
        self.favorite_blinds(&[channel]).await
    }

    pub async fn favorite_blinds(&self, channels: &[u8]) -> bool {
        self.send_command(Command::Favorite, channels).await
    }

    /// Send command to stop blind on specified channel
    pub async fn stop_blind(&self, channel: u8) -> bool {
        self.stop_blinds(&[channel]).await
    }

    pub async fn stop_blinds(&self, channels: &[u8]) -> bool {
        self.send_command(Command::Stop, channels).await
    }

    /// Send command to open blind tilt on specified channel
    pub async fn open_blind_tilt(&self, channel: u8) -> bool {
        self.open_blinds_tilt(&[channel]).await
    }

    pub async fn open_blinds_tilt(&self, channels: &[u8]) -> bool {
        self.send_command(Command::TiltOpen, channels).await
    }

    /// Send command to close blind tilt on specified channel
    pub async fn close_blind_tilt(&self, channel: u8) -> bool {
        self.close_blinds_tilt(&[channel]).await
    }

    pub async fn close_blinds_tilt(&self, channels: &[u8]) -> bool {
        self.send_command(Command::TiltClose, channels).await
    }

    /// Device has no tilt stop action, plain stop halts tilt as well
    pub async fn stop_blind_tilt(&self, channel: u8) -> bool {
        self.stop_blind(channel).await
    }

    pub async fn stop_blinds_tilt(&self, channels: &[u8]) -> bool {
        self.stop_blinds(channels).await
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(WevolorError::Rejected { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ok_is_accepted() {
        assert!(check_status(StatusCode::OK).is_ok());
        // other success codes are still a rejection
        let error = check_status(StatusCode::NO_CONTENT).unwrap_err();
        assert!(error.is_rejected());
        assert!(check_status(StatusCode::INTERNAL_SERVER_ERROR)
            .unwrap_err()
            .is_rejected());
    }

    #[test]
    fn clones_keep_host() {
        let client = Wevolor::new("192.168.1.20");
        assert_eq!(client.clone().host(), "192.168.1.20");
    }
}
