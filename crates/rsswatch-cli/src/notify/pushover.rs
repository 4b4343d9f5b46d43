//! Pushover notifications.

use super::*;

/// Pushover message endpoint.
pub const PUSHOVER_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

/// Longest title pushover accepts, in characters.
const MAX_TITLE_CHARS: usize = 250;

/// Longest message pushover accepts, in characters.
const MAX_MESSAGE_CHARS: usize = 1024;

/// Sends notifications through pushover.
#[derive(Clone, Debug)]
pub struct Pushover {
    settings: PushoverSettings,
    timeout: std::time::Duration,
    /// Where messages are posted.
    pub(crate) endpoint: String,
}

impl Pushover {
    /// Create a new pushover notifier.
    pub fn new(
        settings: PushoverSettings,
        timeout: std::time::Duration,
    ) -> Self {
        Self {
            settings,
            timeout,
            endpoint: PUSHOVER_ENDPOINT.into(),
        }
    }

    /// Generate the form sent for a notification.
    /// Pushover rejects empty messages, so the title stands in for an
    /// empty body.
    fn form(
        &self,
        notification: &Notification,
    ) -> Vec<(&'static str, String)> {
        let message = match notification.body.trim().is_empty() {
            true => &notification.title,
            false => &notification.body,
        };
        vec![
            ("token", self.settings.token.clone()),
            ("user", self.settings.user.clone()),
            ("title", truncate(&notification.title, MAX_TITLE_CHARS)),
            ("message", truncate(message, MAX_MESSAGE_CHARS)),
        ]
    }
}

#[notifier_trait]
impl Notifier for Pushover {
    async fn send(
        &self,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        let client = reqwest::ClientBuilder::new()
            .timeout(self.timeout)
            .build()
            .map_err(NotifyError::Client)?;

        tracing::debug!("Sending \"{}\" via pushover", notification.title);
        let response = client
            .post(&self.endpoint)
            .form(&self.form(notification))
            .send()
            .await
            .map_err(NotifyError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected { status, body });
        }
        Ok(())
    }
}

/// Truncate text to a number of characters.
fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn pushover() -> Pushover {
        Pushover::new(
            PushoverSettings {
                token: "app-token".into(),
                user: "user-key".into(),
            },
            std::time::Duration::from_secs(5),
        )
    }

    fn field<'a>(form: &'a [(&'static str, String)], name: &str) -> &'a str {
        form.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .unwrap()
    }

    #[test]
    fn form_fields() {
        let form = pushover().form(&Notification {
            title: "Season Finale Release".into(),
            body: "The finale is out.".into(),
        });
        assert_eq!(field(&form, "token"), "app-token");
        assert_eq!(field(&form, "user"), "user-key");
        assert_eq!(field(&form, "title"), "Season Finale Release");
        assert_eq!(field(&form, "message"), "The finale is out.");
    }

    #[test]
    fn form_empty_body_uses_title() {
        let form = pushover().form(&Notification {
            title: "Only a title".into(),
            body: " \n".into(),
        });
        assert_eq!(field(&form, "message"), "Only a title");
    }

    #[test]
    fn form_truncates_by_characters() {
        let form = pushover().form(&Notification {
            title: "é".repeat(300),
            body: "ß".repeat(2000),
        });
        assert_eq!(field(&form, "title").chars().count(), MAX_TITLE_CHARS);
        assert_eq!(field(&form, "message").chars().count(), MAX_MESSAGE_CHARS);
    }

    /// Answer a single post, returning the endpoint and the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut data = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                data.extend_from_slice(&buf[..read]);
                if request_complete(&data) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&data).into_owned()
        });
        (format!("http://{}/1/messages.json", addr), handle)
    }

    /// Check the headers and the whole body have arrived.
    fn request_complete(data: &[u8]) -> bool {
        let text = String::from_utf8_lossy(data);
        let Some(end) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        data.len() >= end + 4 + length
    }

    #[tokio::test]
    async fn send_posts_form() {
        let (endpoint, server) = serve_once("200 OK", r#"{"status":1}"#).await;
        let mut notifier = pushover();
        notifier.endpoint = endpoint;

        notifier
            .send(&Notification {
                title: "Season Finale".into(),
                body: "Out now & streaming".into(),
            })
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /1/messages.json HTTP/1.1"));
        assert!(
            request
                .to_ascii_lowercase()
                .contains("content-type: application/x-www-form-urlencoded")
        );
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        assert_eq!(
            body,
            "token=app-token&user=user-key&title=Season+Finale\
             &message=Out+now+%26+streaming"
        );
    }

    #[tokio::test]
    async fn send_rejected() {
        let (endpoint, server) = serve_once(
            "400 Bad Request",
            r#"{"user":"invalid","status":0}"#,
        )
        .await;
        let mut notifier = pushover();
        notifier.endpoint = endpoint;

        let result = notifier
            .send(&Notification {
                title: "Season Finale".into(),
                body: "Out now".into(),
            })
            .await;
        match result {
            Err(NotifyError::Rejected { status, body }) => {
                assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
                assert_eq!(body, r#"{"user":"invalid","status":0}"#);
            }
            other => panic!("expected a rejection, got {:?}", other),
        }
        server.await.unwrap();
    }
}
