//! Typed HTTP client for the quizbank REST API.
//!
//! One method per endpoint; every response goes through the shared envelope
//! unwrap: `status == 0` resolves with `data`, anything else becomes
//! [`ClientError::Api`] carrying the server's `msg`. Transport failures pass
//! through untouched as [`ClientError::Transport`].

use reqwest::{Client as HttpClient, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{NewQuestion, NewSubject, Question, QuestionPatch, Subject, SubjectPatch};
use crate::inbound::http::envelope::Envelope;

/// Errors surfaced by [`QuizbankClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-zero envelope status.
    #[error("{msg}")]
    Api { status: u16, msg: String },

    /// Network-level failure, passed through from the transport.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base url cannot carry path segments")]
    BaseUrl,
}

/// Resolve the envelope: success yields `data`, failure carries the `msg`.
fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<Option<T>, ClientError> {
    if envelope.status == 0 {
        Ok(envelope.data)
    } else {
        Err(ClientError::Api {
            status: envelope.status,
            msg: envelope.msg,
        })
    }
}

/// A successful envelope for these endpoints always carries a payload.
fn require_data<T>(data: Option<T>) -> Result<T, ClientError> {
    data.ok_or_else(|| ClientError::Api {
        status: 0,
        msg: "response envelope carried no data".to_owned(),
    })
}

/// Client for the `/v1` REST surface.
pub struct QuizbankClient {
    http: HttpClient,
    base_url: Url,
}

impl QuizbankClient {
    /// Build a client against the given base URL (the `/v1` prefix included,
    /// e.g. `http://localhost:8080/v1`).
    ///
    /// # Errors
    ///
    /// Returns a transport error when the underlying client cannot be
    /// constructed.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let http = HttpClient::builder().build()?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|()| ClientError::BaseUrl)?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, ClientError> {
        let envelope: Envelope<T> = self.http.get(url).send().await?.json().await?;
        unwrap_envelope(envelope)
    }

    async fn send_json<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        request: reqwest::RequestBuilder,
        payload: &P,
    ) -> Result<Option<T>, ClientError> {
        let envelope: Envelope<T> = request.json(payload).send().await?.json().await?;
        unwrap_envelope(envelope)
    }

    /// `GET /subject`
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ClientError> {
        let url = self.endpoint(&["subject"])?;
        require_data(self.get(url).await?)
    }

    /// `GET /subject/{id}`
    pub async fn get_subject(&self, id: i32) -> Result<Subject, ClientError> {
        let url = self.endpoint(&["subject", &id.to_string()])?;
        require_data(self.get(url).await?)
    }

    /// `POST /subject`
    pub async fn create_subject(&self, subject: &NewSubject) -> Result<Subject, ClientError> {
        let url = self.endpoint(&["subject"])?;
        require_data(self.send_json(self.http.post(url), subject).await?)
    }

    /// `PUT /subject/{id}`
    pub async fn update_subject(
        &self,
        id: i32,
        patch: &SubjectPatch,
    ) -> Result<Subject, ClientError> {
        let url = self.endpoint(&["subject", &id.to_string()])?;
        require_data(self.send_json(self.http.put(url), patch).await?)
    }

    /// `DELETE /subject/{id}`
    pub async fn delete_subject(&self, id: i32) -> Result<(), ClientError> {
        let url = self.endpoint(&["subject", &id.to_string()])?;
        let envelope: Envelope<Subject> = self.http.delete(url).send().await?.json().await?;
        unwrap_envelope(envelope).map(|_| ())
    }

    /// `GET /question` with an optional `subjectId` filter.
    pub async fn list_questions(
        &self,
        subject_id: Option<i32>,
    ) -> Result<Vec<Question>, ClientError> {
        let mut url = self.endpoint(&["question"])?;
        if let Some(subject_id) = subject_id {
            url.query_pairs_mut()
                .append_pair("subjectId", &subject_id.to_string());
        }
        require_data(self.get(url).await?)
    }

    /// `GET /question/{id}`
    pub async fn get_question(&self, id: i32) -> Result<Question, ClientError> {
        let url = self.endpoint(&["question", &id.to_string()])?;
        require_data(self.get(url).await?)
    }

    /// `POST /question`
    pub async fn create_question(&self, question: &NewQuestion) -> Result<Question, ClientError> {
        let url = self.endpoint(&["question"])?;
        require_data(self.send_json(self.http.post(url), question).await?)
    }

    /// `PUT /question/{id}`
    pub async fn update_question(
        &self,
        id: i32,
        patch: &QuestionPatch,
    ) -> Result<Question, ClientError> {
        let url = self.endpoint(&["question", &id.to_string()])?;
        require_data(self.send_json(self.http.put(url), patch).await?)
    }

    /// `DELETE /question/{id}`
    pub async fn delete_question(&self, id: i32) -> Result<(), ClientError> {
        let url = self.endpoint(&["question", &id.to_string()])?;
        let envelope: Envelope<Question> = self.http.delete(url).send().await?.json().await?;
        unwrap_envelope(envelope).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unwrap_resolves_data_on_zero_status() {
        let envelope = Envelope::ok(41);
        assert_eq!(unwrap_envelope(envelope).expect("success"), Some(41));
    }

    #[rstest]
    fn unwrap_rejects_non_zero_status() {
        let envelope = Envelope::<i32>::error(404, "Question not found");
        let err = unwrap_envelope(envelope).expect_err("failure");

        match err {
            ClientError::Api { status, msg } => {
                assert_eq!(status, 404);
                assert_eq!(msg, "Question not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn missing_data_on_success_is_an_api_error() {
        let err = require_data::<i32>(None).expect_err("missing data");
        assert!(matches!(err, ClientError::Api { .. }));
    }

    #[rstest]
    fn endpoint_joins_segments_and_filter() {
        let client = QuizbankClient::new(Url::parse("http://localhost:8080/v1").expect("url"))
            .expect("client");

        let url = client.endpoint(&["question", "7"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8080/v1/question/7");

        let url = client.endpoint(&["subject"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8080/v1/subject");
    }

    #[rstest]
    fn endpoint_tolerates_trailing_slash() {
        let client = QuizbankClient::new(Url::parse("http://localhost:8080/v1/").expect("url"))
            .expect("client");

        let url = client.endpoint(&["subject", "3"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8080/v1/subject/3");
    }
}
