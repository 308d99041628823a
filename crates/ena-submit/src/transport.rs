//! Multipart HTTPS submission of the document pair.

use std::io::Write;

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use tempfile::NamedTempFile;
use tracing::debug;

use ena_model::SubmissionResult;

use crate::config::{Credentials, EnaServer, Endpoints};
use crate::error::Result;
use crate::receipt::interpret_response;

/// Multipart part name for the submission envelope.
const SUBMISSION_PART: &str = "SUBMISSION";

/// Multipart part name for the analysis document.
const ANALYSIS_PART: &str = "ANALYSIS";

/// Content type of both payload parts.
const PART_CONTENT_TYPE: &str = "text/xml";

/// Client for the archive's metadata submission endpoint.
pub struct SubmissionClient {
    client: Client,
    endpoints: Endpoints,
    credentials: Credentials,
}

impl SubmissionClient {
    /// Build a client for the configured endpoints.
    ///
    /// The archive's TLS certificate does not chain to a trusted root, so
    /// this client accepts invalid certificates. The override lives only in
    /// this client instance; nothing process-wide is relaxed.
    pub fn new(endpoints: Endpoints, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self {
            client,
            endpoints,
            credentials,
        })
    }

    /// POST the document pair to the chosen server and interpret the
    /// response.
    ///
    /// Both payloads are written to temporary files that are removed on
    /// every exit path. A network or TLS failure surfaces as a transport
    /// error and produces no result.
    pub fn submit(
        &self,
        submission_xml: &str,
        analysis_xml: &str,
        server: EnaServer,
    ) -> Result<SubmissionResult> {
        let submission_file = write_payload("ena_submission", submission_xml)?;
        let analysis_file = write_payload("ena_analysis", analysis_xml)?;

        let form = Form::new()
            .part(
                SUBMISSION_PART,
                payload_part(&submission_file, "submission.xml")?,
            )
            .part(ANALYSIS_PART, payload_part(&analysis_file, "analysis.xml")?);

        let url = server.submission_url(&self.endpoints, &self.credentials);
        debug!(?server, "Posting submission");

        let response = self.client.post(url).multipart(form).send()?;
        let body = response.text()?;
        debug!(bytes = body.len(), "Received submission response");

        interpret_response(&body)
    }
}

/// Write one XML payload to ephemeral storage.
fn write_payload(prefix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".xml")
        .tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// A `text/xml` file part carrying the fixed logical filename the service
/// expects.
fn payload_part(file: &NamedTempFile, logical_name: &'static str) -> Result<Part> {
    let part = Part::file(file.path())?
        .file_name(logical_name)
        .mime_str(PART_CONTENT_TYPE)?;
    Ok(part)
}
