//! Streaming parser for the archive's RECEIPT response.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use ena_model::SubmissionResult;

use crate::error::{Result, SubmitError};

/// Literal body the service returns when it is overloaded; not XML.
pub const SERVER_BUSY: &str = "Server error. Please contact us if the problem persists.";

/// Turn a raw response body into a result.
///
/// The known busy message short-circuits to a failed result without any XML
/// parsing; everything else is streamed as a receipt.
pub fn interpret_response(body: &str) -> Result<SubmissionResult> {
    if body.trim() == SERVER_BUSY {
        return Ok(SubmissionResult::failure(SERVER_BUSY));
    }
    parse_receipt(body)
}

/// Stream a receipt in one forward pass.
///
/// Four tag names are recognized at any depth, ignoring namespace prefixes:
/// `RECEIPT` (attribute `success`), `SUBMISSION` and `ANALYSIS` (attribute
/// `accession`), and `ERROR` (element text content). Absent attributes
/// leave the corresponding field at its default; unrecognized tags are
/// skipped. Partial receipts are valid, but a body without any XML element
/// at all is a parse error.
pub fn parse_receipt(body: &str) -> Result<SubmissionResult> {
    let mut reader = Reader::from_str(body);
    let mut result = SubmissionResult::default();
    let mut saw_element = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| SubmitError::ReceiptParse(err.to_string()))?;
        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                saw_element = true;
                match element.local_name().as_ref() {
                    b"RECEIPT" => {
                        if let Some(success) = attribute(element, "success")? {
                            result.success = success.eq_ignore_ascii_case("true");
                        }
                    }
                    b"SUBMISSION" => {
                        if let Some(accession) = attribute(element, "accession")? {
                            result.submission_accession = accession;
                        }
                    }
                    b"ANALYSIS" => {
                        if let Some(accession) = attribute(element, "accession")? {
                            result.analysis_accession = accession;
                        }
                    }
                    b"ERROR" if matches!(event, Event::Start(_)) => {
                        result.error = element_text(&mut reader, element)?;
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if !saw_element {
        return Err(SubmitError::ReceiptParse(
            "response body contains no XML elements".to_string(),
        ));
    }
    Ok(result)
}

/// Consume an element's content and return it with entity references
/// decoded. Character data may arrive split across several events, so the
/// whole span up to the matching end tag is read at once.
fn element_text(reader: &mut Reader<&[u8]>, element: &BytesStart<'_>) -> Result<String> {
    let end = element.to_end().into_owned();
    let raw = reader
        .read_text(end.name())
        .map_err(|err| SubmitError::ReceiptParse(err.to_string()))?;
    let text = unescape(raw.as_ref()).map_err(|err| SubmitError::ReceiptParse(err.to_string()))?;
    Ok(text.into_owned())
}

fn attribute(element: &BytesStart, name: &str) -> Result<Option<String>> {
    let attribute = element
        .try_get_attribute(name)
        .map_err(|err| SubmitError::ReceiptParse(err.to_string()))?;
    attribute
        .map(|attr| {
            attr.unescape_value()
                .map(|value| value.into_owned())
                .map_err(|err| SubmitError::ReceiptParse(err.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_receipt() {
        let result = parse_receipt(
            r#"<RECEIPT success="true"><SUBMISSION accession="ERA1"/><ANALYSIS accession="ERZ1"/></RECEIPT>"#,
        )
        .expect("parse");
        assert!(result.success);
        assert_eq!(result.submission_accession, "ERA1");
        assert_eq!(result.analysis_accession, "ERZ1");
        assert_eq!(result.error, "");
    }

    #[test]
    fn failed_receipt_with_error_text() {
        let result = parse_receipt(
            r#"<RECEIPT success="false"><ERROR>found unknown run with (accession=bad)</ERROR></RECEIPT>"#,
        )
        .expect("parse");
        assert!(!result.success);
        assert!(
            result
                .error
                .contains("found unknown run with (accession=bad)")
        );
        assert_eq!(result.submission_accession, "");
        assert_eq!(result.analysis_accession, "");
    }

    #[test]
    fn busy_body_short_circuits() {
        let result = interpret_response(SERVER_BUSY).expect("interpret");
        assert!(!result.success);
        assert_eq!(result.error, SERVER_BUSY);
        assert_eq!(result.submission_accession, "");
        assert_eq!(result.analysis_accession, "");
    }

    #[test]
    fn busy_body_with_surrounding_whitespace() {
        let body = format!("\n{SERVER_BUSY}\n");
        let result = interpret_response(&body).expect("interpret");
        assert_eq!(result.error, SERVER_BUSY);
    }

    #[test]
    fn partial_receipt_leaves_defaults() {
        let result = parse_receipt(r#"<RECEIPT success="true"/>"#).expect("parse");
        assert!(result.success);
        assert_eq!(result.submission_accession, "");
        assert_eq!(result.analysis_accession, "");
    }

    #[test]
    fn missing_attributes_are_not_errors() {
        let result = parse_receipt(r#"<RECEIPT><SUBMISSION/><ANALYSIS/></RECEIPT>"#)
            .expect("parse");
        assert!(!result.success);
        assert_eq!(result.submission_accession, "");
    }

    #[test]
    fn unrecognized_tags_are_ignored() {
        let result = parse_receipt(
            r#"<RECEIPT success="true"><MESSAGES><INFO>ok</INFO></MESSAGES><ANALYSIS accession="ERZ2"/></RECEIPT>"#,
        )
        .expect("parse");
        assert!(result.success);
        assert_eq!(result.analysis_accession, "ERZ2");
        assert_eq!(result.error, "");
    }

    #[test]
    fn namespace_prefixes_are_ignored() {
        let result = parse_receipt(
            r#"<ena:RECEIPT xmlns:ena="urn:receipt" success="true"><ena:ANALYSIS accession="ERZ3"/></ena:RECEIPT>"#,
        )
        .expect("parse");
        assert!(result.success);
        assert_eq!(result.analysis_accession, "ERZ3");
    }

    #[test]
    fn nested_tags_are_recognized_at_any_depth() {
        let result = parse_receipt(
            r#"<RECEIPT success="true"><ACTIONS><SUBMISSION accession="ERA9"/></ACTIONS></RECEIPT>"#,
        )
        .expect("parse");
        assert_eq!(result.submission_accession, "ERA9");
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err =
            parse_receipt(r#"<RECEIPT success="true"></WRONG>"#).expect_err("must fail");
        assert!(matches!(err, SubmitError::ReceiptParse(_)));
    }

    #[test]
    fn error_text_is_unescaped() {
        let result = parse_receipt(r#"<RECEIPT><ERROR>a &lt; b</ERROR></RECEIPT>"#).expect("parse");
        assert_eq!(result.error, "a < b");
    }

    #[test]
    fn error_text_with_several_entities() {
        let result = parse_receipt(
            r#"<RECEIPT><ERROR>run &quot;X&quot; &amp; sample &quot;Y&quot; unknown</ERROR></RECEIPT>"#,
        )
        .expect("parse");
        assert_eq!(result.error, r#"run "X" & sample "Y" unknown"#);
    }

    #[test]
    fn plain_text_body_is_a_parse_error() {
        let err = parse_receipt("Internal server error").expect_err("must fail");
        assert!(matches!(err, SubmitError::ReceiptParse(_)));
    }

    #[test]
    fn empty_body_is_a_parse_error() {
        assert!(parse_receipt("").is_err());
    }

    #[test]
    fn interpret_rejects_non_busy_garbage() {
        let err = interpret_response("Internal server error").expect_err("must fail");
        assert!(matches!(err, SubmitError::ReceiptParse(_)));
    }
}
