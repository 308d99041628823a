//! Serializer for the SUBMISSION envelope document.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use ena_model::AnalysisRecord;

use crate::common::{ADD_SCHEMA, ANALYSIS_SOURCE, format_hold_date, into_document};
use crate::error::Result;

/// Serialize the submission envelope.
///
/// The envelope always carries exactly one ADD action pointing at the
/// analysis document, and one HOLD action iff a hold date was recorded.
pub fn write_submission_xml(record: &AnalysisRecord) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("SUBMISSION");
    if let Some(alias) = record.alias.as_deref() {
        root.push_attribute(("alias", alias));
    }
    if let Some(center_name) = record.center_name.as_deref() {
        root.push_attribute(("center_name", center_name));
    }
    if let Some(broker_name) = record.broker_name.as_deref() {
        root.push_attribute(("broker_name", broker_name));
    }
    xml.write_event(Event::Start(root))?;

    xml.write_event(Event::Start(BytesStart::new("ACTIONS")))?;

    xml.write_event(Event::Start(BytesStart::new("ACTION")))?;
    let mut add = BytesStart::new("ADD");
    add.push_attribute(("source", ANALYSIS_SOURCE));
    add.push_attribute(("schema", ADD_SCHEMA));
    xml.write_event(Event::Empty(add))?;
    xml.write_event(Event::End(BytesEnd::new("ACTION")))?;

    if let Some(date) = record.hold_date {
        xml.write_event(Event::Start(BytesStart::new("ACTION")))?;
        let mut hold = BytesStart::new("HOLD");
        let hold_until = format_hold_date(date);
        hold.push_attribute(("HoldUntilDate", hold_until.as_str()));
        xml.write_event(Event::Empty(hold))?;
        xml.write_event(Event::End(BytesEnd::new("ACTION")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("ACTIONS")))?;
    xml.write_event(Event::End(BytesEnd::new("SUBMISSION")))?;
    into_document(xml)
}
