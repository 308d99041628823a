//! Shared wire-name constants and XML helpers.

use std::io::Write;

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Logical filename the ADD action points the archive at.
pub const ANALYSIS_SOURCE: &str = "analysis.xml";

/// Schema name carried by the ADD action.
pub const ADD_SCHEMA: &str = "analysis";

/// Write `<name>value</name>`.
pub fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write an empty element carrying a single `accession` attribute.
pub fn write_accession_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    accession: &str,
) -> Result<()> {
    let mut element = BytesStart::new(name);
    element.push_attribute(("accession", accession));
    xml.write_event(Event::Empty(element))?;
    Ok(())
}

/// Serialize a hold date the way the archive expects it (UTC date, `Z`
/// suffix).
pub fn format_hold_date(date: NaiveDate) -> String {
    format!("{}Z", date.format("%Y-%m-%d"))
}

/// Recover the document string from a finished writer.
pub fn into_document(xml: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(xml.into_inner())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err).into())
}
