//! Serializer for the ANALYSIS metadata document.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use ena_model::{
    AnalysisRecord, AssemblyBlock, CHECKSUM_METHOD_MD5, FileEntry, Mapping,
    WHOLE_GENOME_SEQUENCING,
};

use crate::common::{into_document, write_accession_element, write_text_element};
use crate::error::Result;

/// Serialize the analysis document.
///
/// Element order follows the archive schema: TITLE, DESCRIPTION, STUDY_REF,
/// SAMPLE_REF (insertion order), RUN_REF, then per file an ANALYSIS_TYPE
/// block followed by its FILES element.
pub fn write_analysis_xml(record: &AnalysisRecord) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("ANALYSIS");
    if let Some(alias) = record.alias.as_deref() {
        root.push_attribute(("alias", alias));
    }
    if let Some(center_name) = record.center_name.as_deref() {
        root.push_attribute(("center_name", center_name));
    }
    if let Some(broker_name) = record.broker_name.as_deref() {
        root.push_attribute(("broker_name", broker_name));
    }
    if let Some(analysis_center) = record.analysis_center.as_deref() {
        root.push_attribute(("analysis_center", analysis_center));
    }
    xml.write_event(Event::Start(root))?;

    if let Some(title) = record.title.as_deref() {
        write_text_element(&mut xml, "TITLE", title)?;
    }
    if let Some(description) = record.description.as_deref() {
        write_text_element(&mut xml, "DESCRIPTION", description)?;
    }
    if let Some(study) = record.study_accession.as_deref() {
        write_accession_element(&mut xml, "STUDY_REF", study)?;
    }
    for (label, accession) in record.samples.iter() {
        let mut sample = BytesStart::new("SAMPLE_REF");
        sample.push_attribute(("label", label));
        sample.push_attribute(("accession", accession));
        xml.write_event(Event::Empty(sample))?;
    }
    if let Some(run) = record.run_accession.as_deref() {
        write_accession_element(&mut xml, "RUN_REF", run)?;
    }

    for entry in &record.files {
        write_analysis_type(&mut xml, &entry.assembly_block)?;
        write_files(&mut xml, entry)?;
    }

    xml.write_event(Event::End(BytesEnd::new("ANALYSIS")))?;
    into_document(xml)
}

fn write_analysis_type<W: Write>(xml: &mut Writer<W>, block: &AssemblyBlock) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("ANALYSIS_TYPE")))?;
    match block {
        AssemblyBlock::SequenceVariation {
            assembly,
            sequences,
        } => {
            xml.write_event(Event::Start(BytesStart::new("SEQUENCE_VARIATION")))?;
            write_reference_sequences(xml, assembly.as_deref(), sequences)?;
            write_text_element(xml, "EXPERIMENT_TYPE", WHOLE_GENOME_SEQUENCING)?;
            xml.write_event(Event::End(BytesEnd::new("SEQUENCE_VARIATION")))?;
        }
        AssemblyBlock::ReferenceAlignment {
            assembly,
            sequences,
        } => {
            xml.write_event(Event::Start(BytesStart::new("REFERENCE_ALIGNMENT")))?;
            write_reference_sequences(xml, assembly.as_deref(), sequences)?;
            xml.write_event(Event::End(BytesEnd::new("REFERENCE_ALIGNMENT")))?;
        }
    }
    xml.write_event(Event::End(BytesEnd::new("ANALYSIS_TYPE")))?;
    Ok(())
}

fn write_reference_sequences<W: Write>(
    xml: &mut Writer<W>,
    assembly: Option<&str>,
    sequences: &Mapping,
) -> Result<()> {
    if let Some(accession) = assembly {
        xml.write_event(Event::Start(BytesStart::new("ASSEMBLY")))?;
        write_accession_element(xml, "STANDARD", accession)?;
        xml.write_event(Event::End(BytesEnd::new("ASSEMBLY")))?;
    }
    for (label, accession) in sequences.iter() {
        let mut sequence = BytesStart::new("SEQUENCE");
        sequence.push_attribute(("accession", accession));
        sequence.push_attribute(("label", label));
        xml.write_event(Event::Empty(sequence))?;
    }
    Ok(())
}

fn write_files<W: Write>(xml: &mut Writer<W>, entry: &FileEntry) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("FILES")))?;
    let mut file = BytesStart::new("FILE");
    if let Some(file_name) = entry.file_name.as_deref() {
        file.push_attribute(("filename", file_name));
    }
    file.push_attribute(("filetype", entry.file_type.as_str()));
    file.push_attribute(("checksum_method", CHECKSUM_METHOD_MD5));
    if let Some(checksum) = entry.checksum.as_deref() {
        file.push_attribute(("checksum", checksum));
    }
    xml.write_event(Event::Empty(file))?;
    xml.write_event(Event::End(BytesEnd::new("FILES")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ena_model::FileType;

    #[test]
    fn file_attributes_on_the_wire() {
        let mut record = AnalysisRecord::default();
        let mut file = FileEntry::new(FileType::Vcf);
        file.file_name = Some("calls.vcf".to_string());
        file.checksum = Some("10899e2ca49b37c8c37c4763616496ac".to_string());
        record.files.push(file);

        let doc = write_analysis_xml(&record).expect("serialize");
        assert!(doc.contains(r#"filename="calls.vcf""#));
        assert!(doc.contains(r#"filetype="vcf""#));
        assert!(doc.contains(r#"checksum_method="MD5""#));
        assert!(doc.contains(r#"checksum="10899e2ca49b37c8c37c4763616496ac""#));
    }

    #[test]
    fn unset_identity_attributes_are_omitted() {
        let record = AnalysisRecord::default();
        let doc = write_analysis_xml(&record).expect("serialize");
        assert!(!doc.contains("alias="));
        assert!(!doc.contains("center_name="));
    }

    #[test]
    fn sequence_attribute_order() {
        let mut record = AnalysisRecord::default();
        let mut file = FileEntry::new(FileType::Bam);
        file.assembly_block.add_sequence("1", "GK000031.2");
        record.files.push(file);

        let doc = write_analysis_xml(&record).expect("serialize");
        assert!(doc.contains(r#"<SEQUENCE accession="GK000031.2" label="1"/>"#));
    }
}
