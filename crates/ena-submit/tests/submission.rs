//! Offline tests of the submission pipeline around the network boundary.

use ena_output::{AnalysisBuilder, AnalysisFile};
use ena_submit::{
    Credentials, EnaServer, Endpoints, SERVER_BUSY, SubmissionResult, interpret_response,
};

fn endpoints() -> Endpoints {
    Endpoints {
        test_url: "https://test.example.org/submit/drop-box".to_string(),
        production_url: "https://www.example.org/submit/drop-box".to_string(),
        ftp_host: "ftp.example.org".to_string(),
    }
}

#[test]
fn built_documents_are_ready_for_the_wire() {
    let docs = AnalysisBuilder::new()
        .alias("Maize HapMap test")
        .center_name("CSHL")
        .title("Capturing Extant Variation from a Genome in Flux: Maize HapMap II")
        .study_reference("SRP011907")
        .file(
            AnalysisFile::vcf()
                .file_name("Glab_var_chr1_flt_1k.vcf")
                .md5("10899e2ca49b37c8c37c4763616496ac"),
        )
        .build()
        .expect("valid deposit");

    // The ADD action must reference the logical filename used as the
    // ANALYSIS part's name on the wire.
    assert!(docs.submission.contains(r#"source="analysis.xml""#));
    assert!(docs.analysis.starts_with("<?xml"));
}

#[test]
fn server_selection_changes_only_the_base_url() {
    let credentials = Credentials::new("alice", "secret");
    let test = EnaServer::Test.submission_url(&endpoints(), &credentials);
    let production = EnaServer::Production.submission_url(&endpoints(), &credentials);
    assert!(test.starts_with("https://test.example.org/submit/drop-box?auth=ENA%20"));
    assert!(production.starts_with("https://www.example.org/submit/drop-box?auth=ENA%20"));
    assert_eq!(
        test.split('?').next_back(),
        production.split('?').next_back()
    );
}

#[test]
fn accepted_receipt_maps_to_a_successful_result() {
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<RECEIPT receiptDate="2012-05-30T11:38:08.284+01:00" success="true">
  <ANALYSIS accession="ERZ000011" status="PRIVATE"/>
  <SUBMISSION accession="ERA079819" alias="Maize HapMap test"/>
</RECEIPT>"#;
    let result = interpret_response(body).expect("interpret");
    assert_eq!(
        result,
        SubmissionResult {
            success: true,
            submission_accession: "ERA079819".to_string(),
            analysis_accession: "ERZ000011".to_string(),
            error: String::new(),
        }
    );
}

#[test]
fn busy_server_yields_a_failed_result_not_an_error() {
    let result = interpret_response(SERVER_BUSY).expect("interpret");
    assert!(!result.success);
    assert_eq!(result.error, SERVER_BUSY);
}
