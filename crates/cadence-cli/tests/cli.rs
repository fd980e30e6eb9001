use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("cadence").unwrap()
}

struct Fixture {
    _tmp: TempDir,
    input: String,
    metadata: String,
    output: String,
}

fn fixture(valencia: &str, metadata: &str) -> Fixture {
    let tmp = TempDir::new().expect("create temp dir");
    let input = tmp.path().join("valencia.csv");
    let meta = tmp.path().join("metadata.csv");
    let output = tmp.path().join("dynamics.csv");
    fs::write(&input, valencia).expect("write valencia fixture");
    fs::write(&meta, metadata).expect("write metadata fixture");
    Fixture {
        input: input.to_string_lossy().into_owned(),
        metadata: meta.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
        _tmp: tmp,
    }
}

#[test]
fn classifies_a_small_cohort_with_defaults() {
    let f = fixture(
        "sampleID,CST\nd1,I\nd2,I\nd3,I\nd4,I\nd5,III\nd6,I\nd7,III\nd8,III\nd9,III\nd10,III\n",
        "sampleID,subjectID,menses\n\
         d1,S1,0\nd2,S1,0\nd3,S1,0\nd4,S1,1\nd5,S1,0\n\
         d6,S2,0\nd7,S2,0\nd8,S2,0\nd9,S2,0\nd10,S2,1\n",
    );

    cmd()
        .args(["-i", &f.input, "-m", &f.metadata, "-o", &f.output])
        .assert()
        .success();

    let written = fs::read_to_string(&f.output).expect("output written");
    assert_eq!(
        written,
        "SampleID,Dynamics\nS1,Constant eubiotic\nS2,Constant dysbiotic\n"
    );
}

#[test]
fn subjects_without_valencia_rows_are_undetermined() {
    let f = fixture(
        "sampleID,CST\nd1,I\n",
        "sampleID,subjectID,menses\nd1,S1,0\nd2,S2,0\n",
    );

    cmd()
        .args(["-i", &f.input, "-m", &f.metadata, "-o", &f.output])
        .assert()
        .success();

    let written = fs::read_to_string(&f.output).expect("output written");
    assert_eq!(
        written,
        "SampleID,Dynamics\nS1,Constant eubiotic\nS2,Undetermined\n"
    );
}

#[test]
fn rejects_an_overlapping_partition() {
    let f = fixture(
        "sampleID,CST\nd1,I\n",
        "sampleID,subjectID,menses\nd1,S1,0\n",
    );

    cmd()
        .args([
            "-i", &f.input, "-m", &f.metadata, "-o", &f.output,
            "-e", "I,II,V",
            "-d", "I,III,IV-A,IV-B,IV-C",
        ])
        .assert()
        .failure()
        .stderr(contains("both eubiotic and dysbiotic"));
}

#[test]
fn rejects_an_incomplete_partition() {
    let f = fixture(
        "sampleID,CST\nd1,I\n",
        "sampleID,subjectID,menses\nd1,S1,0\n",
    );

    cmd()
        .args([
            "-i", &f.input, "-m", &f.metadata, "-o", &f.output,
            "-e", "I,II",
            "-d", "III,IV-A,IV-B,IV-C",
        ])
        .assert()
        .failure()
        .stderr(contains("missing: V"));
}

#[test]
fn rejects_unknown_labels_in_the_valencia_table() {
    let f = fixture(
        "sampleID,CST\nd1,IV-D\n",
        "sampleID,subjectID,menses\nd1,S1,0\n",
    );

    cmd()
        .args(["-i", &f.input, "-m", &f.metadata, "-o", &f.output])
        .assert()
        .failure()
        .stderr(contains("unrecognized CST label"));
}

#[test]
fn rejects_a_bad_menses_value() {
    let f = fixture(
        "sampleID,CST\nd1,I\n",
        "sampleID,subjectID,menses\nd1,S1,maybe\n",
    );

    cmd()
        .args(["-i", &f.input, "-m", &f.metadata, "-o", &f.output])
        .assert()
        .failure()
        .stderr(contains("menses must be 0 or 1"));
}

#[test]
fn subtypes_mode_reads_the_subcst_column() {
    let f = fixture(
        "sampleID,CST,subCST\nd1,I,I-A\nd2,I,I-B\nd3,I,I-A\nd4,I,I-A\nd5,III,III-B\n",
        "sampleID,subjectID,menses\nd1,S1,0\nd2,S1,0\nd3,S1,0\nd4,S1,1\nd5,S1,0\n",
    );

    cmd()
        .args(["-i", &f.input, "-m", &f.metadata, "-o", &f.output, "--subtypes"])
        .assert()
        .success();

    let written = fs::read_to_string(&f.output).expect("output written");
    assert_eq!(written, "SampleID,Dynamics\nS1,Constant eubiotic\n");
}

#[test]
fn missing_input_path_fails_with_context() {
    let f = fixture("sampleID,CST\n", "sampleID,subjectID,menses\n");

    cmd()
        .args(["-i", "/nonexistent/valencia.csv", "-m", &f.metadata, "-o", &f.output])
        .assert()
        .failure()
        .stderr(contains("reading VALENCIA output"));
}
