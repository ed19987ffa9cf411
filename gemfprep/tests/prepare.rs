use std::path::Path;

use gemfprep::config::{PrepConfig, PrepSettings, DEFAULT_MAX_EVENTS, DEFAULT_SIMULATOR};
use gemfprep::pipeline::prepare;

const NETWORK: &str = "\
# ring of three
NODE\tn1\t.
NODE\tn2\t.
NODE\tn3\t.
EDGE\tn1\tn2\t.\tu
EDGE\tn2\tn3\t.\tu
EDGE\tn3\tn1\t.\td
";
const STATES: &str = "n1\tI\nn2\tS\nn3\tS\n";
const RATES: &str = "S\tI\tI\t0.3\nI\tR\tnone\t0.1\n";

fn write_inputs(dir: &Path, rates: &str) -> PrepConfig {
    let write = |name: &str, body: &str| {
        let p = dir.join(name);
        std::fs::write(&p, body).expect("write input");
        p
    };
    PrepConfig {
        contact_network: write("contact_network.tsv", NETWORK),
        initial_states: write("initial_states.tsv", STATES),
        rates: write("rates.tsv", rates),
        output: dir.join("gemf"),
        end_time: 50.0,
        max_events: DEFAULT_MAX_EVENTS,
        simulator: DEFAULT_SIMULATOR.to_string(),
    }
}

fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).expect("read output")
}

#[test]
fn prepare_writes_all_gemf_inputs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cfg = write_inputs(tmp.path(), RATES);
    cfg.check().expect("config valid");

    let summary = prepare(&cfg).expect("prepare");
    assert_eq!(summary.nodes, 3);
    assert_eq!(summary.directed_edges, 5);
    assert_eq!(summary.status_rows, 3);
    assert_eq!(summary.states, 3);
    assert_eq!(summary.inducers, vec![0]);

    let out = &cfg.output;
    assert_eq!(read(out, "node2num.txt"), "{\"n1\":1,\"n2\":2,\"n3\":3}\n");
    assert_eq!(read(out, "state2num.txt"), "{\"I\":0,\"S\":1,\"R\":2}\n");
    assert_eq!(read(out, "network.txt"), "1\t2\n2\t1\n2\t3\n3\t2\n3\t1\n");
    assert_eq!(read(out, "status.txt"), "0\n1\n1\n");
    assert_eq!(read(out, "output.txt"), "");

    insta::assert_snapshot!("sir_para", read(out, "para.txt"));
}

#[test]
fn existing_output_directory_is_refused() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cfg = write_inputs(tmp.path(), RATES);
    std::fs::create_dir(&cfg.output).expect("pre-create output");

    let err = cfg.check().expect_err("output exists");
    assert!(err.to_string().contains("Output directory exists"));
}

#[test]
fn non_positive_end_time_is_refused() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut cfg = write_inputs(tmp.path(), RATES);
    cfg.end_time = 0.0;
    assert!(cfg.check().is_err());
}

#[test]
fn translation_errors_abort_with_file_context() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cfg = write_inputs(tmp.path(), "S\tI\tI\t0.3\nS\tI\tI\t0.4\n");

    let err = prepare(&cfg).expect_err("duplicate transition");
    let msg = format!("{err:#}");
    assert!(msg.contains("Invalid transition rates file"), "{msg}");
    assert!(msg.contains("duplicate transition"), "{msg}");
}

#[test]
fn config_file_fills_gaps_and_flags_win() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("run.json");
    std::fs::write(
        &path,
        r#"{"contact_network": "net.tsv", "initial_states": "init.tsv", "rates": "rates.tsv",
            "output": "out", "end_time": 20.0}"#,
    )
    .expect("write config");

    let flags = PrepSettings { end_time: Some(75.0), ..PrepSettings::default() };
    let cfg = PrepSettings::from_json_file(&path)
        .expect("valid config")
        .overlay(flags)
        .resolve()
        .expect("complete settings");

    assert_eq!(cfg.contact_network, Path::new("net.tsv"));
    assert_eq!(cfg.output, Path::new("out"));
    assert_eq!(cfg.end_time, 75.0);
    assert_eq!(cfg.max_events, DEFAULT_MAX_EVENTS);
    assert_eq!(cfg.simulator, DEFAULT_SIMULATOR);
}

#[test]
fn config_file_rejects_unknown_keys_and_missing_inputs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("run.json");
    std::fs::write(&path, r#"{"end_tme": 5}"#).expect("write config");
    assert!(PrepSettings::from_json_file(&path).is_err());

    let err = PrepSettings { end_time: Some(5.0), ..PrepSettings::default() }
        .resolve()
        .expect_err("no inputs");
    assert!(err.to_string().contains("missing contact network"), "{err}");
}
