use gemfprep::model::para::write_para;
use gemfprep::{ContactNetwork, InitialStatus, RateTable, TransitionMatrices};

fn main() -> anyhow::Result<()> {
    // Ring of five nodes, one infected, SIR dynamics.
    let mut network = String::new();
    for i in 0..5 {
        network.push_str(&format!("NODE\tp{}\t.\n", i));
    }
    for i in 0..5 {
        network.push_str(&format!("EDGE\tp{}\tp{}\t.\tu\n", i, (i + 1) % 5));
    }
    let states = "p0\tI\np1\tS\np2\tS\np3\tS\np4\tS\n";
    let rates = "S\tI\tI\t0.5\nI\tR\tnone\t0.2\n";

    let net = ContactNetwork::read(network.as_bytes())?;
    let init = InitialStatus::read(states.as_bytes(), &net.nodes)?;
    let mut state_registry = init.states.clone();
    let table = RateTable::read(rates.as_bytes(), &mut state_registry)?;
    let matrices = TransitionMatrices::build(&table, state_registry.len());

    println!("# network.txt");
    net.write_edges(std::io::stdout().lock())?;
    println!("# status.txt");
    init.write_status(std::io::stdout().lock())?;
    println!("# para.txt");
    write_para(std::io::stdout().lock(), &matrices, None)?;

    for (label, idx) in state_registry.iter() {
        println!("# state {} = {}", label, idx);
    }
    Ok(())
}
