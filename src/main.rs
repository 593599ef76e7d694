use cursus_sim::model::Republic;
use cursus_sim::report::Report;
use cursus_sim::sim::{SimConfig, SimSystem, YearlyCycle, run};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let seed: u64 = rand::random();
    let mut republic = Republic::new();
    let mut systems: Vec<Box<dyn SimSystem>> = vec![Box::new(YearlyCycle::new())];

    if let Err(e) = run(&mut republic, &mut systems, SimConfig::standard(seed)) {
        eprintln!("Simulation error: {e}");
        std::process::exit(1);
    }

    print!("{}", Report::from_republic(&republic));
}
