use clap::Parser;
use parcels::{compute_parcel_perimeters, report};

/// Groups plots into 4-connected parcels and reports their perimeters.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Plot coordinates in the form "x,y" (both axes 0 to 99)
    #[clap(required = true, value_name = "POINT")]
    points: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    match compute_parcel_perimeters(&args.points) {
        Ok(perimeters) => println!("{}", report::summary(&perimeters)),
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}
