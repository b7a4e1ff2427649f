use log::info;
use spectralsampling::generator::DatasetGenerator;
use spectralsampling::output::write_dataset;
use spectralsampling::settings::read_parameter_file;
use std::env;

fn main() {
    env_logger::init();

    // parse command line arguments
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            println!("Please pass a parameter file.");
            std::process::exit(1)
        }
        2 => {
            let mut settings = match read_parameter_file(&args[1]) {
                Ok(s) => s,
                Err(e) => {
                    println!("Error reading parameter file: {}", e);
                    std::process::exit(1)
                }
            };

            settings.set_version(env!("CARGO_PKG_VERSION"));

            let mut generator = DatasetGenerator::new(settings.clone());
            let dataset = generator.generate(0);

            match write_dataset(&settings, &dataset) {
                Ok(path) => info!("Dataset written to '{}'.", path.display()),
                Err(e) => {
                    println!("Error writing dataset: {}", e);
                    std::process::exit(1)
                }
            }
        }
        _ => {
            println!("You've passed too many arguments. Please don't do that.");
            std::process::exit(1)
        }
    }

    std::process::exit(0);
}
