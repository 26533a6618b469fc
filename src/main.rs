use std::error::Error;

use toxfilter::mining::cli::main_mining;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    main_mining(args)
}
