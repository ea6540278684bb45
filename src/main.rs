use greyscale::cli::{self, Invocation};
use greyscale::codec::ImageRsCodec;
use greyscale::convert::convert;
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match cli::parse_args(&args) {
        Ok(invocation) => invocation,
        Err(_) => {
            eprintln!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    match invocation {
        Invocation::Help => eprintln!("{}", cli::USAGE),
        Invocation::Convert { input, output } => {
            if let Err(err) = convert(&input, &output, &ImageRsCodec) {
                eprintln!("{err}");
                process::exit(1);
            }
            println!("Converted to greyscale!");
        }
    }
}
