use std::process::ExitCode;

use lampsort::verify::Verifier;

fn main() -> ExitCode {
    let verifier = match Verifier::from_env() {
        Ok(verifier) => verifier,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match verifier.run(|v| lampsort::sort(v)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Always report the seed to ensure reproducibility of failures.
            eprintln!("{err}\nSeed: {}", verifier.seed);
            ExitCode::FAILURE
        }
    }
}
