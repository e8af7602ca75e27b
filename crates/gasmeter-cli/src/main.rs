use std::{env, fs, process::ExitCode, time::Instant};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(file_path) = args.get(1) else {
        eprintln!("usage: gasmeter <script.js>");
        return ExitCode::FAILURE;
    };

    let code = match read_file(file_path) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    match gasmeter::transform(&code) {
        Ok(instrumented) => {
            let elapsed = start.elapsed();
            eprintln!("instrumented {file_path} in {elapsed:?}");
            println!("{instrumented}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error:\n{err}");
            ExitCode::FAILURE
        }
    }
}

fn read_file(file_path: &str) -> Result<String, String> {
    eprintln!("reading file: {file_path}");
    match fs::metadata(file_path) {
        Ok(metadata) => {
            if !metadata.is_file() {
                return Err(format!("{file_path} is not a file"));
            }
        }
        Err(err) => {
            return Err(format!("error reading {file_path}: {err}"));
        }
    }
    fs::read_to_string(file_path).map_err(|err| format!("error reading file: {err}"))
}
