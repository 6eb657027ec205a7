use std::process::ExitCode;

use festkalendaro::Config;

fn main() -> ExitCode {
    let config = Config::default();
    match festkalendaro::run(&config) {
        Ok(()) => {
            println!("日历已生成: {}", config.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
