use clap::Parser;
use dirsort::cli;
use dirsort::output::OutputFormatter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Sort a directory's files into category subfolders chosen by extension.
#[derive(Debug, Parser)]
#[command(name = "dirsort", version, about)]
struct Args {
    /// Directory whose files will be sorted
    directory: PathBuf,

    /// Read ignore rules from a specific config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // Help and version displays exit cleanly; real parse errors do not.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let target = match std::path::absolute(&args.directory) {
        Ok(path) => path,
        Err(err) => {
            OutputFormatter::error(&format!(
                "Cannot resolve path {}: {}",
                args.directory.display(),
                err
            ));
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = cli::run_with_config(&target, args.config.as_deref()) {
        OutputFormatter::error(&err.to_string());
        if let Some(hint) = err.hint() {
            OutputFormatter::hint(&hint);
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
