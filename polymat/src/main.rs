use polymat::{get_opts, run_polymat, PolymatResult};
use std::io::{Read, Write};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("POLYMAT_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = match get_opts(|app| app.get_matches_safe(), use_color) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };

    if atty::is(atty::Stream::Stdin) {
        writeln!(
            &mut ch_stderr,
            "Enter {} matrix(es) as height and width followed by elements, then EOF:",
            opts.action.arity()
        )?;
        ch_stderr.flush()?;
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let PolymatResult {
        code,
        stdout,
        stderr,
    } = run_polymat(opts, &input);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        writeln!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    std::process::exit(code)
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!("\nnote: you found an internal polymat error!\n");
            eprint!("\nnote: we would appreciate a bug report with the input that caused it.\n");
            std::process::exit(2);
        }
    }
}
