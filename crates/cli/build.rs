use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("readscore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Score the readability of a web page")
        .arg(clap::arg!([INPUT] "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Report file, overwritten if it exists")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "What to print on stdout (summary, json)")
                .value_name("FORMAT")
                .default_value("summary")
                .value_parser(["summary", "json"]),
        )
        .arg(clap::arg!(--selector <CSS> "Only score text inside elements matching this CSS selector"))
        .arg(clap::arg!(--ms_per_char <MS> "Reading speed in milliseconds per character").default_value("14.69"))
        .arg(clap::arg!(--min_reading_ease <SCORE> "Recommend shorter sentences below this reading ease").default_value("60"))
        .arg(clap::arg!(--max_grade_level <GRADE> "Recommend simpler vocabulary above this grade level").default_value("12"))
        .arg(clap::arg!(--max_fog_index <INDEX> "Recommend splitting sentences above this fog index").default_value("12"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "readscore", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "readscore", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "readscore", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "readscore", &completions_dir).unwrap();
}
