use std::{env, fs, path::PathBuf, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|v| v.split_whitespace().take(2).collect::<Vec<_>>().join(" "))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "rustc unknown".to_string());
    println!("cargo:rustc-env=HTML2CSV_RUSTC_VERSION={}", rustc_version);

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("html2csv")
        .about("Convert HTML tables to CSV")
        .disable_version_flag(true)
        .arg(
            clap::arg!([FILE] "HTML file to read (default: stdin)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-d --delimiter <CHAR> "Field delimiter")
                .required(false)
                .default_value(","),
        )
        .arg(clap::arg!(-t --table <SELECTOR> "Select tables by index, id or name (comma-separated)").required(false))
        .arg(clap::arg!(-H --"no-header" "Skip the first row of every table"))
        .arg(clap::arg!(-T --tsv "Use tab as delimiter (overrides --delimiter)"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(clap::arg!(--version "Print version and exit"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "html2csv", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "html2csv", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "html2csv", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "html2csv", &completions_dir).unwrap();
}
