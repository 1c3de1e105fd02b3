use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("sitegraft")
        .version("0.1.0")
        .author("Sitegraft Contributors")
        .about("Import a mirrored legacy HTML site into Astro pages")
        .arg(
            clap::arg!(--"mirror-root" <DIR> "Mirror root directory")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--"output-root" <DIR> "Output directory for generated pages")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--"base-path" <PATH> "Base path prefix for rewritten internal links"))
        .arg(clap::arg!(--"site-title" <TITLE> "Site title appended to every page title"))
        .arg(clap::arg!(-v --verbose "Enable step-by-step progress logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "sitegraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "sitegraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "sitegraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "sitegraft", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
