use std::{fs, path::PathBuf};

use tempfile::tempdir;

use lineage_cli::{Args, Format, run};

/// Collects all .ftree files from a directory
fn collect_ftree_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("ftree")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(input: &PathBuf, output: PathBuf, format: Format) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        format,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_ftree_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut formats = vec![Format::Timeline, Format::Generations];
    if cfg!(feature = "graphviz") {
        formats.extend([Format::Tree, Format::Structure]);
    }

    let mut failed = Vec::new();

    for demo_path in &valid_demos {
        for &format in &formats {
            let output_filename = format!(
                "{}_{format:?}.out",
                demo_path.file_stem().unwrap().to_string_lossy()
            );
            let output_path = temp_dir.path().join(output_filename);

            match run(&args(demo_path, output_path.clone(), format)) {
                Ok(()) => {
                    let written = fs::read_to_string(&output_path).unwrap();
                    if written.is_empty() {
                        failed.push((demo_path.clone(), format, "empty output".to_string()));
                    }
                }
                Err(e) => failed.push((demo_path.clone(), format, e.to_string())),
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, format, err) in &failed {
            eprintln!("  - {} ({format:?}): {err}", path.display());
        }
        panic!("{} valid demo run(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_ftree_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.out",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args(demo_path, output_path, Format::Timeline)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_config_anchor() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[generation]\nanchor = \"Luc\"\n").unwrap();

    let demo = demos_path().join("martin_family.ftree");
    let output_path = temp_dir.path().join("generations.out");
    let mut args = args(&demo, output_path.clone(), Format::Generations);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Failed to run with config");

    let listing = fs::read_to_string(output_path).unwrap();
    assert!(listing.starts_with("Generation 0:\n    Luc\n"));
    assert!(listing.contains("Generation 2:\n    Jean\n    Marie\n"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.ftree");

    let err = run(&args(
        &missing,
        temp_dir.path().join("out"),
        Format::Timeline,
    ))
    .unwrap_err();

    assert!(matches!(err, lineage::LineageError::Io(_)));
}
