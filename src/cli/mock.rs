// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

use std::path::Path;
use std::process;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::args::MockArgs;
use crate::error::{PoseError, Result};
use crate::mock::MockGenerator;
use crate::results::PredictionResult;
use crate::{error, success, verbose};

/// Check that a capture file is an acceptable upload.
///
/// The prediction backend only accepts CSV captures; anything else is
/// rejected before any prediction path runs. The file itself is not opened.
///
/// # Errors
///
/// Returns an error for a missing file name or a non-`.csv` extension,
/// with the backend's rejection messages.
pub fn check_upload(path: &Path) -> Result<()> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Err(PoseError::UploadError("No selected file".to_string()));
    };

    let allowed = name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("csv"));
    if !allowed {
        return Err(PoseError::UploadError(
            "Invalid file format. Only CSV files are allowed.".to_string(),
        ));
    }

    Ok(())
}

/// Run the mock command: generate predictions and emit wire-format JSON.
pub fn run_mock(args: &MockArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    if let Some(source) = &args.source {
        if let Err(e) = check_upload(source) {
            error!("{e}");
            process::exit(1);
        }
        verbose!("Accepted capture file {}", source.display());
    }

    let results = match args.seed {
        Some(seed) => {
            verbose!("Using seeded generator (seed {seed})");
            collect(
                MockGenerator::from_rng(StdRng::seed_from_u64(seed)),
                args.count,
            )
        }
        None => collect(MockGenerator::new(), args.count),
    };

    let rendered = match render(&results, args.pretty) {
        Ok(lines) => lines,
        Err(e) => {
            error!("Failed to serialize predictions: {e}");
            process::exit(1);
        }
    };

    if let Some(output) = &args.output {
        if let Err(e) = write_lines(output, &rendered) {
            error!("Failed to write {}: {e}", output.display());
            process::exit(1);
        }
        let plural = if results.len() == 1 { "" } else { "s" };
        success!(
            "Saved {} prediction{plural} to {}",
            results.len(),
            output.display()
        );
    } else {
        for document in &rendered {
            println!("{document}");
        }
    }
}

fn collect<R: Rng>(mut generator: MockGenerator<R>, count: usize) -> Vec<PredictionResult> {
    (0..count).map(|_| generator.generate()).collect()
}

fn render(results: &[PredictionResult], pretty: bool) -> Result<Vec<String>> {
    results
        .iter()
        .map(|result| {
            if pretty {
                result.to_json_pretty()
            } else {
                result.to_json()
            }
        })
        .collect()
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut body = lines.join("\n");
    body.push('\n');
    std::fs::write(path, body)?;
    Ok(())
}
