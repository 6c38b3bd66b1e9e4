//! Plain-text dumps of matrices and timings.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mixcol_core::Matrix;
use mixcol_runtime::TimingRecord;

/// Output files produced for one data size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub initial: PathBuf,
    pub results: PathBuf,
    pub timings: PathBuf,
}

impl ArtifactPaths {
    pub fn for_size(dir: &Path, size_bytes: usize) -> Self {
        Self {
            initial: dir.join(format!("initial_matrices_{size_bytes}B.txt")),
            results: dir.join(format!("results_{size_bytes}B.txt")),
            timings: dir.join(format!("processing_times_{size_bytes}B.txt")),
        }
    }

    /// Deletes whichever of the three files exist as regular files.
    pub fn remove_files(&self) {
        for path in [&self.initial, &self.results, &self.timings] {
            if path.is_file() && fs::remove_file(path).is_ok() {
                log::debug!("removed {}", path.display());
            }
        }
    }
}

fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    for row in matrix.rows() {
        for byte in row {
            write!(out, "{byte} ")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Writes the matrices as generated, `Matrix <i>:` headers.
pub fn write_initial<'a, W, I>(out: &mut W, matrices: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Matrix>,
{
    for (i, matrix) in matrices.into_iter().enumerate() {
        writeln!(out, "Matrix {}:", i + 1)?;
        write_matrix(out, matrix)?;
    }
    Ok(())
}

/// Writes transformed matrices, `Matrix <i> after MixColumns:` headers.
pub fn write_results<W: Write>(out: &mut W, transformed: &[Matrix]) -> io::Result<()> {
    for (i, matrix) in transformed.iter().enumerate() {
        writeln!(out, "Matrix {} after MixColumns:", i + 1)?;
        write_matrix(out, matrix)?;
    }
    Ok(())
}

/// Writes one `Matrix <i>: <seconds> seconds` line per record.
pub fn write_timings<W: Write>(out: &mut W, timings: &[TimingRecord]) -> io::Result<()> {
    for record in timings {
        writeln!(out, "Matrix {}: {:.9} seconds", record.index, record.seconds())?;
    }
    Ok(())
}

/// Creates `path` and fills it with `write`. A partially written file is removed.
pub fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let result = write(&mut out).and_then(|()| out.flush());
    if let Err(err) = result {
        drop(out);
        let _ = fs::remove_file(path);
        return Err(err).with_context(|| format!("write {}", path.display()));
    }
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to vec");
        String::from_utf8(buf).expect("utf8")
    }

    fn counting_matrix() -> Matrix {
        Matrix::from_bytes(std::array::from_fn(|i| (i * 17) as u8))
    }

    #[test]
    fn initial_dump_format() {
        let matrices = [counting_matrix(), Matrix::filled(255)];
        let text = render(|out| write_initial(out, &matrices));
        let expected = "Matrix 1:\n\
                        0 17 34 51 \n\
                        68 85 102 119 \n\
                        136 153 170 187 \n\
                        204 221 238 255 \n\
                        \n\
                        Matrix 2:\n\
                        255 255 255 255 \n\
                        255 255 255 255 \n\
                        255 255 255 255 \n\
                        255 255 255 255 \n\
                        \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn result_dump_format() {
        let text = render(|out| write_results(out, &[Matrix::zero()]));
        assert_eq!(
            text,
            "Matrix 1 after MixColumns:\n0 0 0 0 \n0 0 0 0 \n0 0 0 0 \n0 0 0 0 \n\n"
        );
    }

    #[test]
    fn timing_dump_uses_nine_fractional_digits() {
        let timings = [
            TimingRecord::new(1, Duration::from_nanos(120)),
            TimingRecord::new(2, Duration::from_millis(1500)),
        ];
        let text = render(|out| write_timings(out, &timings));
        assert_eq!(
            text,
            "Matrix 1: 0.000000120 seconds\nMatrix 2: 1.500000000 seconds\n"
        );
    }

    #[test]
    fn empty_inputs_write_nothing() {
        assert_eq!(render(|out| write_initial(out, &[] as &[Matrix])), "");
        assert_eq!(render(|out| write_timings(out, &[])), "");
    }

    #[test]
    fn artifact_names_carry_size() {
        let paths = ArtifactPaths::for_size(Path::new("out"), 1_048_576);
        assert_eq!(paths.initial, Path::new("out/initial_matrices_1048576B.txt"));
        assert_eq!(paths.results, Path::new("out/results_1048576B.txt"));
        assert_eq!(paths.timings, Path::new("out/processing_times_1048576B.txt"));
    }

    #[test]
    fn create_failure_names_the_file() {
        let dir = std::env::temp_dir().join(format!("mixcol-report-{}", std::process::id()));
        fs::create_dir_all(dir.join("blocked.txt")).expect("mkdir");
        let target = dir.join("blocked.txt");
        let err = write_file(&target, |_| Ok(())).expect_err("directory is not a file");
        assert!(format!("{err:#}").contains("blocked.txt"));
        fs::remove_dir_all(&dir).ok();
    }
}
