//! Deterministic input-set generation
//!
//! Produces directories shaped like the real input: `files` text files, each
//! holding `lines` candidate CPFs of which `valid` pass the checksum. The
//! same seed always yields byte-identical files.

use super::{BASE_LEN, Cpf};
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Shape of a generated input set
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub files: usize,
    pub lines_per_file: usize,
    pub valid_per_file: usize,
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            files: 30,
            lines_per_file: 10,
            valid_per_file: 5,
            seed: 2024,
        }
    }
}

/// splitmix64, enough to spread the base digits
struct DigitSource {
    state: u64,
}

impl DigitSource {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_cpf(&mut self) -> Cpf {
        loop {
            let mut value = self.next_u64();
            let mut base = [0u8; BASE_LEN];
            for digit in base.iter_mut() {
                *digit = (value % 10) as u8;
                value /= 10;
            }
            if let Some(cpf) = Cpf::from_base(base) {
                return cpf;
            }
        }
    }
}

/// Turn a valid CPF into one that fails the second check digit
fn corrupt(cpf: &Cpf) -> String {
    let mut digits = *cpf.digits();
    digits[10] = (digits[10] + 1) % 10;
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// File name for the `index`-th generated file (1-based), zero padded so that
/// lexicographic order matches numeric order
pub fn file_name(index: usize, total: usize) -> String {
    let width = total.to_string().len().max(2);
    format!("cpfs_{index:0width$}.txt")
}

/// Write the input set into `directory`, creating it if needed.
///
/// Returns the written paths in name order.
pub fn write_input_set(directory: &Path, options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    if options.valid_per_file > options.lines_per_file {
        bail!(
            "cannot place {} valid lines in files of {} lines",
            options.valid_per_file,
            options.lines_per_file
        );
    }

    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create {}", directory.display()))?;

    let mut source = DigitSource::new(options.seed);
    let mut written = Vec::with_capacity(options.files);

    for index in 1..=options.files {
        let path = directory.join(file_name(index, options.files));
        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);

        for line in 0..options.lines_per_file {
            let cpf = source.next_cpf();
            // Alternate masked and bare forms so the normalizer is exercised
            let text = match (line < options.valid_per_file, line % 2 == 0) {
                (true, true) => cpf.to_string(),
                (true, false) => cpf.to_plain(),
                (false, _) => corrupt(&cpf),
            };
            writeln!(out, "{text}")?;
        }

        out.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    tracing::debug!(
        "Generated {} files in {} ({} lines, {} valid each)",
        options.files,
        directory.display(),
        options.lines_per_file,
        options.valid_per_file
    );

    Ok(written)
}
