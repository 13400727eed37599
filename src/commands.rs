//======================================================================
// src/commands.rs
// Subcommand implementations. Results go to `out`; diagnostics go through
// `tracing`.
//======================================================================

use crate::cli::{CipherArgs, Cli, Commands};
use anyhow::{Context, Result};
use rc5x::{Padding, Rc5};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Hash { file, digest_size } => {
            run_hash(&build(&cli.cipher)?, &file, digest_size, out)
        }
        Commands::Avalanche { file, byte, bit } => {
            run_avalanche(&build(&cli.cipher)?, &file, byte, bit, out)
        }
        Commands::Report { file } => run_report(&build(&cli.cipher)?, &file, out),
        Commands::Encrypt { input, output } => run_encrypt(&build(&cli.cipher)?, &input, &output),
        Commands::Decrypt {
            input,
            output,
            strip_zeros,
        } => {
            let padding = if strip_zeros {
                Padding::StripTrailingZeros
            } else {
                Padding::Keep
            };
            run_decrypt(&build(&cli.cipher)?, &input, &output, padding)
        }
        Commands::Arc4 { text, arc4_key } => run_arc4(&text, &arc4_key, out),
    }
}

fn build(args: &CipherArgs) -> Result<Rc5> {
    let rc5 = args.build().context("invalid cipher parameters")?;
    debug!(params = ?rc5.params(), "cipher ready");
    Ok(rc5)
}

fn run_hash(rc5: &Rc5, file: &Path, digest_size: Option<usize>, out: &mut impl Write) -> Result<()> {
    let digest = rc5
        .hash_file(file, digest_size)
        .with_context(|| format!("failed to hash {}", file.display()))?;
    info!(file = %file.display(), bytes = digest.len(), "hashed");
    writeln!(out, "{}", hex::encode(digest))?;
    Ok(())
}

fn run_avalanche(rc5: &Rc5, file: &Path, byte: usize, bit: u32, out: &mut impl Write) -> Result<()> {
    let data = std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let report = rc5
        .avalanche(&data, byte, bit)
        .with_context(|| format!("failed to flip byte {byte} of {}", file.display()))?;
    info!(file = %file.display(), byte, bit, ratio = report.ratio(), "avalanche measured");
    writeln!(out, "{report}")?;
    Ok(())
}

fn run_report(rc5: &Rc5, file: &Path, out: &mut impl Write) -> Result<()> {
    let data = std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    writeln!(out, "hash: {}", hex::encode(rc5.hash_bytes(&data, None)))?;
    writeln!(out, "{}", rc5.avalanche(&data, 0, 0)?)?;
    Ok(())
}

fn run_encrypt(rc5: &Rc5, input: &Path, output: &Path) -> Result<()> {
    let written = rc5
        .encrypt_file(input, output)
        .with_context(|| format!("failed to encrypt {}", input.display()))?;
    info!(input = %input.display(), output = %output.display(), written, "encrypted");
    Ok(())
}

fn run_decrypt(rc5: &Rc5, input: &Path, output: &Path, padding: Padding) -> Result<()> {
    if padding == Padding::StripTrailingZeros {
        debug!("stripping trailing zero bytes from every block");
    }
    let written = rc5
        .decrypt_file(input, output, padding)
        .with_context(|| format!("failed to decrypt {}", input.display()))?;
    info!(input = %input.display(), output = %output.display(), written, "decrypted");
    Ok(())
}

fn run_arc4(text: &str, key: &str, out: &mut impl Write) -> Result<()> {
    let keystream = arc4::Keystream::new(key.as_bytes())
        .map_err(|_| anyhow::anyhow!("ARC4 key must be 1 to 256 bytes long"))?;
    let (mut encrypt, mut decrypt) = (keystream.clone(), keystream);

    let mut buffer = text.as_bytes().to_vec();
    encrypt.apply(&mut buffer);
    writeln!(out, "ciphertext (hex): {}", hex::encode(&buffer))?;

    decrypt.apply(&mut buffer);
    let decrypted = String::from_utf8(buffer).context("decrypted text is not UTF-8")?;
    writeln!(out, "decrypted: {decrypted}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn hash_prints_hex_digest() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("abc.txt");
        fs::write(&file, b"abc").unwrap();
        let path = file.to_str().unwrap();

        assert_eq!(run_args(&["rc5x", "hash", path]).unwrap(), "10ea100bfe8299b6\n");
        assert_eq!(run_args(&["rc5x", "hash", path, "-d", "2"]).unwrap(), "10ea\n");
        assert_eq!(run_args(&["rc5x", "-w", "16", "hash", path]).unwrap(), "9d64046c\n");
    }

    #[test]
    fn report_prints_hash_and_avalanche() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("hello.txt");
        fs::write(&file, b"hello").unwrap();

        let output = run_args(&["rc5x", "report", file.to_str().unwrap()]).unwrap();
        assert!(output.starts_with("hash: 07dea5b3cf3cac1a\n"));
        assert!(output.contains("modified:       bfc1c3c40c7a5d43"));
        assert!(output.contains("differing bits: 35 / 64"));
    }

    #[test]
    fn encrypt_then_decrypt_files() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let sealed = dir.path().join("plain.rc5");
        let opened = dir.path().join("opened.txt");
        fs::write(&plain, b"attack at dawn").unwrap();

        let (p, s, o) = (
            plain.to_str().unwrap(),
            sealed.to_str().unwrap(),
            opened.to_str().unwrap(),
        );
        run_args(&["rc5x", "-k", "secret", "encrypt", p, s]).unwrap();
        assert_eq!(fs::read(&sealed).unwrap().len(), 16);

        run_args(&["rc5x", "-k", "secret", "decrypt", s, o, "--strip-zeros"]).unwrap();
        assert_eq!(fs::read(&opened).unwrap(), b"attack at dawn");

        run_args(&["rc5x", "-k", "secret", "decrypt", s, o]).unwrap();
        assert_eq!(fs::read(&opened).unwrap(), b"attack at dawn\0\0");
    }

    #[test]
    fn avalanche_on_empty_file_with_huge_index_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty");
        fs::write(&file, b"").unwrap();
        let path = file.to_str().unwrap();
        let max = usize::MAX.to_string();

        let err = run_args(&["rc5x", "avalanche", path, "--byte", &max]).unwrap_err();
        assert!(format!("{err:#}").contains("too large to flip in empty input"));

        let output = run_args(&["rc5x", "avalanche", path, "--byte", "2"]).unwrap();
        assert!(output.contains("digest length:  8 bytes"));
    }

    #[test]
    fn arc4_prints_ciphertext_and_plaintext() {
        let output = run_args(&["rc5x", "arc4", "Plaintext", "--arc4-key", "Key"]).unwrap();
        assert_eq!(
            output,
            "ciphertext (hex): bbf316e8d940af0ad3\ndecrypted: Plaintext\n"
        );
    }

    #[test]
    fn errors_carry_context() {
        let err = run_args(&["rc5x", "hash", "/definitely/not/here"]).unwrap_err();
        assert!(format!("{err:#}").contains("failed to hash /definitely/not/here"));

        let err = run_args(&["rc5x", "-w", "8", "hash", "x"]).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported word size: 8 bits"));

        let err = run_args(&["rc5x", "arc4", "x", "--arc4-key", ""]).unwrap_err();
        assert!(err.to_string().contains("1 to 256 bytes"));

        let long_key = "k".repeat(257);
        let err = run_args(&["rc5x", "arc4", "x", "--arc4-key", &long_key]).unwrap_err();
        assert!(err.to_string().contains("1 to 256 bytes"));
    }
}
