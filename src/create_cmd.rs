//! Create command: wrap a raw save in a `.BUP` header.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use bup_header::{BUP_EXTENSION, BUP_HEADER_SIZE, BupHeader};

use crate::cli::CreateArgs;
use crate::config::BupConfig;
use crate::convert;

/// Run the create command.
pub fn run(args: CreateArgs) -> Result<()> {
    let _cmd = info_span!("create").entered();

    // 1. Load optional TOML defaults
    let config = match args.config {
        Some(ref path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str::<BupConfig>(&toml_str).context("failed to parse TOML config")?
        }
        None => BupConfig::default(),
    };

    // 2. CLI flags override config values
    let comment = args.comment.as_deref().unwrap_or(&config.create.comment);
    let language =
        convert::parse_language(args.language.as_deref().unwrap_or(&config.create.language))?;
    let date = convert::packed_from_str(args.date.as_deref().unwrap_or(&config.create.date))?;
    debug!(%language, date = date.get(), "resolved header fields");

    // 3. Read raw save and build the header
    let payload = std::fs::read(&args.input)
        .with_context(|| format!("failed to read raw save: {}", args.input.display()))?;
    let mut header = BupHeader::new_save(&args.name, comment, language, date, payload.len())?;
    header.save_id = config.create.save_id;
    header.dir.block_size = config.create.block_size;

    // 4. Write header + payload
    let output = args
        .output
        .unwrap_or_else(|| default_output(&args.input, &args.name));
    let mut bytes = Vec::with_capacity(BUP_HEADER_SIZE + payload.len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(&payload);
    std::fs::write(&output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(path = %output.display(), len = bytes.len(), "bup file written");
    println!(
        "Created {} from {} ({} bytes)",
        output.display(),
        args.input.display(),
        payload.len()
    );
    Ok(())
}

/// `NAME.BUP` next to the input file.
fn default_output(input: &std::path::Path, name: &str) -> PathBuf {
    input.with_file_name(format!("{name}{BUP_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bup_header::{Language, validate};

    fn args(input: PathBuf, name: &str) -> CreateArgs {
        CreateArgs {
            input,
            name: name.to_string(),
            comment: None,
            language: None,
            date: None,
            config: None,
            output: None,
        }
    }

    #[test]
    fn creates_with_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("raw.bin");
        std::fs::write(&input, [0xAB; 100]).unwrap();

        run(args(input, "PANZER_01")).unwrap();

        let bytes = std::fs::read(dir.path().join("PANZER_01.BUP")).unwrap();
        assert_eq!(bytes.len(), 164);
        let header = validate(&bytes).unwrap();
        assert_eq!(header.dir.filename_str(), "PANZER_01");
        assert_eq!(header.dir.comment_str(), "SGC");
        assert_eq!(header.dir.language().unwrap(), Language::English);
        assert_eq!(header.dir.date.expand().to_string(), "1994/11/24 00:00");
        assert_eq!(header.date, header.dir.date);
        assert_eq!(&bytes[64..], &[0xAB; 100]);
    }

    #[test]
    fn flags_override_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("raw.bin");
        std::fs::write(&input, [1, 2]).unwrap();
        let config = dir.path().join("bup.toml");
        std::fs::write(
            &config,
            "[create]\ncomment = \"CFG\"\nlanguage = \"Italiano\"\nsave_id = 7\nblock_size = 1\n",
        )
        .unwrap();
        let output = dir.path().join("out.BUP");

        let mut create = args(input, "GAME");
        create.config = Some(config);
        create.language = Some("Deutsch".to_string());
        create.date = Some("2001-02-03T04:05".to_string());
        create.output = Some(output.clone());
        run(create).unwrap();

        let header = validate(&std::fs::read(output).unwrap()).unwrap();
        assert_eq!(header.dir.comment_str(), "CFG");
        assert_eq!(header.dir.language().unwrap(), Language::German);
        assert_eq!(header.dir.date.expand().to_string(), "2001/02/03 04:05");
        assert_eq!(header.save_id, 7);
        assert_eq!(header.dir.block_size, 1);
    }

    #[test]
    fn rejects_long_name() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("raw.bin");
        std::fs::write(&input, b"").unwrap();
        let err = run(args(input, "TWELVE_CHARS")).unwrap_err();
        assert!(err.to_string().contains("save name is 12 bytes"));
    }

    #[test]
    fn rejects_unknown_language() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("raw.bin");
        std::fs::write(&input, b"").unwrap();
        let mut create = args(input, "GAME");
        create.language = Some("Klingon".to_string());
        assert!(run(create).is_err());
    }
}
