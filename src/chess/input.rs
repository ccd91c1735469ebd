use super::{
    error::{CleanError, Result},
    log,
};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use zstd::stream::read::Decoder as ZstdDecoder;

/// Separator inserted between files when concatenating a directory tree.
pub const FILE_SEPARATOR: &[u8] = b"\n\n";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CompressionMode {
    #[default]
    Plain,
    Zstd,
}

impl CompressionMode {
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim();
        if normalized.eq_ignore_ascii_case("zstd") {
            Ok(Self::Zstd)
        } else {
            Err(CleanError::InvalidCompression(normalized.to_string()))
        }
    }

    /// File name suffix matched when scanning a directory.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Plain => "pgn",
            Self::Zstd => "pgn.zst",
        }
    }
}

fn open_input_stream(path: &Path, compression: CompressionMode) -> io::Result<Box<dyn Read>> {
    let file = File::open(path)?;
    match compression {
        CompressionMode::Plain => Ok(Box::new(file)),
        CompressionMode::Zstd => Ok(Box::new(ZstdDecoder::new(file)?)),
    }
}

/// How the input path is turned into PGN content for the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Treat the input path as a directory tree to scan and concatenate.
    pub concat: bool,
    pub compression: CompressionMode,
    /// Strip `{...}` comments while parsing.
    pub remove_comments: bool,
}

/// Raw content of a run plus, in concat mode, how many files went into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedInput {
    pub content: Vec<u8>,
    pub file_count: Option<usize>,
}

/// Reads a single file, or scans and concatenates a tree in concat mode.
pub fn load_input(path: &Path, options: &InputOptions) -> Result<LoadedInput> {
    if !options.concat {
        return Ok(LoadedInput {
            content: read_input(path, options.compression)?,
            file_count: None,
        });
    }

    let files = find_pgn_files(path, options.compression)?;
    Ok(LoadedInput {
        content: concatenate_pgn_files(&files, options.compression)?,
        file_count: Some(files.len()),
    })
}

/// Reads a whole input file as raw bytes, decoding it when `compression`
/// asks for it. No character encoding is assumed.
pub fn read_input(path: &Path, compression: CompressionMode) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(CleanError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source: io::Error| CleanError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let mut stream = open_input_stream(path, compression).map_err(unreadable)?;
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes).map_err(unreadable)?;

    log::debug(format!("Read {} bytes from '{}'", bytes.len(), path.display()));
    Ok(bytes)
}

fn has_pgn_extension(path: &Path, compression: CompressionMode) -> bool {
    let suffix = format!(".{}", compression.extension());
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(&suffix))
}

/// Recursively lists the files under `root` ending in the extension for
/// `compression`, in lexical order.
///
/// A `root` that is itself a file yields just that file when its name has
/// the extension, and nothing otherwise.
pub fn find_pgn_files(root: &Path, compression: CompressionMode) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(CleanError::InputNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        if has_pgn_extension(root, compression) {
            return Ok(vec![root.to_path_buf()]);
        }
        log::warn(format!(
            "'{}' is not a directory and not a .{} file",
            root.display(),
            compression.extension()
        ));
        return Ok(Vec::new());
    }

    let scan_failed = |message: String| CleanError::ScanFailed {
        root: root.to_path_buf(),
        message,
    };

    let root_pattern = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/*.{}", root_pattern, compression.extension());
    let mut files = Vec::new();
    for entry in glob::glob(&pattern).map_err(|e| scan_failed(e.to_string()))? {
        let path = entry.map_err(|e| scan_failed(e.to_string()))?;
        if path.is_file() {
            files.push(path);
        } else {
            log::debug(format!("Skipping non-file entry '{}'", path.display()));
        }
    }
    files.sort();

    log::info(format!(
        "Found {} .{} files under '{}'",
        files.len(),
        compression.extension(),
        root.display()
    ));
    Ok(files)
}

/// Reads every file in order and joins their contents with [`FILE_SEPARATOR`].
pub fn concatenate_pgn_files(
    files: &[PathBuf],
    compression: CompressionMode,
) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    for (idx, file) in files.iter().enumerate() {
        if idx > 0 {
            content.extend_from_slice(FILE_SEPARATOR);
        }
        content.extend_from_slice(&read_input(file, compression)?);
    }
    Ok(content)
}
