use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use pacboot_error::{BootstrapError, Result};

/// Compression wrapped around a package's tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Gzip,
    Xz,
    Zstd,
}

impl ArchiveFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        if file_name.ends_with(".gz") {
            Ok(Self::Gzip)
        } else if file_name.ends_with(".xz") {
            Ok(Self::Xz)
        } else if file_name.ends_with(".zst") {
            Ok(Self::Zstd)
        } else {
            Err(BootstrapError::UnknownPackageFormat(file_name.to_string()))
        }
    }

    /// Decompression stage: wraps `reader` so that reading it yields the
    /// plain tar stream.
    pub fn decoder<'a, R: Read + 'a>(self, reader: R) -> io::Result<Box<dyn Read + 'a>> {
        let decoder: Box<dyn Read + 'a> = match self {
            Self::Gzip => Box::new(flate2::read::GzDecoder::new(reader)),
            Self::Xz => Box::new(xz2::read::XzDecoder::new(reader)),
            Self::Zstd => Box::new(zstd::stream::read::Decoder::new(reader)?),
        };
        Ok(decoder)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct ArchiveExtractor;

impl ArchiveExtractor {
    /// Unpacks a compressed package archive into `dest`.
    ///
    /// Decompression and untarring run as two streaming stages; nothing is
    /// staged on disk in between. A failure part-way leaves whatever was
    /// already written under `dest`.
    pub fn extract(archive: &Path, dest: &Path) -> Result<ArchiveFormat> {
        let file_name = archive
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = ArchiveFormat::from_file_name(&file_name)?;

        let file = File::open(archive).map_err(|e| {
            BootstrapError::Io(format!("Failed to open {}: {e}", archive.display()))
        })?;

        format
            .decoder(BufReader::new(file))
            .and_then(|stream| Self::unpack(stream, dest))
            .map_err(|e| BootstrapError::ExtractionFailed(file_name, e.to_string()))?;

        Ok(format)
    }

    /// Tar stage: consumes an uncompressed tar stream.
    pub fn unpack<R: Read>(stream: R, dest: &Path) -> io::Result<()> {
        let mut archive = tar::Archive::new(stream);
        archive.set_preserve_permissions(true);
        archive.set_preserve_mtime(true);
        archive.set_preserve_ownerships(preserves_ownership());
        archive.set_overwrite(true);
        archive.unpack(dest)
    }
}

/// Only root can hand files to other owners, as with GNU tar's `--same-owner`.
#[cfg(unix)]
fn preserves_ownership() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
const fn preserves_ownership() -> bool {
    false
}
