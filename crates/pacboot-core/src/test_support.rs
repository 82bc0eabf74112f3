use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use pacboot_error::{BootstrapError, Result};
use pacboot_registry::Transport;

/// In-memory mirror that records every request it serves.
#[derive(Default)]
pub struct FakeTransport {
    files: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
    downloads: AtomicUsize,
}

impl FakeTransport {
    pub fn with_file(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.files.insert(url.to_string(), body.into());
        self
    }

    pub fn downloads(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> Result<&Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());
        self.files
            .get(url)
            .ok_or_else(|| BootstrapError::Network(format!("HTTP error for {url}: 404 Not Found")))
    }
}

impl Transport for FakeTransport {
    fn fetch_text(&self, url: &str) -> Result<String> {
        let body = self.lookup(url)?;
        Ok(String::from_utf8_lossy(body).into_owned())
    }

    fn download(&self, url: &str, writer: &mut dyn Write) -> Result<u64> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        let body = self.lookup(url)?;
        Ok(std::io::copy(&mut Cursor::new(body), writer)?)
    }
}

/// A gzip-compressed tar holding the given `(path, contents)` entries.
pub fn gzip_package(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, contents) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, contents.as_bytes()).unwrap();
    }
    let tar = builder.into_inner().unwrap();

    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&tar).unwrap();
    encoder.finish().unwrap()
}

/// One directory-listing line in the format nginx autoindex produces.
pub fn listing_line(file_name: &str) -> String {
    format!(
        "<a href=\"{file_name}\">{file_name}</a>                 05-Jan-2023 10:00     123456\n"
    )
}
